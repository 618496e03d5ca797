use crate::error::{ResidueError, Result};
use crate::extraction::tags::{collect_metadata, Metadata};
use dicom::pixeldata::PixelDecoder;
use dicom_object::open_file;
use log::debug;
use std::path::Path;

use super::Slice;

/// Pixels and metadata decoded from one DICOM file
#[derive(Debug, Clone)]
pub struct LoadedSlice {
    /// First frame of the pixel data
    pub pixels: Slice,

    /// Textual metadata of the data set
    pub metadata: Metadata,
}

/// Fails with [`ResidueError::PathNotFound`] unless `path` exists
pub fn check_path_exists(path: &Path) -> Result<&Path> {
    if path.exists() {
        Ok(path)
    } else {
        Err(ResidueError::PathNotFound(path.to_path_buf()))
    }
}

/// Loads a single-slice DICOM image
///
/// The metadata is checked before any pixel is decoded. Multi-frame
/// objects are reduced to their first frame.
///
/// # Errors
///
/// - [`ResidueError::PathNotFound`] if the file does not exist
/// - [`ResidueError::DicomError`] if the file is not readable as DICOM
/// - [`ResidueError::NoMetadata`] if the data set has no textual elements
/// - [`ResidueError::PixelDataError`] if the pixel data cannot be decoded
pub fn load_slice(path: impl AsRef<Path>) -> Result<LoadedSlice> {
    let path = check_path_exists(path.as_ref())?;
    let dcm = open_file(path)?;

    let metadata = collect_metadata(&dcm);
    if metadata.is_empty() {
        return Err(ResidueError::NoMetadata);
    }

    let decoded = dcm
        .decode_pixel_data()
        .map_err(|e| ResidueError::PixelDataError(format!("{}: {}", path.display(), e)))?;

    if decoded.samples_per_pixel() != 1 {
        return Err(ResidueError::PixelDataError(format!(
            "{}: expected a single sample per pixel, found {}",
            path.display(),
            decoded.samples_per_pixel()
        )));
    }

    let width = decoded.columns();
    let height = decoded.rows();
    let frame_len = width as usize * height as usize;

    let mut samples = decoded
        .to_vec::<f32>()
        .map_err(|e| ResidueError::PixelDataError(format!("{}: {}", path.display(), e)))?;
    if samples.len() < frame_len {
        return Err(ResidueError::PixelDataError(format!(
            "{}: expected {} samples, found {}",
            path.display(),
            frame_len,
            samples.len()
        )));
    }
    samples.truncate(frame_len);

    let pixels = Slice::from_raw(width, height, samples).ok_or_else(|| {
        ResidueError::PixelDataError(format!(
            "{}: buffer does not match {}x{}",
            path.display(),
            width,
            height
        ))
    })?;

    debug!(
        "Loaded {} ({}x{}, {} metadata entries)",
        path.display(),
        width,
        height,
        metadata.len()
    );

    Ok(LoadedSlice { pixels, metadata })
}
