use crate::error::Result;
use image::{GrayImage, ImageFormat};
use log::info;
use std::path::{Path, PathBuf};

use super::Slice;

/// Rescales a slice linearly onto `[0, 255]` and casts it to 8 bits
///
/// The minimum sample maps to 0 and the maximum to 255; intermediate values
/// are truncated toward zero. A constant slice maps to 0 everywhere.
pub fn rescale_to_u8(slice: &Slice) -> GrayImage {
    let (min, max) = slice
        .as_raw()
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    let (width, height) = slice.dimensions();

    GrayImage::from_fn(width, height, |x, y| {
        let value = slice.get_pixel(x, y)[0];
        let scaled = if range > 0.0 && value.is_finite() {
            (value - min) * 255.0 / range
        } else {
            0.0
        };
        image::Luma([scaled.clamp(0.0, 255.0) as u8])
    })
}

/// Writes a slice as an 8-bit JPEG
///
/// The `.jpg` extension is appended when the path carries none. Returns the
/// path actually written.
pub fn save_as_jpg(slice: &Slice, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = with_jpg_extension(path.as_ref());
    rescale_to_u8(slice).save_with_format(&path, ImageFormat::Jpeg)?;
    info!("Wrote {}", path.display());
    Ok(path)
}

fn with_jpg_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "jpg") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".jpg");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rescale_spans_full_range() {
        let slice = Slice::from_raw(3, 1, vec![-1.0, 0.0, 1.0]).unwrap();
        let gray = rescale_to_u8(&slice);
        assert_eq!(gray.as_raw(), &vec![0u8, 127, 255]);
    }

    #[test]
    fn test_rescale_truncates() {
        // 0.9 * 255 = 229.5 and 0.1 * 255 = 25.5
        let slice = Slice::from_raw(4, 1, vec![0.0, 0.1, 0.9, 1.0]).unwrap();
        let gray = rescale_to_u8(&slice);
        assert_eq!(gray.as_raw(), &vec![0u8, 25, 229, 255]);
    }

    #[test]
    fn test_rescale_constant_slice() {
        let slice = Slice::from_raw(2, 2, vec![42.0; 4]).unwrap();
        let gray = rescale_to_u8(&slice);
        assert!(gray.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_with_jpg_extension() {
        assert_eq!(
            with_jpg_extension(Path::new("out/residue")),
            PathBuf::from("out/residue.jpg")
        );
        assert_eq!(
            with_jpg_extension(Path::new("out/residue.jpg")),
            PathBuf::from("out/residue.jpg")
        );
        assert_eq!(
            with_jpg_extension(Path::new("out/residue.v2")),
            PathBuf::from("out/residue.v2.jpg")
        );
    }

    #[test]
    fn test_save_as_jpg() {
        let dir = TempDir::new().unwrap();
        let samples: Vec<f32> = (0..64).map(|v| v as f32 * 10.0 - 300.0).collect();
        let slice = Slice::from_raw(8, 8, samples).unwrap();

        let written = save_as_jpg(&slice, dir.path().join("ramp")).unwrap();

        assert_eq!(written, dir.path().join("ramp.jpg"));
        let decoded = image::open(&written).unwrap();
        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }
}
