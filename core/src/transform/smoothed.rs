use crate::error::Result;
use crate::extraction::extract_position;
use crate::imaging::{gaussian_smooth, load_slice, Slice};
use crate::types::{Position, DEFAULT_SIGMA};
use log::debug;
use std::path::{Path, PathBuf};

use super::Transform;

/// A DICOM slice together with its Gaussian-smoothed version
///
/// # Example
///
/// ```no_run
/// use dcmresidue_core::{SmoothedImage, Transform};
///
/// let image = SmoothedImage::new("slices/IM-0001.dcm", 5.0).unwrap();
/// assert_eq!(image.source().dimensions(), image.smoothed().dimensions());
/// println!("position: {}", image.position());
/// ```
#[derive(Debug, Clone)]
pub struct SmoothedImage {
    path: PathBuf,
    source: Slice,
    smoothed: Slice,
    position: Position,
    sigma: f32,
}

impl SmoothedImage {
    /// Loads `path` and smooths it with the default sigma of 3.0
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(path, DEFAULT_SIGMA)
    }

    /// Loads `path` and smooths it with standard deviation `sigma`
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded, if it has no image position, or
    /// if `sigma` is negative or not finite.
    pub fn new(path: impl AsRef<Path>, sigma: f32) -> Result<Self> {
        let path = path.as_ref();
        let loaded = load_slice(path)?;
        let position = extract_position(&loaded.metadata)?;
        let smoothed = gaussian_smooth(&loaded.pixels, sigma)?;

        debug!(
            "Smoothed {} with sigma {} at {}",
            path.display(),
            sigma,
            position
        );

        Ok(Self {
            path: path.to_path_buf(),
            source: loaded.pixels,
            smoothed,
            position,
            sigma,
        })
    }

    /// The smoothed slice
    pub fn smoothed(&self) -> &Slice {
        &self.smoothed
    }

    /// Standard deviation of the smoothing kernel
    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl Transform for SmoothedImage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn source(&self) -> &Slice {
        &self.source
    }

    fn derived(&self) -> &Slice {
        &self.smoothed
    }

    fn position(&self) -> &Position {
        &self.position
    }
}
