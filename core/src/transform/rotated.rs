use crate::error::Result;
use crate::extraction::extract_position;
use crate::imaging::{load_slice, quarter_turns, rotate_quarter_turns, Slice};
use crate::types::{Position, DEFAULT_ANGLE};
use log::debug;
use std::path::{Path, PathBuf};

use super::Transform;

/// A DICOM slice together with a copy rotated by a multiple of 90°
#[derive(Debug, Clone)]
pub struct RotatedImage {
    path: PathBuf,
    source: Slice,
    rotated: Slice,
    position: Position,
    angle: i32,
}

impl RotatedImage {
    /// Loads `path` and rotates it by 180°
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(path, DEFAULT_ANGLE)
    }

    /// Loads `path` and rotates it counter-clockwise by `angle` degrees
    ///
    /// Negative angles rotate clockwise.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded, if it has no image position, or
    /// with [`ResidueError::InvalidRotationAngle`](crate::ResidueError) if
    /// `angle` is not a multiple of 90.
    pub fn new(path: impl AsRef<Path>, angle: i32) -> Result<Self> {
        let path = path.as_ref();
        let loaded = load_slice(path)?;
        let position = extract_position(&loaded.metadata)?;
        let k = quarter_turns(angle)?;
        let rotated = rotate_quarter_turns(&loaded.pixels, k);

        debug!(
            "Rotated {} by {} quarter turns at {}",
            path.display(),
            k,
            position
        );

        Ok(Self {
            path: path.to_path_buf(),
            source: loaded.pixels,
            rotated,
            position,
            angle,
        })
    }

    /// The rotated slice
    pub fn rotated(&self) -> &Slice {
        &self.rotated
    }

    /// Rotation angle in degrees
    pub fn angle(&self) -> i32 {
        self.angle
    }
}

impl Transform for RotatedImage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn source(&self) -> &Slice {
        &self.source
    }

    fn derived(&self) -> &Slice {
        &self.rotated
    }

    fn position(&self) -> &Position {
        &self.position
    }
}
