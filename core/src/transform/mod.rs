//! Transformation objects built from a single DICOM slice
//!
//! Each variant loads its source slice and metadata once, derives the
//! position from that same metadata, then computes its derived slice.
//! Nothing is settable afterwards; a different file means a new value.

mod rotated;
mod smoothed;

pub use rotated::RotatedImage;
pub use smoothed::SmoothedImage;

use crate::imaging::Slice;
use crate::types::Position;
use std::path::Path;

/// Common view over the transformation variants
pub trait Transform {
    /// File the source slice was loaded from
    fn path(&self) -> &Path;

    /// Slice as decoded from the file
    fn source(&self) -> &Slice;

    /// Slice produced by the transformation
    fn derived(&self) -> &Slice;

    /// Image Position (Patient) of the source slice
    fn position(&self) -> &Position;
}

/// Checks whether two transforms were taken at the same position
///
/// Comparison is exact. A transform always matches itself.
pub fn same_position<A, B>(a: &A, b: &B) -> bool
where
    A: Transform + ?Sized,
    B: Transform + ?Sized,
{
    std::ptr::eq(a.position(), b.position()) || a.position() == b.position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_gradient;
    use tempfile::TempDir;

    #[test]
    fn test_same_position_is_reflexive() {
        let dir = TempDir::new().unwrap();
        let path = write_gradient(dir.path(), "a.dcm", "1\\2\\3", 0);
        let smoothed = SmoothedImage::open(&path).unwrap();

        assert!(same_position(&smoothed, &smoothed));
    }

    #[test]
    fn test_same_position_across_variants() {
        let dir = TempDir::new().unwrap();
        let first = write_gradient(dir.path(), "a.dcm", "1\\2\\3", 0);
        let second = write_gradient(dir.path(), "b.dcm", "1.0\\2.0\\3.0", 5);
        let third = write_gradient(dir.path(), "c.dcm", "1\\2\\4", 0);

        let smoothed = SmoothedImage::open(&first).unwrap();
        let rotated = RotatedImage::open(&second).unwrap();
        let elsewhere = RotatedImage::open(&third).unwrap();

        assert!(same_position(&smoothed, &rotated));
        assert!(same_position(&rotated, &smoothed));
        assert!(!same_position(&smoothed, &elsewhere));
    }

    #[test]
    fn test_same_position_through_trait_objects() {
        let dir = TempDir::new().unwrap();
        let first = write_gradient(dir.path(), "a.dcm", "0\\0\\0", 0);
        let second = write_gradient(dir.path(), "b.dcm", "0\\0\\1", 0);

        let transforms: Vec<Box<dyn Transform>> = vec![
            Box::new(SmoothedImage::open(&first).unwrap()),
            Box::new(RotatedImage::open(&second).unwrap()),
        ];

        assert!(!same_position(transforms[0].as_ref(), transforms[1].as_ref()));
        assert!(same_position(transforms[1].as_ref(), transforms[1].as_ref()));
    }
}
