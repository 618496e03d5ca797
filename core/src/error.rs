use std::path::PathBuf;
use thiserror::Error;

/// Result type for dcmresidue operations
pub type Result<T> = std::result::Result<T, ResidueError>;

/// Error types for dcmresidue operations
///
/// Every variant is fatal for the run that produced it.
#[derive(Error, Debug)]
pub enum ResidueError {
    /// Input path does not exist
    #[error("{} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// Decoded object carries no metadata entries
    #[error("The image is not a DICOM or there is no metadata")]
    NoMetadata,

    /// Image position tag absent from the metadata
    #[error("Tag not found: {0}")]
    MissingPositionTag(String),

    /// Image position segment is not a number
    #[error("Invalid image position '{value}': {reason}")]
    BadPositionFormat { value: String, reason: String },

    /// Rotation angle is not a multiple of 90 degrees
    #[error("The rotation angle is not a multiple of 90° (got {0})")]
    InvalidRotationAngle(i32),

    /// Folder does not hold the expected number of images
    #[error("Incorrect number of images. Aborting. (expected {expected}, found {found})")]
    WrongImageCount { expected: usize, found: usize },

    /// Two images report the same position
    #[error("The DICOM files appear to be the same. Aborting.")]
    IdenticalPosition,

    /// Smoothing sigma is negative or not finite
    #[error("Invalid smoothing sigma: {0}")]
    InvalidSigma(f32),

    /// Expected image count of zero
    #[error("Invalid expected image count: {0}")]
    InvalidImageCount(usize),

    /// Slices of different dimensions cannot be subtracted
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (u32, u32),
        right: (u32, u32),
    },

    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Pixel data could not be decoded or converted
    #[error("Pixel data error: {0}")]
    PixelDataError(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for ResidueError {
    fn from(e: dicom_object::ReadError) -> Self {
        ResidueError::DicomError(format!("{}", e))
    }
}
