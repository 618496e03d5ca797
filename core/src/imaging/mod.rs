//! Pixel-level collaborators: DICOM decoding, array operations and JPEG encoding

pub mod encoder;
pub mod loader;
pub mod ops;

use image::{ImageBuffer, Luma};

/// A single 2D slice of real-valued samples
///
/// Width is the DICOM column count, height the row count.
pub type Slice = ImageBuffer<Luma<f32>, Vec<f32>>;

pub use encoder::{rescale_to_u8, save_as_jpg};
pub use loader::{load_slice, LoadedSlice};
pub use ops::{gaussian_smooth, quarter_turns, rotate_quarter_turns, subtract};
