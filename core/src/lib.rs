pub mod cli;
pub mod error;
pub mod extraction;
pub mod imaging;
pub mod pipeline;
pub mod transform;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cli::report::TextReport;
pub use error::{ResidueError, Result};
pub use extraction::{extract_position, Metadata};
pub use imaging::{load_slice, save_as_jpg, LoadedSlice, Slice};
pub use pipeline::{check_input_folder, run, ResidueOutputs};
pub use transform::{same_position, RotatedImage, SmoothedImage, Transform};
pub use types::*;
