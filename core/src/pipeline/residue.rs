use crate::error::Result;
use crate::imaging::{save_as_jpg, subtract};
use crate::transform::Transform;
use crate::types::{Position, ResidueConfig};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::folder::check_input_folder;

/// Number of images the residue pipeline compares
pub const RESIDUE_IMAGE_COUNT: usize = 2;

/// Output sub-directory created inside the input folder
pub const RESIDUE_DIR: &str = "residues";

/// File name of the difference of the source slices
pub const UNFILTERED_RESIDUE: &str = "unfiltered_residue.jpg";

/// File name of the difference of the smoothed slices
pub const FILTERED_RESIDUE: &str = "filtered_residue.jpg";

/// What a residue run produced, and from which inputs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ResidueOutputs {
    /// Directory holding the residue images
    pub residue_dir: PathBuf,

    /// Difference of the source slices
    pub unfiltered: PathBuf,

    /// Difference of the smoothed slices
    pub filtered: PathBuf,

    /// Minuend image
    pub first_input: PathBuf,

    /// Subtrahend image
    pub second_input: PathBuf,

    pub first_position: Position,
    pub second_position: Position,
}

/// Computes the voxelwise residues of the two images in `folder`
///
/// Writes `residues/unfiltered_residue.jpg` (first source minus second
/// source) and `residues/filtered_residue.jpg` (first smoothed minus second
/// smoothed) inside `folder`. The `residues` directory is created when
/// missing. The folder must hold exactly two images whatever
/// `config.expected_count` says.
///
/// # Errors
///
/// Any validation, loading or encoding error aborts the run.
pub fn run(folder: impl AsRef<Path>, config: &ResidueConfig) -> Result<ResidueOutputs> {
    let folder = folder.as_ref();
    let config = config.clone().with_expected_count(RESIDUE_IMAGE_COUNT);

    let images = check_input_folder(folder, &config)?;
    let (first, second) = (&images[0], &images[1]);

    let unfiltered_residue = subtract(first.source(), second.source())?;
    let filtered_residue = subtract(first.smoothed(), second.smoothed())?;
    info!(
        "Computed residues of {} minus {}",
        first.path().display(),
        second.path().display()
    );

    let residue_dir = folder.join(RESIDUE_DIR);
    fs::create_dir_all(&residue_dir)?;

    let unfiltered = save_as_jpg(&unfiltered_residue, residue_dir.join(UNFILTERED_RESIDUE))?;
    let filtered = save_as_jpg(&filtered_residue, residue_dir.join(FILTERED_RESIDUE))?;

    Ok(ResidueOutputs {
        residue_dir,
        unfiltered,
        filtered,
        first_input: first.path().to_path_buf(),
        second_input: second.path().to_path_buf(),
        first_position: first.position().clone(),
        second_position: second.position().clone(),
    })
}
