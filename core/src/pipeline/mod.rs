//! Folder validation and residue computation

pub mod folder;
pub mod residue;

pub use folder::{check_input_folder, collect_dicom_files};
pub use residue::{
    run, ResidueOutputs, FILTERED_RESIDUE, RESIDUE_DIR, RESIDUE_IMAGE_COUNT, UNFILTERED_RESIDUE,
};
