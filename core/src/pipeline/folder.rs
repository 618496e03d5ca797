use crate::error::{ResidueError, Result};
use crate::transform::{same_position, SmoothedImage, Transform};
use crate::types::ResidueConfig;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the `.dcm` files directly inside `directory`
///
/// The extension match is ASCII case-insensitive. Sub-directories and
/// hidden files (such as `._IM-0001.dcm` resource forks) are skipped.
/// Paths are returned sorted so that runs are reproducible.
pub fn collect_dicom_files(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(ResidueError::PathNotFound(directory.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() || is_hidden(&path) {
            continue;
        }
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("dcm"))
        {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Validates an input folder and builds one [`SmoothedImage`] per file
///
/// The file count is checked before anything is opened. Each image is
/// smoothed with `config.sigma`, and every pair of images must then report
/// a different position.
///
/// # Errors
///
/// - [`ResidueError::WrongImageCount`] if the folder does not hold exactly
///   `config.expected_count` `.dcm` files
/// - [`ResidueError::IdenticalPosition`] if two images share a position
/// - any error raised while loading an image
pub fn check_input_folder(
    folder: impl AsRef<Path>,
    config: &ResidueConfig,
) -> Result<Vec<SmoothedImage>> {
    let folder = folder.as_ref();
    config.validate()?;
    let paths = collect_dicom_files(folder)?;

    if paths.len() != config.expected_count {
        return Err(ResidueError::WrongImageCount {
            expected: config.expected_count,
            found: paths.len(),
        });
    }
    info!("Found {} DICOM files in {}", paths.len(), folder.display());

    let images = paths
        .iter()
        .map(|path| SmoothedImage::new(path, config.sigma))
        .collect::<Result<Vec<_>>>()?;

    for (i, first) in images.iter().enumerate() {
        for second in &images[i + 1..] {
            if same_position(first, second) {
                debug!(
                    "{} and {} share position {}",
                    first.path().display(),
                    second.path().display(),
                    first.position()
                );
                return Err(ResidueError::IdenticalPosition);
            }
        }
    }

    Ok(images)
}
