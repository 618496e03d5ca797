use crate::error::{ResidueError, Result};
use crate::types::validate_sigma;
use image::imageops;
use imageproc::filter::gaussian_blur_f32;

use super::Slice;

/// Applies a Gaussian smoothing kernel with standard deviation `sigma`
///
/// A sigma of zero is the identity kernel and returns a copy of the input.
pub fn gaussian_smooth(source: &Slice, sigma: f32) -> Result<Slice> {
    validate_sigma(sigma)?;
    if sigma == 0.0 {
        return Ok(source.clone());
    }
    Ok(gaussian_blur_f32(source, sigma))
}

/// Converts an angle in degrees into a count of quarter turns
///
/// # Errors
///
/// Returns [`ResidueError::InvalidRotationAngle`] unless the angle is a
/// multiple of 90
pub fn quarter_turns(angle: i32) -> Result<i32> {
    if angle % 90 != 0 {
        return Err(ResidueError::InvalidRotationAngle(angle));
    }
    Ok(angle / 90)
}

/// Rotates a slice by `k` quarter turns
///
/// Positive `k` turns counter-clockwise, negative `k` clockwise, so that
/// `[[1, 2], [3, 4]]` becomes `[[2, 4], [1, 3]]` for `k = 1`.
pub fn rotate_quarter_turns(source: &Slice, k: i32) -> Slice {
    // imageops rotates clockwise
    match k.rem_euclid(4) {
        1 => imageops::rotate270(source),
        2 => imageops::rotate180(source),
        3 => imageops::rotate90(source),
        _ => source.clone(),
    }
}

/// Voxelwise difference `left - right`
///
/// # Errors
///
/// Returns [`ResidueError::ShapeMismatch`] if the slices differ in size
pub fn subtract(left: &Slice, right: &Slice) -> Result<Slice> {
    if left.dimensions() != right.dimensions() {
        return Err(ResidueError::ShapeMismatch {
            left: left.dimensions(),
            right: right.dimensions(),
        });
    }

    let (width, height) = left.dimensions();
    let samples: Vec<f32> = left
        .as_raw()
        .iter()
        .zip(right.as_raw().iter())
        .map(|(l, r)| l - r)
        .collect();

    Slice::from_raw(width, height, samples).ok_or(ResidueError::ShapeMismatch {
        left: left.dimensions(),
        right: right.dimensions(),
    })
}
