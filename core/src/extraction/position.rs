use crate::error::{ResidueError, Result};
use crate::types::Position;
use log::warn;

use super::tags::{Metadata, IMAGE_POSITION_KEY};

/// Extracts the Image Position (Patient) from a metadata map
///
/// The value is split on backslashes and every segment is parsed as a
/// float. The number of segments is not enforced; an unusual count is
/// only logged.
///
/// # Errors
///
/// - [`ResidueError::MissingPositionTag`] if `0020|0032` is absent
/// - [`ResidueError::BadPositionFormat`] if a segment is not numeric
pub fn extract_position(metadata: &Metadata) -> Result<Position> {
    let raw = metadata
        .get(IMAGE_POSITION_KEY)
        .ok_or_else(|| ResidueError::MissingPositionTag(IMAGE_POSITION_KEY.to_string()))?;

    let position = Position::parse(raw)?;
    if position.len() != 3 {
        warn!(
            "Image position '{}' has {} components, expected 3",
            raw,
            position.len()
        );
    }

    Ok(position)
}
