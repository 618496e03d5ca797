use crate::error::{ResidueError, Result};
use std::fmt;

/// Spatial position of an image slice, in millimeters
///
/// Parsed from the DICOM Image Position (Patient) tag. Three components
/// are expected but not enforced, so a malformed tag yields a shorter or
/// longer position instead of an error.
///
/// Equality is exact and element-wise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Position(Vec<f64>);

impl Position {
    /// Creates a position from its components
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Parses a backslash-separated position string
    ///
    /// Each segment is trimmed before parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use dcmresidue_core::Position;
    ///
    /// let position = Position::parse("-120.5\\ 84.0 \\12").unwrap();
    /// assert_eq!(position.as_slice(), &[-120.5, 84.0, 12.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ResidueError::BadPositionFormat`] if a segment is not a number
    pub fn parse(s: &str) -> Result<Self> {
        s.split('\\')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| ResidueError::BadPositionFormat {
                        value: s.to_string(),
                        reason: format!("'{}': {}", part.trim(), e),
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Components in tag order
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the position has no components
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, ")")
    }
}
