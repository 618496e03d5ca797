use crate::error::{ResidueError, Result};

/// Default standard deviation of the smoothing kernel
pub const DEFAULT_SIGMA: f32 = 3.0;

/// Default rotation angle in degrees
pub const DEFAULT_ANGLE: i32 = 180;

/// Default number of images expected in an input folder
pub const DEFAULT_EXPECTED_COUNT: usize = 2;

/// Parameters of the transformations and of folder validation
///
/// # Example
///
/// ```
/// use dcmresidue_core::ResidueConfig;
///
/// let config = ResidueConfig::default().with_sigma(1.5).with_angle(-90);
///
/// assert_eq!(config.sigma, 1.5);
/// assert_eq!(config.angle, -90);
/// assert_eq!(config.expected_count, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidueConfig {
    /// Standard deviation of the Gaussian kernel, must be >= 0
    pub sigma: f32,

    /// Rotation angle in degrees, must be a multiple of 90
    pub angle: i32,

    /// Number of images an input folder must hold
    pub expected_count: usize,
}

impl Default for ResidueConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            angle: DEFAULT_ANGLE,
            expected_count: DEFAULT_EXPECTED_COUNT,
        }
    }
}

impl ResidueConfig {
    /// Builder: Set the smoothing sigma
    pub fn with_sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }

    /// Builder: Set the rotation angle
    pub fn with_angle(mut self, angle: i32) -> Self {
        self.angle = angle;
        self
    }

    /// Builder: Set the expected image count
    pub fn with_expected_count(mut self, count: usize) -> Self {
        self.expected_count = count;
        self
    }

    /// Checks every parameter against its recognized range
    pub fn validate(&self) -> Result<()> {
        validate_sigma(self.sigma)?;
        if self.angle % 90 != 0 {
            return Err(ResidueError::InvalidRotationAngle(self.angle));
        }
        if self.expected_count == 0 {
            return Err(ResidueError::InvalidImageCount(self.expected_count));
        }
        Ok(())
    }
}

/// Rejects negative and non-finite sigmas
pub(crate) fn validate_sigma(sigma: f32) -> Result<()> {
    if sigma.is_finite() && sigma >= 0.0 {
        Ok(())
    } else {
        Err(ResidueError::InvalidSigma(sigma))
    }
}
