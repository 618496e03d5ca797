//! Core type definitions
//!
//! - [`Position`]: Image Position (Patient) of a slice
//! - [`ResidueConfig`]: Transformation and validation parameters

mod config;
mod position;

pub use config::{ResidueConfig, DEFAULT_ANGLE, DEFAULT_EXPECTED_COUNT, DEFAULT_SIGMA};
pub(crate) use config::validate_sigma;
pub use position::Position;
