pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::types::DEFAULT_SIGMA;

/// Command-line arguments for dcmresidue
#[derive(Parser, Debug)]
#[command(name = "dcmresidue")]
#[command(about = "Voxelwise residues of two DICOM slices, before and after smoothing")]
#[command(version)]
pub struct Cli {
    /// Folder holding exactly two DICOM files
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Standard deviation of the Gaussian kernel
    #[arg(short, long, default_value_t = DEFAULT_SIGMA)]
    pub sigma: f32,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Initialises `env_logger`, at debug level when `verbose` is set
///
/// `RUST_LOG` still takes precedence.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_only() {
        let cli = Cli::try_parse_from(["dcmresidue", "/data/pair"]).unwrap();
        assert_eq!(cli.folder, PathBuf::from("/data/pair"));
        assert_eq!(cli.sigma, 3.0);
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "dcmresidue",
            "pair",
            "--sigma",
            "0.5",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.sigma, 0.5);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Cli::try_parse_from(["dcmresidue"]).is_err());
    }
}
