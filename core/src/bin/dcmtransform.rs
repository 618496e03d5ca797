use clap::{Parser, ValueEnum};
use dcmresidue_core::cli::setup_logging;
use dcmresidue_core::{
    save_as_jpg, ResidueConfig, Result, RotatedImage, SmoothedImage, Transform, DEFAULT_ANGLE,
    DEFAULT_SIGMA,
};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

/// CLI tool for inspecting a single transformed DICOM slice
#[derive(Parser, Debug)]
#[command(name = "dcmtransform")]
#[command(about = "Smooth or rotate one DICOM slice and save both versions as JPEG")]
#[command(version)]
struct Cli {
    /// DICOM file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Transformation to apply
    #[arg(short, long, default_value = "smooth")]
    mode: Mode,

    /// Standard deviation of the Gaussian kernel (smooth mode)
    #[arg(short, long, default_value_t = DEFAULT_SIGMA)]
    sigma: f32,

    /// Rotation angle in degrees, a multiple of 90 (rotate mode)
    #[arg(short, long, default_value_t = DEFAULT_ANGLE, allow_negative_numbers = true)]
    angle: i32,

    /// Directory receiving the JPEG files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Transformation options
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Gaussian smoothing
    Smooth,
    /// Rotation by quarter turns
    Rotate,
}

impl Mode {
    fn suffix(self) -> &'static str {
        match self {
            Mode::Smooth => "smoothed",
            Mode::Rotate => "rotated",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = transform_file(&cli) {
        error!("Failed to transform {}: {}", cli.file.display(), e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn config_from(cli: &Cli) -> Result<ResidueConfig> {
    let config = ResidueConfig::default()
        .with_sigma(cli.sigma)
        .with_angle(cli.angle);
    config.validate()?;
    Ok(config)
}

fn transform_file(cli: &Cli) -> Result<()> {
    let config = config_from(cli)?;
    let transform: Box<dyn Transform> = match cli.mode {
        Mode::Smooth => Box::new(SmoothedImage::new(&cli.file, config.sigma)?),
        Mode::Rotate => Box::new(RotatedImage::new(&cli.file, config.angle)?),
    };

    let (src_w, src_h) = transform.source().dimensions();
    let (out_w, out_h) = transform.derived().dimensions();
    println!("Source:   {}x{}", src_w, src_h);
    println!("Derived:  {}x{}", out_w, out_h);
    println!("Position: {}", transform.position());

    std::fs::create_dir_all(&cli.output_dir)?;
    let stem = file_stem(&cli.file);
    let original = save_as_jpg(
        transform.source(),
        cli.output_dir.join(format!("{}_original", stem)),
    )?;
    let derived = save_as_jpg(
        transform.derived(),
        cli.output_dir.join(format!("{}_{}", stem, cli.mode.suffix())),
    )?;
    info!(
        "Saved {} and {}",
        original.display(),
        derived.display()
    );

    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slice".to_string())
}
