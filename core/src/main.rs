use clap::Parser;
use dcmresidue_core::cli::{setup_logging, Cli, OutputFormat};
use dcmresidue_core::{run, ResidueConfig, ResidueOutputs, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!("Processing folder: {}", cli.folder.display());

    let config = ResidueConfig::default().with_sigma(cli.sigma);
    let outputs = match run(&cli.folder, &config) {
        Ok(outputs) => outputs,
        Err(e) => {
            error!("Residue computation failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_report(&outputs, cli.format);
}

fn output_report(outputs: &ResidueOutputs, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(outputs));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(outputs) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
