mod groundtrack;
mod spectrum;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::groundtrack::{segment, EphemerisDataset};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "sat-o-scope")]
#[command(about = "Satellite ground-track and spectrum dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        #[arg(short, long, default_value = "config.yaml")]
        config: String,
    },
    /// Validate an ephemeris dataset file
    Validate { dataset: String },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config),
        Commands::Validate { dataset } => validate(&dataset),
    }
}

fn serve(config_path: &str) -> ExitCode {
    let config = match Config::from_file(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    let dataset = match EphemerisDataset::from_file(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading dataset: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = dataset.validate() {
        eprintln!("Invalid dataset: {}", e);
        return ExitCode::FAILURE;
    }

    let groups = segment(&dataset.ephemeris);
    println!(
        "Dataset is valid: {} (NORAD {}), {} points in {} passes",
        dataset.metadata.satellite_name,
        dataset.metadata.norad_id,
        dataset.ephemeris.len(),
        groups.len()
    );
    for (pass_id, coords) in groups.iter() {
        println!("  pass {}: {} points", pass_id, coords.len());
    }
    ExitCode::SUCCESS
}
