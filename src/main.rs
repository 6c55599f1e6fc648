//! jules-diag - diagnostics for gridded JULES netCDF output.

use anyhow::Result;
use clap::Parser;
use jules_diag::config::Config;
use jules_diag::geo::BoundingBox;
use jules_diag::pipeline;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "jules-diag")]
#[command(about = "Slicing and aggregation diagnostics for JULES netCDF output", long_about = None)]
struct Args {
    /// Path to the JULES output NetCDF file
    file: PathBuf,

    /// Variable to process (repeatable)
    #[arg(short = 'v', long = "variable", value_name = "NAME")]
    variables: Vec<String>,

    /// Restrict the time axis to this calendar year
    #[arg(long)]
    year: Option<i32>,

    /// Directory the output/ tree is written under
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Areal-mean study region as lat1,lat2,lon1,lon2
    #[arg(long, value_name = "LAT1,LAT2,LON1,LON2", allow_hyphen_values = true)]
    region: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting jules-diag");
    }

    if !args.file.exists() {
        eprintln!("Error: Path not found: {}", args.file.display());
        std::process::exit(1);
    }

    if args.variables.is_empty() {
        eprintln!("Error: No variables given (use -v/--variable)");
        std::process::exit(1);
    }

    let mut config = Config::new(args.file, args.output, args.variables);
    config.year = args.year;
    if let Some(region) = &args.region {
        config.study_region = parse_region(region)?;
    }

    pipeline::run(&config)?;

    if args.log.is_some() {
        tracing::info!("jules-diag finished");
    }

    Ok(())
}

fn parse_region(region: &str) -> Result<BoundingBox> {
    let parts: Vec<f64> = region
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| anyhow::anyhow!("invalid --region '{}': {}", region, e))?;
    if parts.len() != 4 {
        anyhow::bail!("--region needs four values, got {}", parts.len());
    }
    Ok(BoundingBox::new(parts[0], parts[1], parts[2], parts[3]))
}
