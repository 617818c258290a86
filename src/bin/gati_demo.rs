//! Multi-step extrapolation demo.
//!
//! Seeds a driver with a fixed pair of observations and advances the
//! candidate cloud once per frame, printing each frame to stdout.
//!
//! Usage:
//!   cargo run --bin gati-demo
//!   cargo run --bin gati-demo -- --frames 10 --seed 42 --format csv

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use gati::core::math::rad_to_deg;
use gati::{CandidateCloud, CloudDriver, GatiConfig, ObservationPair};

/// Observed timestamps, x and y of the demo target.
const DEMO_TS: [f64; 2] = [0.2, 0.3];
const DEMO_XS: [f64; 2] = [2.0, 3.0];
const DEMO_YS: [f64; 2] = [2.0, 3.0];

/// Output format for each frame
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One summary line per frame
    Summary,
    /// One CSV row per candidate
    Csv,
}

/// Stochastic extrapolation demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = gati::config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Number of frames (the first frame seeds the cloud)
    #[arg(short, long, default_value_t = 4)]
    frames: usize,

    /// Override the RNG seed from the config (0 = entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatiConfig::load_or_default(Path::new(&args.config))?;
    let mut driver_config = config.driver_config();
    if let Some(seed) = args.seed {
        driver_config.seed = seed;
    }

    info!(
        "dt={}s samples={} speed_std={} heading_std={:.1}deg anchor={:?}",
        driver_config.dt,
        driver_config.samples,
        driver_config.noise.speed_std,
        rad_to_deg(driver_config.noise.heading_std),
        driver_config.anchor
    );

    let mut driver = CloudDriver::new(driver_config)?;
    let observation = ObservationPair::from_columns(DEMO_TS, DEMO_XS, DEMO_YS)?;

    if matches!(args.format, OutputFormat::Csv) {
        println!("frame,index,t,x,y");
    }

    for frame in 1..=args.frames {
        let input = (frame == 1).then_some(&observation);
        let cloud = driver.step(input)?;
        match args.format {
            OutputFormat::Summary => print_summary(frame, cloud),
            OutputFormat::Csv => print_csv(frame, cloud),
        }
    }

    Ok(())
}

fn print_summary(frame: usize, cloud: &CandidateCloud) {
    let (cx, cy) = cloud.centroid().unwrap_or_default();
    let ((min_x, min_y), (max_x, max_y)) = cloud.bounds().unwrap_or_default();
    println!(
        "frame {:>3}  t={:.3}  n={}  centroid=({:.3}, {:.3})  spread={:.3}  bounds=[{:.3}, {:.3}]x[{:.3}, {:.3}]",
        frame,
        cloud.horizon().unwrap_or_default(),
        cloud.len(),
        cx,
        cy,
        cloud.spread(),
        min_x,
        max_x,
        min_y,
        max_y
    );
}

fn print_csv(frame: usize, cloud: &CandidateCloud) {
    for (i, p) in cloud.iter().enumerate() {
        println!("{},{},{:.6},{:.6},{:.6}", frame, i, p.t, p.x, p.y);
    }
}
