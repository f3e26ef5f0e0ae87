//! `luopan` - analyzes the orientation a building faces.
//!
//! **Usage:**
//! ```text
//! luopan <FACING_BEARING> [--declination <DEG>] [--confidence high|medium|low]
//! ```
//!
//! Prints the orientation report as JSON. Exits non-zero on invalid input.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use luopan::application::{
    AnalyzeOrientationCommand, AnalyzeOrientationHandler, BearingConfidence, BearingReading,
    NorthReference,
};
use luopan::config::AppConfig;

/// Map a facing bearing onto the 24 mountains and score the orientation.
#[derive(Parser)]
#[command(name = "luopan", version, about)]
struct Args {
    /// Facing bearing in degrees, clockwise from north.
    #[arg(allow_negative_numbers = true)]
    bearing: f64,

    /// Treat the bearing as magnetic and correct it by this declination
    /// (east positive).
    #[arg(long, allow_negative_numbers = true)]
    declination: Option<f64>,

    /// Treat the bearing as magnetic, using the configured default declination.
    #[arg(long, conflicts_with = "declination")]
    magnetic: bool,

    /// Reading confidence reported by the sensor.
    #[arg(long, default_value = "high")]
    confidence: BearingConfidence,

    /// Print compact JSON instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    config.logging.init_tracing()?;

    info!(
        sector_lookup = ?config.engine.sector_lookup,
        default_declination = config.engine.default_declination,
        "Configuration loaded"
    );

    let north_reference = if args.magnetic || args.declination.is_some() {
        NorthReference::Magnetic
    } else {
        NorthReference::True
    };
    let reading = BearingReading {
        degrees: args.bearing,
        confidence: args.confidence,
        north_reference,
        declination: args.declination,
    };

    let handler = AnalyzeOrientationHandler::new(
        config.engine.sector_mapper(),
        config.engine.default_declination,
    );
    let report = handler.handle(AnalyzeOrientationCommand { facing: reading })?;

    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", json);

    Ok(())
}
