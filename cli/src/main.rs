//! Macroplan CLI
//!
//! Thin adapter over `macroplan-core`: parses and validates command-line
//! input, constructs a body definition, runs the estimation pipeline, and
//! prints the explanation trail (or a JSON record with `--json`).

use anyhow::{anyhow, Result};
use clap::Parser;
use macroplan_core::{
    estimate_macros, validation, ActivityLevel, BiologicalSex, BodyDefinition, BoundedRatio,
    CaloricAdjustment, Kilograms, MacroTargets, Meters, Ratio,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "macroplan",
    about = "Calculate daily macronutrient targets from body measurements."
)]
struct Cli {
    /// Your biological sex (male or female)
    #[arg(long, value_parser = parse_sex)]
    sex: BiologicalSex,

    /// Your height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Your weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Your age in years
    #[arg(long)]
    age: i32,

    /// Your body fat percentage
    #[arg(long)]
    body_fat_percent: f64,

    /// Your non-exercise activity level (sedentary, lightly-active,
    /// moderately-active, highly-active)
    #[arg(long, value_parser = parse_activity)]
    activity_level: ActivityLevel,

    /// Your intended caloric adjustment: a named level (large-deficit,
    /// small-deficit, maintenance, small-surplus, large-surplus) or a raw
    /// multiplier such as 0.85
    #[arg(long, value_parser = parse_adjustment, default_value = "maintenance")]
    caloric_adjustment: Ratio,

    /// Emit the result as JSON instead of explanation text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn parse_sex(s: &str) -> Result<BiologicalSex, String> {
    s.parse()
}

fn parse_activity(s: &str) -> Result<ActivityLevel, String> {
    s.parse()
}

/// Accept either a named caloric adjustment or a raw multiplier
fn parse_adjustment(s: &str) -> Result<Ratio, String> {
    if let Ok(level) = s.parse::<CaloricAdjustment>() {
        return Ok(level.ratio());
    }
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Expected a named caloric adjustment or a multiplier, got: {s}"))?;
    Ratio::new(value).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let macros = run(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&macros)?);
    } else {
        for explanation in &macros.explanations {
            println!("{explanation}");
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<MacroTargets> {
    validation::validate_height_cm(cli.height_cm).map_err(|msg| anyhow!(msg))?;
    validation::validate_weight_kg(cli.weight_kg).map_err(|msg| anyhow!(msg))?;
    validation::validate_age_years(cli.age).map_err(|msg| anyhow!(msg))?;
    validation::validate_body_fat_percent(cli.body_fat_percent).map_err(|msg| anyhow!(msg))?;

    let body = BodyDefinition::new(
        cli.sex,
        Meters::from_cm(cli.height_cm)?,
        Kilograms::new(cli.weight_kg)?,
        cli.age,
        BoundedRatio::new(cli.body_fat_percent / 100.0)?,
        cli.activity_level,
    )
    .with_caloric_adjustment(cli.caloric_adjustment);

    debug!(?body, "estimating macro targets");
    Ok(estimate_macros(&body)?)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
