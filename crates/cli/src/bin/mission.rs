use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use solar_freight::core::constants::MU_SUN;
use solar_freight::core::units::au_to_km;
use solar_freight::ephemeris::Epoch;
use solar_freight::export::{self, DeltaVSplit, MissionReport};
use solar_freight::impulsive::{LAMBERT_MAX_ITERATIONS, hohmann};
use solar_freight::transfer::{MissionResult, SearchOptions, SearchRequest, TofWindow};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find the most fuel-efficient and the fastest transfer between two bodies"
)]
struct Cli {
    /// Departure body name (case-insensitive)
    #[arg(long)]
    from: String,

    /// Destination body name (case-insensitive)
    #[arg(long)]
    to: String,

    /// Vehicle name or alias (e.g. `moonivan`)
    #[arg(long)]
    vehicle: String,

    /// Payload mass in kg
    #[arg(long, default_value_t = 0.0)]
    payload: f64,

    /// Launch date: ddmmyy, dd/mm/yy, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS
    #[arg(long)]
    launch: String,

    /// Shortest candidate time of flight (days)
    #[arg(long, default_value_t = 50)]
    min_tof: u32,

    /// Longest candidate time of flight (days, inclusive)
    #[arg(long, default_value_t = 500)]
    max_tof: u32,

    /// Spacing between candidate durations (days)
    #[arg(long, default_value_t = 15)]
    step: u32,

    /// Body catalog (YAML list, TOML file or directory of TOML files); built-in if omitted
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Vehicle catalog (YAML list, TOML file or directory of TOML files); built-in if omitted
    #[arg(long)]
    vehicles: Option<PathBuf>,

    /// Write every candidate of the sweep as CSV to this file
    #[arg(long, value_parser = csv_path)]
    sweep_csv: Option<PathBuf>,

    /// Report half of the total Δv on each leg instead of the per-leg burns
    #[arg(long, default_value_t = false)]
    even_split: bool,

    /// Evaluate candidates on the calling thread
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Abandon the search after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Keep Lambert estimates that exhausted their iteration budget
    #[arg(long, default_value_t = false)]
    accept_unconverged: bool,

    /// Iteration budget of each Lambert solve
    #[arg(long, default_value_t = LAMBERT_MAX_ITERATIONS)]
    lambert_iterations: usize,

    /// Print the coplanar circular Hohmann estimate (Δv, TOF) to stderr
    #[arg(long, default_value_t = false)]
    estimate_hohmann: bool,
}

/// Stdout carries the JSON report, so the sweep table needs a real file.
fn csv_path(value: &str) -> Result<PathBuf, String> {
    if value == "-" {
        return Err("stdout is reserved for the JSON report; give a file path".into());
    }
    Ok(PathBuf::from(value))
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let context = solar_freight::load_context(cli.bodies.as_deref(), cli.vehicles.as_deref())?;

    let request = SearchRequest {
        origin: cli.from.clone(),
        destination: cli.to.clone(),
        vehicle: cli.vehicle.clone(),
        payload_kg: cli.payload,
        launch: Epoch::parse(&cli.launch)?,
        window: TofWindow::new(cli.min_tof, cli.max_tof, cli.step),
    };

    let mut options = if cli.sequential {
        SearchOptions::sequential()
    } else {
        SearchOptions::default()
    };
    options.accept_unconverged = cli.accept_unconverged;
    options = options.with_lambert_budget(cli.lambert_iterations);
    if let Some(ms) = cli.timeout_ms {
        options = options.with_timeout(Duration::from_millis(ms));
    }

    let sweep = context.sweep(&request, &options)?;
    if let Some(path) = &cli.sweep_csv {
        export::write_sweep_csv(&sweep, export::writer_for_path(path)?)?;
    }

    if cli.estimate_hohmann {
        let origin = context.ephemeris().body(&cli.from)?;
        let destination = context.ephemeris().body(&cli.to)?;
        let r1 = au_to_km(origin.elements.semi_major_axis_au);
        let r2 = au_to_km(destination.elements.semi_major_axis_au);
        if let Some(h) = hohmann(r1, r2, MU_SUN) {
            eprintln!(
                "Hohmann est.   : Δv_total = {:.3} km/s (dv1={:.3}, dv2={:.3}), TOF = {:.2} days",
                h.total_dv_km_s,
                h.departure_dv_km_s,
                h.arrival_dv_km_s,
                h.time_of_flight_days()
            );
        }
    }

    let split = if cli.even_split {
        DeltaVSplit::Even
    } else {
        DeltaVSplit::PerLeg
    };
    let outcome = MissionResult::from_report(sweep);
    let report = MissionReport::from_outcome(outcome.as_ref(), split);
    println!("{}", report.to_json()?);

    Ok(())
}
