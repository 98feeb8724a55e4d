use anyhow::Context;
use clap::Parser;
use generator::scenario::ScenarioConfig;
use log::info;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{default_catalog, CatalogConfig};
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Air-defence intercept planning driver")]
struct Args {
    /// Run a scenario file (.yaml) offline, one decision per simulated second
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Catalog file (.yaml) overriding the built-in bases and interceptors
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Feed the scenario through a real-time 1 Hz radar stream instead of
    /// evaluating it offline (Ctrl+C stops between ticks)
    #[arg(long, default_value_t = false)]
    live: bool,
    /// One-shot report: speed in m/s
    #[arg(long, default_value_t = 60.0)]
    speed_ms: f64,
    /// One-shot report: altitude in metres
    #[arg(long, default_value_t = 500.0)]
    altitude_m: f64,
    /// One-shot report: heading in degrees clockwise from north
    #[arg(long, default_value_t = 90.0)]
    heading_deg: f64,
    #[arg(long, default_value_t = 56.516441)]
    latitude: f64,
    #[arg(long, default_value_t = 21.109256)]
    longitude: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog_config = match &args.catalog {
        Some(path) => CatalogConfig::load(path)?,
        None => default_catalog(),
    };
    let runner = Runner::new(catalog_config.into_snapshot());

    match &args.scenario {
        Some(path) => {
            let scenario = ScenarioConfig::load(path)?;
            if args.live {
                run_live(&runner, &scenario)?;
            } else {
                run_offline(&runner, &scenario)?;
            }
        }
        None => run_oneshot(&runner, &args)?,
    }

    let metrics = runner.metrics().snapshot();
    info!(
        "metrics: selections={} engagements={} no_feasible={} rejected={}",
        metrics.selections, metrics.engagements, metrics.no_feasible, metrics.rejected_inputs
    );

    Ok(())
}

/// Evaluates a single report built from the command line and prints the
/// decision as JSON, the same shape a transport layer would forward.
fn run_oneshot(runner: &Runner, args: &Args) -> anyhow::Result<()> {
    let report = aegiscore::catalog::ThreatReport {
        speed_ms: args.speed_ms,
        altitude_m: args.altitude_m,
        heading_deg: args.heading_deg,
        latitude: args.latitude,
        longitude: args.longitude,
        report_time: 0.0,
    };
    let summary = runner.execute(&report)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_offline(runner: &Runner, scenario: &ScenarioConfig) -> anyhow::Result<()> {
    let ticks = runner.run_offline(scenario)?;
    for tick in &ticks {
        println!(
            "t={:>3}s pos=({:.6}, {:.6}) {} {}",
            tick.second,
            tick.report.latitude,
            tick.report.longitude,
            tick.decision.result.threat_level,
            tick.decision.note,
        );
    }
    println!("Offline run -> {} decisions", ticks.len());
    Ok(())
}

/// Consumes the paced radar stream on a current-thread runtime; Ctrl+C drops
/// the receiver, which cancels the producer between ticks.
fn run_live(runner: &Runner, scenario: &ScenarioConfig) -> anyhow::Result<()> {
    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime for the live radar feed")?;

    runtime.block_on(async {
        let mut stream = aegiscore::radar::RadarStream::spawn(
            scenario.initial_report(),
            scenario.duration_seconds,
        );
        loop {
            tokio::select! {
                report = stream.recv() => {
                    let Some(report) = report else { break };
                    let summary = runner.execute(&report)?;
                    println!(
                        "t={:.0}s pos=({:.6}, {:.6}) {} {}",
                        report.report_time,
                        report.latitude,
                        report.longitude,
                        summary.result.threat_level,
                        summary.note,
                    );
                }
                _ = signal::ctrl_c() => {
                    info!("interrupted; stopping radar feed");
                    break;
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
