use anyhow::Result;
use clap::Parser;
use shipdash::logging::{self, LogConfig};
use shipdash::{DashboardConfig, RunnerConfig, TelemetryRunner};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Spacecraft telemetry simulator — prints snapshots and warnings to the console.
#[derive(Debug, Parser)]
#[command(name = "shipdash", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "SHIPDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Tick interval in milliseconds (overrides config)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// RNG seed for reproducible runs (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit each tick as a JSON line instead of formatted text
    #[arg(long)]
    json: bool,

    /// Stop after this many ticks (runs until Ctrl-C if omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for file logging (disabled if omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(interval_ms) = cli.interval_ms {
        config.tick_interval_ms = interval_ms;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let _guard = logging::init(&LogConfig {
        level: config.log_level.clone(),
        json: cli.json,
        log_dir: cli.log_dir.clone(),
    })?;

    info!(
        tick_interval_ms = config.tick_interval_ms,
        seed = ?config.seed,
        "starting telemetry runner"
    );

    let runner = TelemetryRunner::new(RunnerConfig {
        tick_interval: Duration::from_millis(config.tick_interval_ms),
        toast_ttl_ms: config.toast_ttl_ms,
        thresholds: config.thresholds.clone(),
        seed: config.seed,
    });
    let mut rx = runner.subscribe();
    let handle = runner.start()?;

    let mut remaining = cli.ticks;
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let update = rx.borrow_and_update().clone();
                if cli.json {
                    println!("{}", serde_json::to_string(&update.snapshot)?);
                } else {
                    let snapshot = &update.snapshot;
                    println!(
                        "speed {:>4} km/h | alt {:>6} ft | fuel {:>6.2}% | temp {:>3}°C | thrust {:>2}% | shield {:>6.2}% | o2 {:>6.2}% | press {:.3} atm | rad {:>2}{}",
                        snapshot.speed,
                        snapshot.altitude,
                        snapshot.fuel,
                        snapshot.temperature,
                        snapshot.thrust,
                        snapshot.shield,
                        snapshot.oxygen,
                        snapshot.pressure,
                        snapshot.radiation,
                        if update.report.any_warning { "  [WARNING]" } else { "" },
                    );
                }

                if let Some(n) = remaining.as_mut() {
                    *n = n.saturating_sub(1);
                    if *n == 0 {
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break;
            }
        }
    }

    runner.stop();
    handle.await?;
    info!("telemetry runner stopped");

    Ok(())
}
