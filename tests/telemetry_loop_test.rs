//! End-to-end tests for the simulate → evaluate → notify cycle.

use shipdash::{
    evaluate, MetricKind, MetricsSnapshot, RunnerConfig, Simulator, TelemetryRunner, ThresholdSet,
};
use std::time::Duration;
use tokio_test::assert_ok;

fn quiet_thresholds() -> ThresholdSet {
    ThresholdSet {
        oxygen: 0.0,
        shield: 0.0,
        fuel: 0.0,
        radiation: 1000.0,
        ..Default::default()
    }
}

#[test]
fn simulated_flight_eventually_raises_consumable_warnings() {
    let mut simulator = Simulator::from_seed(2024);
    let thresholds = ThresholdSet::default();
    let mut snapshot = MetricsSnapshot::new();

    // 燃料は 0.1%/tick で減るため、(100 - 20) / 0.1 = 800 ティック強で
    // 警告閾値 20% を割り込む
    let mut first_fuel_warning = None;
    for tick in 0..1000u32 {
        snapshot = simulator.advance(&snapshot);
        let report = evaluate(&snapshot, &thresholds);
        if report.is_warning(MetricKind::Fuel) {
            first_fuel_warning = Some(tick);
            break;
        }
    }

    let tick = first_fuel_warning.expect("fuel warning never raised");
    assert!((795..=805).contains(&tick), "warning at tick {}", tick);
}

#[test]
fn warning_state_tracks_snapshot_not_history() {
    let thresholds = ThresholdSet::default();

    let low_oxygen = MetricsSnapshot {
        oxygen: 10.0,
        ..MetricsSnapshot::new()
    };
    let recovered = MetricsSnapshot::new();

    assert!(evaluate(&low_oxygen, &thresholds).any_warning);
    // 評価器は状態を持たないので、回復したスナップショットは即座にクリア
    assert!(!evaluate(&recovered, &thresholds).any_warning);
}

#[tokio::test(start_paused = true)]
async fn runner_drives_full_cycle_and_stops_cleanly() {
    let runner = TelemetryRunner::new(RunnerConfig {
        tick_interval: Duration::from_millis(500),
        thresholds: quiet_thresholds(),
        seed: Some(11),
        ..Default::default()
    });
    let mut rx = runner.subscribe();
    let handle = tokio_test::assert_ok!(runner.start());

    let mut last_fuel = f64::MAX;
    for _ in 0..5 {
        rx.changed().await.expect("tick");
        let update = rx.borrow_and_update().clone();
        assert!(update.snapshot.fuel < last_fuel);
        assert!((700..=900).contains(&update.snapshot.speed));
        assert!(!update.report.any_warning);
        last_fuel = update.snapshot.fuel;
    }

    runner.stop();
    handle.await.expect("join");
    assert!(!runner.is_running());
}
