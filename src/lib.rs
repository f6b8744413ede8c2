//! # shipdash
//!
//! Spacecraft status telemetry simulator and threshold warning engine.
//!
//! This crate provides the logic core behind a stylized spacecraft dashboard:
//! a tick-driven metrics simulator, a threshold-based warning evaluator, and a
//! self-expiring toast notification queue. Rendering is out of scope; the
//! latest snapshot and warning report are published on a watch channel for any
//! presentation layer to consume.

pub mod config;
pub mod error;
pub mod logging;
pub mod telemetry;

pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use telemetry::{
    evaluate, ComparatorEvaluator, MetricKind, MetricsSnapshot, RunnerConfig, Simulator,
    TelemetryRunner, ThresholdSet, TickUpdate, Toast, ToastQueue, WarningReport,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("missing file".to_string());
        assert!(err.to_string().contains("missing file"));
    }
}
