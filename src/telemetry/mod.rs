//! テレメトリシミュレーションと警告評価
//!
//! このモジュールは、センサー値のスナップショット生成、閾値による
//! 警告評価、トースト通知、ティック駆動のランナーを提供します。

pub mod evaluator;
pub mod metrics;
pub mod runner;
pub mod simulator;
pub mod thresholds;
pub mod toast;

pub use evaluator::{evaluate, ComparatorEvaluator, WarningReport};
pub use metrics::{MetricKind, MetricsSnapshot};
pub use runner::{RunnerConfig, TelemetryRunner, TickUpdate};
pub use simulator::Simulator;
pub use thresholds::ThresholdSet;
pub use toast::{Toast, ToastQueue};
