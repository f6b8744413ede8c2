//! ティックランナー
//!
//! 繰り返しタイマーを所有し、advance → evaluate → 通知 のサイクルを駆動する。
//! 純粋なシミュレーション・評価ロジックとスケジューリングを分離するための層。
//! キャンセルは呼び出し側の責務で、`stop` 後は状態更新を行わない。

use crate::error::{Error, Result};
use crate::telemetry::evaluator::{evaluate, WarningReport};
use crate::telemetry::metrics::MetricsSnapshot;
use crate::telemetry::simulator::Simulator;
use crate::telemetry::thresholds::ThresholdSet;
use crate::telemetry::toast::{Toast, ToastQueue, DEFAULT_TOAST_TTL_MS};
use chrono::Utc;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// ランナー設定
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// ティック間隔
    pub tick_interval: Duration,
    /// トースト表示時間（ミリ秒）
    pub toast_ttl_ms: i64,
    /// 警告閾値
    pub thresholds: ThresholdSet,
    /// 乱数シード（`None` ならOSエントロピー）
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            thresholds: ThresholdSet::default(),
            seed: None,
        }
    }
}

/// 1ティック分の更新結果
#[derive(Debug, Clone)]
pub struct TickUpdate {
    /// 最新スナップショット
    pub snapshot: MetricsSnapshot,
    /// 警告評価結果
    pub report: WarningReport,
}

struct RunnerState {
    snapshot: MetricsSnapshot,
    last_report: Option<WarningReport>,
    toasts: ToastQueue,
}

/// テレメトリランナー
///
/// 最新のスナップショットと警告レポートは watch チャネルで購読者に配信される。
/// 各ティックは完了まで実行され、再入しない。
pub struct TelemetryRunner {
    config: RunnerConfig,
    state: Arc<RwLock<RunnerState>>,
    tx: watch::Sender<TickUpdate>,
    cancel: CancellationToken,
    running: Arc<AtomicBool>,
}

impl TelemetryRunner {
    /// 初期スナップショットを既定値としてランナーを作成
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_snapshot(config, MetricsSnapshot::new())
    }

    /// 初期スナップショットを指定してランナーを作成
    pub fn with_snapshot(config: RunnerConfig, snapshot: MetricsSnapshot) -> Self {
        let report = evaluate(&snapshot, &config.thresholds);
        let (tx, _rx) = watch::channel(TickUpdate {
            snapshot: snapshot.clone(),
            report,
        });
        // last_report は None から始める。起動時点で既に警告状態の
        // メトリクスも最初のティックで立ち上がりとして扱う。
        let state = RunnerState {
            snapshot,
            last_report: None,
            toasts: ToastQueue::with_ttl_ms(config.toast_ttl_ms),
        };

        Self {
            config,
            state: Arc::new(RwLock::new(state)),
            tx,
            cancel: CancellationToken::new(),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 更新の購読を開始
    pub fn subscribe(&self) -> watch::Receiver<TickUpdate> {
        self.tx.subscribe()
    }

    /// 最新の更新結果を取得
    pub fn latest(&self) -> TickUpdate {
        self.tx.borrow().clone()
    }

    /// 表示中のトースト一覧を取得
    pub async fn active_toasts(&self) -> Vec<Toast> {
        self.state.read().await.toasts.active().to_vec()
    }

    /// ティックループを開始
    ///
    /// 二重起動はエラー。ループはキャンセルされるまで
    /// `tick_interval` ごとに1ティックずつ進める。
    pub fn start(&self) -> Result<JoinHandle<()>> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyRunning);
        }

        let config = self.config.clone();
        let state = self.state.clone();
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        let running = self.running.clone();

        let handle = tokio::spawn(async move {
            let mut simulator = match config.seed {
                Some(seed) => Simulator::from_seed(seed),
                None => Simulator::new(),
            };

            let mut interval = tokio::time::interval(config.tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval の初回ティックは即時発火するため読み捨てる
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("telemetry runner cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let update = Self::step(&state, &mut simulator, &config).await;
                        let _ = tx.send(update);
                    }
                }
            }

            running.store(false, Ordering::SeqCst);
        });

        Ok(handle)
    }

    /// ループをキャンセル
    ///
    /// 進行中のティックは完了まで実行されるが、以降の更新は配信されない。
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// ループが動作中か
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    async fn step(
        state: &Arc<RwLock<RunnerState>>,
        simulator: &mut Simulator<StdRng>,
        config: &RunnerConfig,
    ) -> TickUpdate {
        let mut st = state.write().await;
        let now = Utc::now();

        let next = simulator.advance(&st.snapshot);
        let report = evaluate(&next, &config.thresholds);

        // トーストは警告の立ち上がりエッジでのみ発行
        for kind in report.newly_raised(st.last_report.as_ref()) {
            let message = format!("Warning: {} threshold exceeded", kind.label());
            warn!(metric = kind.name(), value = next.value(kind), "{}", message);
            st.toasts.push(message, now);
        }
        st.toasts.sweep(now);

        debug!(
            fuel = next.fuel,
            shield = next.shield,
            oxygen = next.oxygen,
            any_warning = report.any_warning,
            "tick"
        );

        st.snapshot = next.clone();
        st.last_report = Some(report.clone());

        TickUpdate {
            snapshot: next,
            report,
        }
    }
}
