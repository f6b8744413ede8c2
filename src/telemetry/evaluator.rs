//! 警告評価システム
//!
//! スナップショットと閾値から警告フラグを導出する。状態を持たず、
//! 新しいスナップショットごとに再実行される。

use crate::telemetry::metrics::{MetricKind, MetricsSnapshot};
use crate::telemetry::thresholds::ThresholdSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 既定の複合ポリシーが評価するメトリクス
const COMPOSITE_METRICS: [MetricKind; 4] = [
    MetricKind::Oxygen,
    MetricKind::Shield,
    MetricKind::Fuel,
    MetricKind::Radiation,
];

/// 簡易パネルが評価するメトリクス
pub const SIMPLE_PANEL_METRICS: [MetricKind; 5] = [
    MetricKind::Speed,
    MetricKind::Fuel,
    MetricKind::Temperature,
    MetricKind::Shield,
    MetricKind::Oxygen,
];

/// 警告評価の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningReport {
    /// いずれかのメトリクスが警告状態か
    pub any_warning: bool,
    /// メトリクスごとの警告フラグ
    pub per_field: HashMap<MetricKind, bool>,
}

impl WarningReport {
    /// 警告なしの空レポートを作成
    pub fn clear() -> Self {
        Self {
            any_warning: false,
            per_field: HashMap::new(),
        }
    }

    /// 指定メトリクスが警告状態か
    pub fn is_warning(&self, kind: MetricKind) -> bool {
        self.per_field.get(&kind).copied().unwrap_or(false)
    }

    /// 前回レポートと比較して、新たに警告状態になったメトリクスを返す
    ///
    /// トーストは立ち上がりエッジでのみ発行するため、継続中の警告は含まない。
    pub fn newly_raised(&self, previous: Option<&WarningReport>) -> Vec<MetricKind> {
        let mut raised: Vec<MetricKind> = self
            .per_field
            .iter()
            .filter(|&(&kind, &flag)| {
                flag && !previous.map(|p| p.is_warning(kind)).unwrap_or(false)
            })
            .map(|(&kind, _)| kind)
            .collect();
        // HashMap順序に依存しないよう名前で安定化
        raised.sort_by_key(|k| k.name());
        raised
    }
}

/// 既定の複合ポリシーで警告を評価
///
/// 酸素・シールド・燃料は閾値を下回ったら警告、放射線は上回ったら警告。
/// `any_warning` はこの4フィールドの論理和。純粋関数で、失敗しない。
pub fn evaluate(snapshot: &MetricsSnapshot, thresholds: &ThresholdSet) -> WarningReport {
    let mut per_field = HashMap::with_capacity(COMPOSITE_METRICS.len());
    per_field.insert(MetricKind::Oxygen, snapshot.oxygen < thresholds.oxygen);
    per_field.insert(MetricKind::Shield, snapshot.shield < thresholds.shield);
    per_field.insert(MetricKind::Fuel, snapshot.fuel < thresholds.fuel);
    per_field.insert(
        MetricKind::Radiation,
        snapshot.radiation as f64 > thresholds.radiation,
    );

    WarningReport {
        any_warning: per_field.values().any(|&flag| flag),
        per_field,
    }
}

/// メトリクス別コンパレータによる警告評価（簡易パネル向け）
///
/// 既定のコンパレータは提供しない。方向を持たない比較（値≠閾値）は
/// ほぼ常に警告になってしまうため、呼び出し側が方向付きの述語を
/// 明示的に指定する。[`thresholds::below`] / [`thresholds::above`] を
/// 組み合わせて使う。
///
/// [`thresholds::below`]: crate::telemetry::thresholds::below
/// [`thresholds::above`]: crate::telemetry::thresholds::above
pub struct ComparatorEvaluator<F>
where
    F: Fn(MetricKind, f64, f64) -> bool,
{
    comparator: F,
    metrics: Vec<MetricKind>,
}

impl<F> ComparatorEvaluator<F>
where
    F: Fn(MetricKind, f64, f64) -> bool,
{
    /// 簡易パネルのメトリクス集合を対象にした評価器を作成
    pub fn new(comparator: F) -> Self {
        Self {
            comparator,
            metrics: SIMPLE_PANEL_METRICS.to_vec(),
        }
    }

    /// 対象メトリクスを指定して評価器を作成
    pub fn with_metrics(comparator: F, metrics: Vec<MetricKind>) -> Self {
        Self {
            comparator,
            metrics,
        }
    }

    /// スナップショットを評価
    ///
    /// 閾値を持たないメトリクスはスキップされる。
    pub fn evaluate(&self, snapshot: &MetricsSnapshot, thresholds: &ThresholdSet) -> WarningReport {
        let mut per_field = HashMap::with_capacity(self.metrics.len());

        for &kind in &self.metrics {
            let Some(threshold) = thresholds.get(kind) else {
                continue;
            };
            let flag = (self.comparator)(kind, snapshot.value(kind), threshold);
            per_field.insert(kind, flag);
        }

        WarningReport {
            any_warning: per_field.values().any(|&flag| flag),
            per_field,
        }
    }
}
