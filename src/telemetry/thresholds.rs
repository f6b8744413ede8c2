//! 警告閾値の定義

use crate::error::{Error, Result};
use crate::telemetry::metrics::MetricKind;
use serde::{Deserialize, Serialize};

/// メトリクスごとの警告閾値
///
/// 評価時には読み取り専用で参照される。デフォルト値はダッシュボードの
/// 標準設定（酸素・シールド・燃料は下限、放射線は上限）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSet {
    /// 酸素残量の下限（%）
    pub oxygen: f64,
    /// シールド強度の下限（%）
    pub shield: f64,
    /// 燃料残量の下限（%）
    pub fuel: f64,
    /// 放射線レベルの上限
    pub radiation: f64,
    /// 速度の基準値（km/h）
    pub speed: f64,
    /// 温度の基準値（°C）
    pub temperature: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            oxygen: 20.0,
            shield: 30.0,
            fuel: 20.0,
            radiation: 80.0,
            speed: 800.0,
            temperature: 50.0,
        }
    }
}

impl ThresholdSet {
    /// 指定メトリクスの閾値を取得
    ///
    /// 閾値を持たないメトリクス（高度・推力・気圧）は `None`。
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Oxygen => Some(self.oxygen),
            MetricKind::Shield => Some(self.shield),
            MetricKind::Fuel => Some(self.fuel),
            MetricKind::Radiation => Some(self.radiation),
            MetricKind::Speed => Some(self.speed),
            MetricKind::Temperature => Some(self.temperature),
            MetricKind::Altitude | MetricKind::Thrust | MetricKind::Pressure => None,
        }
    }

    /// 閾値を検証
    pub fn validate(&self) -> Result<()> {
        let percent_fields = [
            (MetricKind::Oxygen, self.oxygen),
            (MetricKind::Shield, self.shield),
            (MetricKind::Fuel, self.fuel),
        ];

        for (kind, value) in percent_fields {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidThreshold {
                    metric: kind.name().to_string(),
                    reason: format!("must be a percentage in [0, 100], got {}", value),
                });
            }
        }

        for (kind, value) in [
            (MetricKind::Radiation, self.radiation),
            (MetricKind::Speed, self.speed),
            (MetricKind::Temperature, self.temperature),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidThreshold {
                    metric: kind.name().to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// 値が閾値を下回ったら警告（残量系メトリクス用）
pub fn below(_kind: MetricKind, value: f64, threshold: f64) -> bool {
    value < threshold
}

/// 値が閾値を上回ったら警告（蓄積系メトリクス用）
pub fn above(_kind: MetricKind, value: f64, threshold: f64) -> bool {
    value > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = ThresholdSet::default();
        assert_eq!(t.oxygen, 20.0);
        assert_eq!(t.shield, 30.0);
        assert_eq!(t.fuel, 20.0);
        assert_eq!(t.radiation, 80.0);
        assert_eq!(t.speed, 800.0);
        assert_eq!(t.temperature, 50.0);
    }

    #[test]
    fn test_get_by_kind() {
        let t = ThresholdSet::default();
        assert_eq!(t.get(MetricKind::Oxygen), Some(20.0));
        assert_eq!(t.get(MetricKind::Altitude), None);
        assert_eq!(t.get(MetricKind::Pressure), None);
    }

    #[test]
    fn test_validate_rejects_out_of_range_percent() {
        let t = ThresholdSet {
            oxygen: 150.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let t = ThresholdSet {
            radiation: f64::NAN,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_directional_comparators() {
        assert!(below(MetricKind::Fuel, 10.0, 20.0));
        assert!(!below(MetricKind::Fuel, 20.0, 20.0));
        assert!(above(MetricKind::Radiation, 85.0, 80.0));
        assert!(!above(MetricKind::Radiation, 80.0, 80.0));
    }
}
