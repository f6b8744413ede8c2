//! テレメトリ型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 計測フィールドの種類
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// 速度（km/h）
    Speed,
    /// 高度（feet）
    Altitude,
    /// 燃料残量（%）
    Fuel,
    /// 外部温度（°C）
    Temperature,
    /// 推力（%）
    Thrust,
    /// シールド強度（%）
    Shield,
    /// 酸素残量（%）
    Oxygen,
    /// 船内気圧（atm）
    Pressure,
    /// 放射線レベル
    Radiation,
}

impl MetricKind {
    /// メトリクス名を取得
    pub fn name(&self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Altitude => "altitude",
            Self::Fuel => "fuel",
            Self::Temperature => "temperature",
            Self::Thrust => "thrust",
            Self::Shield => "shield",
            Self::Oxygen => "oxygen",
            Self::Pressure => "pressure",
            Self::Radiation => "radiation",
        }
    }

    /// 表示用ラベルを取得（トーストメッセージ用）
    pub fn label(&self) -> &'static str {
        match self {
            Self::Speed => "Speed",
            Self::Altitude => "Altitude",
            Self::Fuel => "Fuel",
            Self::Temperature => "Temperature",
            Self::Thrust => "Thrust",
            Self::Shield => "Shield",
            Self::Oxygen => "Oxygen",
            Self::Pressure => "Pressure",
            Self::Radiation => "Radiation",
        }
    }

    /// 単位を取得
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Speed => "km/h",
            Self::Altitude => "ft",
            Self::Fuel | Self::Thrust | Self::Shield | Self::Oxygen => "%",
            Self::Temperature => "°C",
            Self::Pressure => "atm",
            Self::Radiation => "",
        }
    }

    /// 全メトリクスの一覧
    pub fn all() -> [MetricKind; 9] {
        [
            Self::Speed,
            Self::Altitude,
            Self::Fuel,
            Self::Temperature,
            Self::Thrust,
            Self::Shield,
            Self::Oxygen,
            Self::Pressure,
            Self::Radiation,
        ]
    }
}

/// センサー読み取り値のスナップショット
///
/// 1ティックごとにシミュレータが新しい値を生成し、丸ごと置き換える。
/// 生成後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// 速度（km/h）
    pub speed: i64,
    /// 高度（feet）
    pub altitude: i64,
    /// 燃料残量（%、0-100）
    pub fuel: f64,
    /// 外部温度（°C）
    pub temperature: i64,
    /// 推力（%）
    pub thrust: i64,
    /// シールド強度（%、0-100）
    pub shield: f64,
    /// 酸素残量（%、0-100）
    pub oxygen: f64,
    /// 船内気圧（atm、0以上）
    pub pressure: f64,
    /// 放射線レベル（公称 0-100、クランプなし）
    pub radiation: i64,
    /// 読み取り時刻
    pub timestamp: DateTime<Utc>,
}

impl MetricsSnapshot {
    /// 打ち上げ直後の初期状態を作成
    pub fn new() -> Self {
        Self {
            speed: 800,
            altitude: 32000,
            fuel: 100.0,
            temperature: -40,
            thrust: 85,
            shield: 100.0,
            oxygen: 100.0,
            pressure: 1.0,
            radiation: 0,
            timestamp: Utc::now(),
        }
    }

    /// 指定フィールドの値を f64 として取得
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Speed => self.speed as f64,
            MetricKind::Altitude => self.altitude as f64,
            MetricKind::Fuel => self.fuel,
            MetricKind::Temperature => self.temperature as f64,
            MetricKind::Thrust => self.thrust as f64,
            MetricKind::Shield => self.shield,
            MetricKind::Oxygen => self.oxygen,
            MetricKind::Pressure => self.pressure,
            MetricKind::Radiation => self.radiation as f64,
        }
    }
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kind_name() {
        assert_eq!(MetricKind::Oxygen.name(), "oxygen");
        assert_eq!(MetricKind::Radiation.name(), "radiation");
    }

    #[test]
    fn test_metric_kind_unit() {
        assert_eq!(MetricKind::Speed.unit(), "km/h");
        assert_eq!(MetricKind::Fuel.unit(), "%");
        assert_eq!(MetricKind::Pressure.unit(), "atm");
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = MetricsSnapshot::new();
        assert_eq!(snapshot.speed, 800);
        assert_eq!(snapshot.altitude, 32000);
        assert_eq!(snapshot.fuel, 100.0);
        assert_eq!(snapshot.temperature, -40);
        assert_eq!(snapshot.thrust, 85);
        assert_eq!(snapshot.shield, 100.0);
        assert_eq!(snapshot.oxygen, 100.0);
        assert_eq!(snapshot.pressure, 1.0);
        assert_eq!(snapshot.radiation, 0);
    }

    #[test]
    fn test_value_accessor() {
        let snapshot = MetricsSnapshot::new();
        assert_eq!(snapshot.value(MetricKind::Speed), 800.0);
        assert_eq!(snapshot.value(MetricKind::Oxygen), 100.0);
        for kind in MetricKind::all() {
            assert!(snapshot.value(kind).is_finite());
        }
    }
}
