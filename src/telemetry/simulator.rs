//! メトリクスシミュレータ
//!
//! 前回のスナップショットから次のスナップショットを生成する。
//! 乱数源は外部から注入し、テストでシード固定できるようにする。

use crate::telemetry::metrics::MetricsSnapshot;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 燃料の1ティックあたりの消費量（%）
pub const FUEL_DECAY: f64 = 0.1;
/// シールドの1ティックあたりの減衰量（%）
pub const SHIELD_DECAY: f64 = 0.05;
/// 酸素の1ティックあたりの消費量（%）
pub const OXYGEN_DECAY: f64 = 0.02;

/// メトリクスシミュレータ
///
/// `advance` は前回値に対して純粋で、乱数源以外の暗黙の入力を持たない。
/// タイマーは保持しない。スケジューリングはランナー側の責務。
pub struct Simulator<R: Rng = StdRng> {
    rng: R,
}

impl Simulator<StdRng> {
    /// OSエントロピーでシードしたシミュレータを作成
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// シード値を固定したシミュレータを作成（決定的なテスト用）
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Simulator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Simulator<R> {
    /// 任意の乱数源からシミュレータを作成
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// 1ティック分進めて新しいスナップショットを生成
    ///
    /// 各フィールドは独立に更新される。失敗しない。
    pub fn advance(&mut self, prev: &MetricsSnapshot) -> MetricsSnapshot {
        MetricsSnapshot {
            speed: self.rng.gen_range(700..=900),
            altitude: self.rng.gen_range(30000..=35000),
            fuel: (prev.fuel - FUEL_DECAY).max(0.0),
            temperature: self.rng.gen_range(-50..=-30),
            thrust: self.rng.gen_range(80..=95),
            shield: (prev.shield - SHIELD_DECAY).max(0.0),
            oxygen: (prev.oxygen - OXYGEN_DECAY).max(0.0),
            pressure: 1.0 + self.rng.gen_range(0.0..0.1),
            radiation: self.rng.gen_range(0..100),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_rules() {
        let mut sim = Simulator::from_seed(42);
        let prev = MetricsSnapshot::new();
        let next = sim.advance(&prev);

        assert_eq!(next.fuel, prev.fuel - FUEL_DECAY);
        assert_eq!(next.shield, prev.shield - SHIELD_DECAY);
        assert_eq!(next.oxygen, prev.oxygen - OXYGEN_DECAY);
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        let mut sim = Simulator::from_seed(0);
        let mut prev = MetricsSnapshot::new();
        prev.fuel = 0.05;
        prev.shield = 0.01;
        prev.oxygen = 0.0;

        let next = sim.advance(&prev);
        assert_eq!(next.fuel, 0.0);
        assert_eq!(next.shield, 0.0);
        assert_eq!(next.oxygen, 0.0);
    }

    #[test]
    fn test_random_fields_stay_in_range() {
        let mut sim = Simulator::from_seed(7);
        let mut snapshot = MetricsSnapshot::new();

        for _ in 0..1000 {
            snapshot = sim.advance(&snapshot);
            assert!((700..=900).contains(&snapshot.speed));
            assert!((30000..=35000).contains(&snapshot.altitude));
            assert!((-50..=-30).contains(&snapshot.temperature));
            assert!((80..=95).contains(&snapshot.thrust));
            assert!((0..=99).contains(&snapshot.radiation));
            assert!(snapshot.pressure >= 1.0 && snapshot.pressure < 1.1);
        }
    }

    #[test]
    fn test_consumables_drain_to_zero_and_stay() {
        let mut sim = Simulator::from_seed(99);
        let mut snapshot = MetricsSnapshot::new();

        // 酸素が最も遅い（0.02%/tick、100% ÷ 0.02 = 5000ティック）
        for _ in 0..6000 {
            let next = sim.advance(&snapshot);
            assert!(next.fuel <= snapshot.fuel);
            assert!(next.shield <= snapshot.shield);
            assert!(next.oxygen <= snapshot.oxygen);
            snapshot = next;
        }

        assert_eq!(snapshot.fuel, 0.0);
        assert_eq!(snapshot.shield, 0.0);
        assert_eq!(snapshot.oxygen, 0.0);
    }

    #[test]
    fn test_seeded_simulators_agree() {
        let mut a = Simulator::from_seed(1234);
        let mut b = Simulator::from_seed(1234);
        let prev = MetricsSnapshot::new();

        let x = a.advance(&prev);
        let y = b.advance(&prev);
        assert_eq!(x.speed, y.speed);
        assert_eq!(x.altitude, y.altitude);
        assert_eq!(x.radiation, y.radiation);
        assert_eq!(x.pressure, y.pressure);
    }
}
