use crate::error::{Error, Result};
use crate::telemetry::thresholds::ThresholdSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// ティック間隔（ミリ秒）
    pub tick_interval_ms: u64,
    /// トースト表示時間（ミリ秒）
    pub toast_ttl_ms: i64,
    /// 乱数シード（再現が必要な場合のみ）
    pub seed: Option<u64>,
    /// ログレベル
    pub log_level: String,
    /// 警告閾値
    pub thresholds: ThresholdSet,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            toast_ttl_ms: 3000,
            seed: None,
            log_level: "info".to_string(),
            thresholds: ThresholdSet::default(),
        }
    }
}

impl DashboardConfig {
    /// 設定ファイルから読み込み、環境変数で上書き
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // デフォルト値を設定
        let defaults = DashboardConfig::default();
        settings = settings.add_source(config::Config::try_from(&defaults)?);

        // 設定ファイルを読み込み（明示指定が最優先、なければ既定の場所を試行)
        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path));
        } else {
            let config_paths = ["shipdash.toml", "config/shipdash.toml"];
            for candidate in &config_paths {
                if Path::new(candidate).exists() {
                    settings = settings.add_source(config::File::with_name(candidate));
                    break;
                }
            }
        }

        // 環境変数で上書き (SHIPDASH_で始まる変数、ネストは __ 区切り)
        settings = settings.add_source(
            config::Environment::with_prefix("SHIPDASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: DashboardConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 設定値を検証
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.toast_ttl_ms <= 0 {
            return Err(Error::Config(
                "toast_ttl_ms must be greater than zero".to_string(),
            ));
        }
        self.thresholds.validate()
    }
}
