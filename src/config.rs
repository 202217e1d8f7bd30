use chrono::Duration;
use serde::Deserialize;
use std::path::Path;

use crate::eligibility::{ResultOrder, DEFAULT_COOLDOWN_DAYS, MAX_COOLDOWN_DAYS};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub eligibility: EligibilityConfig,
    pub logging: LoggingConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EligibilityConfig {
    /// Days that must have passed since the last donation (exclusive).
    pub cooldown_days: i64,
    #[serde(default)]
    pub order: ResultOrder,
}

impl EligibilityConfig {
    /// The cooldown as a duration, held to `0..=MAX_COOLDOWN_DAYS`.
    pub fn cooldown(&self) -> Duration {
        Duration::days(self.cooldown_days.clamp(0, MAX_COOLDOWN_DAYS))
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            cooldown_days: DEFAULT_COOLDOWN_DAYS,
            order: ResultOrder::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    /// Log file used while the TUI owns the terminal.
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Config {
    /// Layer built-in defaults, `config/default.toml`, the given file and
    /// `DONOR__SECTION__KEY` environment variables, in that order.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("database.path", "donors.db")?
            .set_default("eligibility.cooldown_days", DEFAULT_COOLDOWN_DAYS)?
            .set_default("eligibility.order", "registry")?
            .set_default("logging.filter", "donor_finder=info,warn")?
            .set_default("tui.tick_rate_ms", 250)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::from(Path::new(path)).required(false))
            .add_source(config::Environment::with_prefix("DONOR").separator("__"))
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.eligibility.cooldown_days < 0 {
            anyhow::bail!(
                "eligibility.cooldown_days must not be negative, got {}",
                self.eligibility.cooldown_days
            );
        }
        if self.eligibility.cooldown_days > MAX_COOLDOWN_DAYS {
            anyhow::bail!(
                "eligibility.cooldown_days must be at most {}, got {}",
                MAX_COOLDOWN_DAYS,
                self.eligibility.cooldown_days
            );
        }
        if self.database.path.trim().is_empty() {
            anyhow::bail!("database.path cannot be empty");
        }
        if self.tui.tick_rate_ms == 0 {
            anyhow::bail!("tui.tick_rate_ms must be positive");
        }
        Ok(())
    }
}
