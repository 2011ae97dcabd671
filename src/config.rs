use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::events::WindowMode;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub poll: PollConfig,
    pub padding: PaddingConfig,
    pub target: TargetConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollConfig {
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaddingConfig {
    pub fullscreen: u32,
    pub windowed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Имя процесса в System Events
    pub process_name: String,
    pub prober_program: String,
    pub kitty_program: String,
    /// Адрес для `kitty @ --to`, если kitty слушает не на стандартном сокете
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_to: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            poll: PollConfig { interval_ms: 500 },
            padding: PaddingConfig {
                fullscreen: 0,
                windowed: 20,
            },
            target: TargetConfig {
                process_name: "kitty".to_string(),
                prober_program: "osascript".to_string(),
                kitty_program: "kitty".to_string(),
                remote_to: None,
            },
        }
    }
}

impl PaddingConfig {
    pub fn for_mode(&self, mode: WindowMode) -> u32 {
        match mode {
            WindowMode::Fullscreen => self.fullscreen,
            WindowMode::Windowed => self.windowed,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Общая проверка для `logging.level` и `--log-level`
pub fn validate_log_level(level: &str) -> Result<()> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => anyhow::bail!("Неверный уровень логирования: {}", level),
    }
}

impl Config {
    /// Defaults, then the TOML file (if it exists), then `AUTOPAD_*` variables.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("AUTOPAD_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_log_level(&self.logging.level)?;

        if self.poll.interval_ms == 0 {
            anyhow::bail!("poll.interval_ms должно быть больше 0");
        }

        if self.target.process_name.trim().is_empty() {
            anyhow::bail!("target.process_name не может быть пустым");
        }

        if self.target.prober_program.trim().is_empty() {
            anyhow::bail!("target.prober_program не может быть пустым");
        }

        if self.target.kitty_program.trim().is_empty() {
            anyhow::bail!("target.kitty_program не может быть пустым");
        }

        if let Some(to) = &self.target.remote_to {
            if to.trim().is_empty() {
                anyhow::bail!("target.remote_to задан, но пуст");
            }
        }

        Ok(())
    }
}
