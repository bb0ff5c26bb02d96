//! TOML-based application configuration.
//!
//! Holds the tunables of the core:
//! - Gamification constants (XP per priority, level curve, timeliness)
//! - Simulated latency for mock backend calls
//! - Demo credentials accepted by the mock login
//! - Calendar time zone offset
//!
//! Configuration is stored at `~/.config/edutrack/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Returns `~/.config/edutrack[-dev]/` based on EDUTRACK_ENV.
///
/// Set EDUTRACK_ENV=dev to use the development directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("EDUTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("edutrack-dev")
    } else {
        base_dir.join("edutrack")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// XP and level curve settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamificationConfig {
    #[serde(default = "default_xp_low")]
    pub xp_low_priority: u32,
    #[serde(default = "default_xp_medium")]
    pub xp_medium_priority: u32,
    #[serde(default = "default_xp_high")]
    pub xp_high_priority: u32,
    /// XP needed for the next level is `base_per_level + level * level_increment`.
    #[serde(default = "default_base_per_level")]
    pub base_per_level: u32,
    #[serde(default = "default_level_increment")]
    pub level_increment: u32,
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    #[serde(default = "default_multiplier_early")]
    pub multiplier_early: f64,
    #[serde(default = "default_multiplier_on_time")]
    pub multiplier_on_time: f64,
    #[serde(default = "default_multiplier_late")]
    pub multiplier_late: f64,
    /// Completing this many hours before the due date counts as early.
    #[serde(default = "default_early_threshold_hours")]
    pub early_threshold_hours: i64,
}

/// Simulated latency of mock backend calls, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(default = "default_auth_delay")]
    pub login_ms: u64,
    #[serde(default = "default_auth_delay")]
    pub register_ms: u64,
    #[serde(default = "default_auth_delay")]
    pub recovery_ms: u64,
    #[serde(default = "default_auth_delay")]
    pub profile_save_ms: u64,
    #[serde(default = "default_task_save_delay")]
    pub task_save_ms: u64,
    /// How long a success banner stays up.
    #[serde(default = "default_banner_delay")]
    pub banner_ms: u64,
}

/// Credentials the mock login accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Offset from UTC used for week and day bucketing.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/edutrack/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gamification: GamificationConfig,
    #[serde(default)]
    pub delays: DelayConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_xp_low() -> u32 {
    10
}
fn default_xp_medium() -> u32 {
    25
}
fn default_xp_high() -> u32 {
    50
}
fn default_base_per_level() -> u32 {
    100
}
fn default_level_increment() -> u32 {
    50
}
fn default_max_level() -> u32 {
    50
}
fn default_multiplier_early() -> f64 {
    1.5
}
fn default_multiplier_on_time() -> f64 {
    1.0
}
fn default_multiplier_late() -> f64 {
    0.5
}
fn default_early_threshold_hours() -> i64 {
    24
}
fn default_auth_delay() -> u64 {
    2000
}
fn default_task_save_delay() -> u64 {
    1000
}
fn default_banner_delay() -> u64 {
    3000
}
fn default_demo_email() -> String {
    "alex@upp.edu.mx".into()
}
fn default_demo_password() -> String {
    "123456".into()
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            xp_low_priority: default_xp_low(),
            xp_medium_priority: default_xp_medium(),
            xp_high_priority: default_xp_high(),
            base_per_level: default_base_per_level(),
            level_increment: default_level_increment(),
            max_level: default_max_level(),
            multiplier_early: default_multiplier_early(),
            multiplier_on_time: default_multiplier_on_time(),
            multiplier_late: default_multiplier_late(),
            early_threshold_hours: default_early_threshold_hours(),
        }
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            login_ms: default_auth_delay(),
            register_ms: default_auth_delay(),
            recovery_ms: default_auth_delay(),
            profile_save_ms: default_auth_delay(),
            task_save_ms: default_task_save_delay(),
            banner_ms: default_banner_delay(),
        }
    }
}

impl DelayConfig {
    /// All delays set to zero, for tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            login_ms: 0,
            register_ms: 0,
            recovery_ms: 0,
            profile_save_ms: 0,
            task_save_ms: 0,
            banner_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn recovery(&self) -> Duration {
        Duration::from_millis(self.recovery_ms)
    }

    pub fn profile_save(&self) -> Duration {
        Duration::from_millis(self.profile_save_ms)
    }

    pub fn task_save(&self) -> Duration {
        Duration::from_millis(self.task_save_ms)
    }

    pub fn banner(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
        }
    }
}

impl CalendarConfig {
    /// The configured offset, or UTC when it is out of range.
    pub fn offset(&self) -> chrono::FixedOffset {
        use chrono::Offset;
        chrono::FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| chrono::Utc.fix())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".into(),
        };
        let unparsable = |what: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot parse '{value}' as {what}"),
        };

        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => {
                serde_json::Value::Bool(value.parse::<bool>().map_err(|_| unparsable("bool"))?)
            }
            serde_json::Value::Number(_) => {
                if let Ok(n) = value.parse::<i64>() {
                    serde_json::Value::Number(n.into())
                } else if let Ok(n) = value.parse::<f64>() {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| unparsable("number"))?
                } else {
                    return Err(unparsable("number"));
                }
            }
            serde_json::Value::Object(_) => return Err(unknown()),
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults if the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or return defaults if the file is missing.
    ///
    /// A file that exists but fails to parse is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), "loaded configuration");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}
