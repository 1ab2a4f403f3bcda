//! Editor configuration.

use crate::factory::Theme;
use crate::selection::DEFAULT_NUDGE_STEP;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default auto-save interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Nudge step must be a positive finite number, got {0}")]
    InvalidNudgeStep(f64),
    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How pointer moves during a reposition drag are recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragHistoryPolicy {
    /// Moves update a transient preview; one history entry on release.
    #[default]
    Coalesce,
    /// Every pointer move is its own history entry.
    PerMove,
}

/// Tunables for an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixels moved per arrow-key press.
    pub nudge_step: f64,
    pub drag_history: DragHistoryPolicy,
    /// Maximum number of undo states (`None` = unbounded).
    pub max_history: Option<usize>,
    /// Theme applied to newly created elements.
    pub theme: Theme,
    pub autosave_interval_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nudge_step: DEFAULT_NUDGE_STEP,
            drag_history: DragHistoryPolicy::default(),
            max_history: None,
            theme: Theme::default(),
            autosave_interval_secs: DEFAULT_AUTOSAVE_INTERVAL_SECS,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.nudge_step.is_finite() || self.nudge_step <= 0.0 {
            return Err(ConfigError::InvalidNudgeStep(self.nudge_step));
        }
        if self.max_history == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }
}
