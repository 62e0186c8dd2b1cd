//! Roll timing configuration.
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ROLL_DATA: &str = include_str!("../../plate-web/static/assets/data/roll.json");

/// Upper bound on the visible history; sizes the inline history buffer.
pub const HISTORY_CAP_LIMIT: usize = 9;

/// Errors raised when roll configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum RollConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("initial interval {initial}ms exceeds maximum interval {max}ms")]
    IntervalBounds { initial: u32, max: u32 },
    #[error("slowdown fraction must be between 0 and 1 (got {0:.2})")]
    SlowdownFraction(f32),
    #[error("history cap must be between 1 and {HISTORY_CAP_LIMIT} (got {0})")]
    HistoryCap(usize),
    #[error("roll config is not valid JSON: {0}")]
    Parse(String),
}

/// Timing knobs for one roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollConfig {
    /// Delay between ticks when a roll starts.
    #[serde(default = "RollConfig::default_initial_interval_ms")]
    pub initial_interval_ms: u32,
    /// Added to the tick delay on every tick once slowdown begins.
    #[serde(default = "RollConfig::default_interval_step_ms")]
    pub interval_step_ms: u32,
    #[serde(default = "RollConfig::default_max_interval_ms")]
    pub max_interval_ms: u32,
    /// A roll settles by itself once this much time has elapsed.
    #[serde(default = "RollConfig::default_max_duration_ms")]
    pub max_duration_ms: u32,
    /// Fraction of `max_duration_ms` after which ticks start slowing down.
    #[serde(default = "RollConfig::default_slowdown_fraction")]
    pub slowdown_fraction: f32,
    /// Period of the elapsed-time clock.
    #[serde(default = "RollConfig::default_clock_step_ms")]
    pub clock_step_ms: u32,
    #[serde(default = "RollConfig::default_history_cap")]
    pub history_cap: usize,
}

impl RollConfig {
    const fn default_initial_interval_ms() -> u32 {
        50
    }

    const fn default_interval_step_ms() -> u32 {
        5
    }

    const fn default_max_interval_ms() -> u32 {
        300
    }

    const fn default_max_duration_ms() -> u32 {
        3_500
    }

    const fn default_slowdown_fraction() -> f32 {
        0.6
    }

    const fn default_clock_step_ms() -> u32 {
        100
    }

    const fn default_history_cap() -> usize {
        6
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not parse or the values are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, RollConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| RollConfigError::Parse(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the embedded configuration, falling back to defaults if it is unusable.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_ROLL_DATA).unwrap_or_else(|err| {
            log::warn!("Embedded roll config rejected, using defaults: {err}");
            Self::default()
        })
    }

    /// Check the invariants the roll state machine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), RollConfigError> {
        if self.initial_interval_ms == 0 {
            return Err(RollConfigError::Zero {
                field: "initial_interval_ms",
            });
        }
        if self.max_duration_ms == 0 {
            return Err(RollConfigError::Zero {
                field: "max_duration_ms",
            });
        }
        if self.clock_step_ms == 0 {
            return Err(RollConfigError::Zero {
                field: "clock_step_ms",
            });
        }
        if self.initial_interval_ms > self.max_interval_ms {
            return Err(RollConfigError::IntervalBounds {
                initial: self.initial_interval_ms,
                max: self.max_interval_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.slowdown_fraction) {
            return Err(RollConfigError::SlowdownFraction(self.slowdown_fraction));
        }
        if !(1..=HISTORY_CAP_LIMIT).contains(&self.history_cap) {
            return Err(RollConfigError::HistoryCap(self.history_cap));
        }
        Ok(())
    }

    /// Elapsed time at which deceleration begins.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to the duration
    pub fn slowdown_at_ms(&self) -> u32 {
        let at = f64::from(self.max_duration_ms) * f64::from(self.slowdown_fraction);
        at.round().clamp(0.0, f64::from(self.max_duration_ms)) as u32
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: Self::default_initial_interval_ms(),
            interval_step_ms: Self::default_interval_step_ms(),
            max_interval_ms: Self::default_max_interval_ms(),
            max_duration_ms: Self::default_max_duration_ms(),
            slowdown_fraction: Self::default_slowdown_fraction(),
            clock_step_ms: Self::default_clock_step_ms(),
            history_cap: Self::default_history_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(RollConfig::load_from_static(), RollConfig::default());
        assert_eq!(RollConfig::from_json(DEFAULT_ROLL_DATA), Ok(RollConfig::default()));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = RollConfig::from_json(r#"{ "history_cap": 9 }"#).unwrap();
        assert_eq!(cfg.history_cap, 9);
        assert_eq!(cfg.initial_interval_ms, 50);
        assert_eq!(cfg.max_duration_ms, 3_500);
    }

    #[test]
    fn validation_rejects_inconsistent_values() {
        let mut cfg = RollConfig::default();
        cfg.initial_interval_ms = 400;
        assert_eq!(
            cfg.validate(),
            Err(RollConfigError::IntervalBounds {
                initial: 400,
                max: 300
            })
        );

        let mut cfg = RollConfig::default();
        cfg.history_cap = 10;
        assert_eq!(cfg.validate(), Err(RollConfigError::HistoryCap(10)));

        let mut cfg = RollConfig::default();
        cfg.slowdown_fraction = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(RollConfigError::SlowdownFraction(_))
        ));

        let mut cfg = RollConfig::default();
        cfg.clock_step_ms = 0;
        assert_eq!(
            cfg.validate(),
            Err(RollConfigError::Zero {
                field: "clock_step_ms"
            })
        );
    }

    #[test]
    fn parse_errors_are_reported() {
        let err = RollConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn slowdown_point_scales_with_duration() {
        let cfg = RollConfig::default();
        assert_eq!(cfg.slowdown_at_ms(), 2_100);
        let cfg = RollConfig {
            slowdown_fraction: 0.0,
            ..RollConfig::default()
        };
        assert_eq!(cfg.slowdown_at_ms(), 0);
    }
}
