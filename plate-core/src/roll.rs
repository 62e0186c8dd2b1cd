//! Roll state machine: Idle ⇄ Rolling with a bounded history and monotonic slowdown.
//!
//! The machine is passive. Something else (see [`crate::driver`]) calls
//! [`PlateRoller::tick`] and [`PlateRoller::advance`] on a schedule; every
//! method is a no-op outside the phase it belongs to, so a late timer can
//! never disturb a settled plate.

use crate::config::{HISTORY_CAP_LIMIT, RollConfig};
use crate::plate::{PlateString, generate_plate};
use crate::rarity::{Rarity, classify};
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Most-recent-first list of plates shown in the roll window.
pub type PlateHistory = SmallVec<[PlateString; HISTORY_CAP_LIMIT]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollPhase {
    Idle,
    Rolling,
}

/// Why a roll came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The user pressed stop.
    Manual,
    /// Elapsed time reached the configured maximum.
    Timeout,
    /// A timer could not be scheduled.
    SchedulerFailed,
}

/// A plate at rest together with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub plate: PlateString,
    pub rarity: Rarity,
}

impl Settlement {
    #[must_use]
    pub const fn plays_win_cue(&self) -> bool {
        self.rarity.is_win()
    }
}

/// State that only exists while rolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollSession {
    pub history: PlateHistory,
    pub elapsed_ms: u32,
    pub interval_ms: u32,
    pub ticks: u32,
}

impl RollSession {
    fn new(seed_plate: PlateString, cfg: &RollConfig) -> Self {
        let mut history = PlateHistory::new();
        history.push(seed_plate);
        Self {
            history,
            elapsed_ms: 0,
            interval_ms: cfg.initial_interval_ms,
            ticks: 0,
        }
    }
}

/// Render-ready copy of the roller, cheap to compare between frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSnapshot {
    pub phase: RollPhase,
    pub current: PlateString,
    pub rarity: Rarity,
    pub history: Vec<PlateString>,
    pub elapsed_ms: u32,
    pub interval_ms: u32,
}

impl RollSnapshot {
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.phase == RollPhase::Rolling
    }

    /// "Generate new" is only offered at rest.
    #[must_use]
    pub fn can_regenerate(&self) -> bool {
        !self.is_rolling()
    }

    /// The decorative take button needs a settled plate above the lowest tier.
    #[must_use]
    pub fn can_take(&self) -> bool {
        !self.is_rolling() && self.rarity.is_win()
    }
}

pub struct PlateRoller<R> {
    config: RollConfig,
    slowdown_at_ms: u32,
    rng: R,
    current: PlateString,
    rarity: Rarity,
    session: Option<RollSession>,
}

impl<R: Rng> PlateRoller<R> {
    /// Create an idle roller showing a freshly drawn, already classified plate.
    pub fn new(config: RollConfig, mut rng: R) -> Self {
        let current = generate_plate(&mut rng);
        let slowdown_at_ms = config.slowdown_at_ms();
        Self {
            config,
            slowdown_at_ms,
            rng,
            current,
            rarity: classify(&current),
            session: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RollConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> RollPhase {
        if self.session.is_some() {
            RollPhase::Rolling
        } else {
            RollPhase::Idle
        }
    }

    #[must_use]
    pub const fn is_rolling(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn current(&self) -> PlateString {
        self.current
    }

    /// Tier of the last settled plate. Not refreshed while rolling.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub const fn session(&self) -> Option<&RollSession> {
        self.session.as_ref()
    }

    /// Visible plates, most recent first. Just the current plate when idle.
    #[must_use]
    pub fn history(&self) -> &[PlateString] {
        self.session
            .as_ref()
            .map_or(std::slice::from_ref(&self.current), |s| s.history.as_slice())
    }

    #[must_use]
    pub fn interval_ms(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.interval_ms)
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.elapsed_ms)
    }

    /// Idle → Rolling. Returns `false` if a roll is already running.
    pub fn start(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(RollSession::new(self.current, &self.config));
        true
    }

    /// Draw the next plate of a running roll and apply slowdown.
    pub fn tick(&mut self) -> Option<PlateString> {
        let session = self.session.as_mut()?;
        let plate = generate_plate(&mut self.rng);
        self.current = plate;
        session.history.insert(0, plate);
        session.history.truncate(self.config.history_cap);
        session.ticks = session.ticks.saturating_add(1);
        if session.elapsed_ms >= self.slowdown_at_ms {
            session.interval_ms = session
                .interval_ms
                .saturating_add(self.config.interval_step_ms)
                .min(self.config.max_interval_ms);
        }
        Some(plate)
    }

    /// Advance the roll clock. Settles the roll once the maximum duration is reached.
    pub fn advance(&mut self, delta_ms: u32) -> Option<Settlement> {
        let session = self.session.as_mut()?;
        session.elapsed_ms = session
            .elapsed_ms
            .saturating_add(delta_ms)
            .min(self.config.max_duration_ms);
        if session.elapsed_ms >= self.config.max_duration_ms {
            self.stop()
        } else {
            None
        }
    }

    /// Rolling → Idle. Classifies the final plate; `None` when already idle.
    pub fn stop(&mut self) -> Option<Settlement> {
        self.session.take()?;
        self.rarity = classify(&self.current);
        Some(self.settlement())
    }

    /// Replace the plate while idle, without rolling.
    pub fn regenerate(&mut self) -> Option<Settlement> {
        if self.session.is_some() {
            return None;
        }
        self.current = generate_plate(&mut self.rng);
        self.rarity = classify(&self.current);
        Some(self.settlement())
    }

    #[must_use]
    pub const fn settlement(&self) -> Settlement {
        Settlement {
            plate: self.current,
            rarity: self.rarity,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> RollSnapshot {
        RollSnapshot {
            phase: self.phase(),
            current: self.current,
            rarity: self.rarity,
            history: self.history().to_vec(),
            elapsed_ms: self.elapsed_ms().unwrap_or(0),
            interval_ms: self
                .interval_ms()
                .unwrap_or(self.config.initial_interval_ms),
        }
    }
}
