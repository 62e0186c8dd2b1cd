//! Plate Roller Core
//!
//! Platform-agnostic logic for the plate roller: plate generation, rarity
//! tiers and the timed roll state machine.
//! This crate has no UI or browser dependencies; platforms plug in through [`TimerHost`].

pub mod config;
pub mod driver;
pub mod plate;
pub mod rarity;
pub mod roll;
pub mod timers;

// Re-export commonly used types
pub use config::{HISTORY_CAP_LIMIT, RollConfig, RollConfigError};
pub use driver::{RollDriver, RollEvent};
pub use plate::{PLATE_LEN, PLATE_LETTERS, PlateParseError, PlateString, generate_plate};
pub use rarity::{LEGENDARY_PLATES, Rarity, classify};
pub use roll::{
    PlateHistory, PlateRoller, RollPhase, RollSession, RollSnapshot, Settlement, StopReason,
};
pub use timers::{ManualTimerId, ManualTimers, TimerError, TimerHost};
