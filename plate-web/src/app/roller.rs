//! Hook that owns the page's roll driver.

use crate::audio::RollAudio;
use crate::dom;
use crate::timers::BrowserTimers;
use plate_core::{PlateRoller, RollConfig, RollDriver, RollEvent, RollSnapshot, Settlement};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::rc::Rc;
use yew::prelude::*;

pub type WebRollDriver = RollDriver<BrowserTimers, ChaCha20Rng>;

/// Current roll state plus the commands the controls need.
#[derive(Clone)]
pub struct RollHandle {
    driver: Rc<WebRollDriver>,
    pub snapshot: RollSnapshot,
}

impl PartialEq for RollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.driver, &other.driver) && self.snapshot == other.snapshot
    }
}

impl RollHandle {
    /// Start when idle, stop when rolling.
    pub fn toggle(&self) {
        self.driver.toggle();
    }

    pub fn regenerate(&self) -> Option<Settlement> {
        self.driver.regenerate()
    }
}

fn build_driver() -> WebRollDriver {
    let config = RollConfig::load_from_static();
    let rng = ChaCha20Rng::seed_from_u64(dom::entropy());
    RollDriver::new(BrowserTimers, PlateRoller::new(config, rng))
}

/// Create the driver once per mount and mirror its state into Yew.
///
/// The effect wires audio cues and re-render notifications on mount;
/// unmount shuts the driver down so no timer outlives the page.
#[hook]
pub fn use_roll_driver() -> RollHandle {
    let driver = use_memo((), |()| build_driver());
    let snapshot = use_state(|| driver.snapshot());

    {
        let driver = driver.clone();
        let setter = snapshot.setter();
        use_effect_with((), move |()| {
            let audio = RollAudio::new();
            let weak = Rc::downgrade(&driver);
            driver.set_listener(move |event| {
                match event {
                    RollEvent::Started => audio.rolling_started(),
                    RollEvent::Settled { settlement, reason } => {
                        log::info!(
                            "settled {} ({}) after {reason:?}",
                            settlement.plate,
                            settlement.rarity.key()
                        );
                        audio.rolling_stopped(settlement.plays_win_cue());
                    }
                    RollEvent::Ticked(_) | RollEvent::Regenerated(_) => {}
                }
                if let Some(driver) = weak.upgrade() {
                    setter.set(driver.snapshot());
                }
            });
            move || driver.shutdown()
        });
    }

    RollHandle {
        driver,
        snapshot: (*snapshot).clone(),
    }
}
