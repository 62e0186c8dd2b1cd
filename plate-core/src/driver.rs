//! Drives a [`PlateRoller`] from two timer chains.
//!
//! The tick chain draws plates at the roller's current interval; the clock
//! chain advances elapsed time and settles the roll at the maximum duration.
//! Both handles live in one timer set that is cancelled on every exit:
//! manual stop, timeout, scheduling failure, shutdown and drop.

use crate::plate::PlateString;
use crate::roll::{PlateRoller, RollSnapshot, Settlement, StopReason};
use crate::timers::{TimerError, TimerHost};
use rand::Rng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEvent {
    Started,
    Ticked(PlateString),
    Settled {
        settlement: Settlement,
        reason: StopReason,
    },
    Regenerated(Settlement),
}

struct TimerSet<H> {
    tick: Option<H>,
    clock: Option<H>,
}

impl<H: Copy> TimerSet<H> {
    const fn empty() -> Self {
        Self {
            tick: None,
            clock: None,
        }
    }

    const fn is_armed(&self) -> bool {
        self.tick.is_some() || self.clock.is_some()
    }

    fn cancel<T: TimerHost<Handle = H>>(&mut self, host: &T) {
        if let Some(handle) = self.tick.take() {
            host.clear_timeout(handle);
        }
        if let Some(handle) = self.clock.take() {
            host.clear_timeout(handle);
        }
    }
}

type Listener = Box<dyn Fn(&RollEvent)>;

struct Shared<H: TimerHost, R> {
    host: H,
    roller: RefCell<PlateRoller<R>>,
    timers: RefCell<TimerSet<H::Handle>>,
    listener: RefCell<Option<Listener>>,
}

impl<H, R> Shared<H, R>
where
    H: TimerHost + 'static,
    R: Rng + 'static,
{
    fn emit(&self, event: &RollEvent) {
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(event);
        }
    }

    fn cancel_timers(&self) {
        self.timers.borrow_mut().cancel(&self.host);
    }

    fn settle(&self, reason: StopReason) -> Option<Settlement> {
        self.cancel_timers();
        let settlement = self.roller.borrow_mut().stop()?;
        self.emit(&RollEvent::Settled { settlement, reason });
        Some(settlement)
    }

    fn fail(&self, err: &TimerError) {
        log::error!("Roll timer failed, settling early: {err}");
        let _ = self.settle(StopReason::SchedulerFailed);
    }

    fn arm_tick(this: &Rc<Self>, delay_ms: u32) -> Result<(), TimerError> {
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = this.host.set_timeout(
            delay_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Self::on_tick(&shared);
                }
            }),
        )?;
        this.timers.borrow_mut().tick = Some(handle);
        Ok(())
    }

    fn arm_clock(this: &Rc<Self>, delay_ms: u32) -> Result<(), TimerError> {
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = this.host.set_timeout(
            delay_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Self::on_clock(&shared);
                }
            }),
        )?;
        this.timers.borrow_mut().clock = Some(handle);
        Ok(())
    }

    fn on_tick(this: &Rc<Self>) {
        this.timers.borrow_mut().tick = None;
        let ticked = {
            let mut roller = this.roller.borrow_mut();
            roller
                .tick()
                .map(|plate| (plate, roller.interval_ms().unwrap_or_default()))
        };
        let Some((plate, next_ms)) = ticked else {
            return;
        };
        // Re-arm before the listener runs so a stop or restart issued from
        // the callback sees, and cancels, the pending tick.
        let armed = Self::arm_tick(this, next_ms);
        this.emit(&RollEvent::Ticked(plate));
        if let Err(err) = armed {
            this.fail(&err);
        }
    }

    fn on_clock(this: &Rc<Self>) {
        this.timers.borrow_mut().clock = None;
        let step = this.roller.borrow().config().clock_step_ms;
        let settled = this.roller.borrow_mut().advance(step);
        if let Some(settlement) = settled {
            this.cancel_timers();
            this.emit(&RollEvent::Settled {
                settlement,
                reason: StopReason::Timeout,
            });
            return;
        }
        let still_rolling = this.roller.borrow().is_rolling();
        if still_rolling && let Err(err) = Self::arm_clock(this, step) {
            this.fail(&err);
        }
    }
}

/// Owns a roller and the timers that animate it.
///
/// Listeners are called after internal borrows are released, so they may read
/// the driver (for example through [`RollDriver::snapshot`]) but must not
/// replace the listener from inside a callback.
pub struct RollDriver<H: TimerHost + 'static, R: Rng + 'static> {
    shared: Rc<Shared<H, R>>,
}

impl<H, R> RollDriver<H, R>
where
    H: TimerHost + 'static,
    R: Rng + 'static,
{
    pub fn new(host: H, roller: PlateRoller<R>) -> Self {
        Self {
            shared: Rc::new(Shared {
                host,
                roller: RefCell::new(roller),
                timers: RefCell::new(TimerSet::empty()),
                listener: RefCell::new(None),
            }),
        }
    }

    pub fn set_listener(&self, listener: impl Fn(&RollEvent) + 'static) {
        self.shared.listener.replace(Some(Box::new(listener)));
    }

    pub fn clear_listener(&self) {
        self.shared.listener.replace(None);
    }

    #[must_use]
    pub fn snapshot(&self) -> RollSnapshot {
        self.shared.roller.borrow().snapshot()
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.shared.roller.borrow().is_rolling()
    }

    /// Whether any timer of the current roll is still pending.
    #[must_use]
    pub fn timers_armed(&self) -> bool {
        self.shared.timers.borrow().is_armed()
    }

    /// Start a roll and arm both timers. Returns `false` if already rolling.
    pub fn start(&self) -> bool {
        let (interval_ms, clock_ms) = {
            let mut roller = self.shared.roller.borrow_mut();
            if !roller.start() {
                return false;
            }
            (
                roller.interval_ms().unwrap_or_default(),
                roller.config().clock_step_ms,
            )
        };
        let armed = Shared::arm_tick(&self.shared, interval_ms)
            .and_then(|()| Shared::arm_clock(&self.shared, clock_ms));
        self.shared.emit(&RollEvent::Started);
        if let Err(err) = armed {
            self.shared.fail(&err);
        }
        true
    }

    /// Stop a running roll. `None` when already idle.
    pub fn stop(&self) -> Option<Settlement> {
        self.shared.settle(StopReason::Manual)
    }

    /// Start when idle, stop when rolling.
    pub fn toggle(&self) {
        if self.is_rolling() {
            let _ = self.stop();
        } else {
            let _ = self.start();
        }
    }

    /// Draw a new plate without rolling. `None` while a roll is running.
    pub fn regenerate(&self) -> Option<Settlement> {
        let settlement = self.shared.roller.borrow_mut().regenerate()?;
        self.shared.emit(&RollEvent::Regenerated(settlement));
        Some(settlement)
    }

    /// Cancel both timers and drop the listener. Used on teardown.
    pub fn shutdown(&self) {
        self.shared.cancel_timers();
        self.clear_listener();
    }
}

impl<H, R> Drop for RollDriver<H, R>
where
    H: TimerHost + 'static,
    R: Rng + 'static,
{
    fn drop(&mut self) {
        self.shared.cancel_timers();
    }
}
