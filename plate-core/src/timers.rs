//! One-shot timer seam used by the roll driver.
//!
//! Platforms provide a [`TimerHost`]; the browser shell wraps `setTimeout`.
//! [`ManualTimers`] runs on a virtual clock for headless runs and tests.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to schedule timer: {0}")]
pub struct TimerError(pub String);

/// Schedules one-shot callbacks on the UI thread.
pub trait TimerHost {
    type Handle: Copy + fmt::Debug;

    /// Run `callback` once after `delay_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses to schedule the callback.
    fn set_timeout(
        &self,
        delay_ms: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, TimerError>;

    /// Cancel a pending callback. Clearing a fired or unknown handle is a no-op.
    fn clear_timeout(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualTimerId(u64);

struct PendingTimer {
    id: ManualTimerId,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTimer>,
    refuse_next: bool,
}

/// Virtual-clock timer host. Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualTimers {
    state: Rc<RefCell<ManualState>>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of callbacks still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Make the next `set_timeout` call fail.
    pub fn refuse_next(&self) {
        self.state.borrow_mut().refuse_next = true;
    }

    fn pop_due(&self, until_ms: u64) -> Option<Box<dyn FnOnce()>> {
        let mut state = self.state.borrow_mut();
        let idx = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(idx, _)| idx)?;
        let timer = state.pending.swap_remove(idx);
        state.now_ms = state.now_ms.max(timer.due_ms);
        Some(timer.callback)
    }

    /// Move the clock forward, firing due callbacks in order. Returns how many fired.
    pub fn advance(&self, ms: u64) -> usize {
        let until = self.now_ms().saturating_add(ms);
        let mut fired = 0;
        // The borrow is released before each callback so it can schedule more work.
        while let Some(callback) = self.pop_due(until) {
            callback();
            fired += 1;
        }
        self.state.borrow_mut().now_ms = until;
        fired
    }
}

impl fmt::Debug for ManualTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualTimers")
            .field("now_ms", &state.now_ms)
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl TimerHost for ManualTimers {
    type Handle = ManualTimerId;

    fn set_timeout(
        &self,
        delay_ms: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, TimerError> {
        let mut state = self.state.borrow_mut();
        if std::mem::take(&mut state.refuse_next) {
            return Err(TimerError("manual timer refused".to_string()));
        }
        let id = ManualTimerId(state.next_id);
        state.next_id += 1;
        let due_ms = state.now_ms.saturating_add(u64::from(delay_ms));
        state.pending.push(PendingTimer {
            id,
            due_ms,
            callback,
        });
        Ok(id)
    }

    fn clear_timeout(&self, handle: Self::Handle) {
        self.state.borrow_mut().pending.retain(|t| t.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fires_in_due_order() {
        let timers = ManualTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, tag) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = log.clone();
            timers
                .set_timeout(delay, Box::new(move || log.borrow_mut().push(tag)))
                .unwrap();
        }
        assert_eq!(timers.advance(25), 2);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(timers.now_ms(), 25);
        assert_eq!(timers.advance(5), 1);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn cleared_timers_never_fire() {
        let timers = ManualTimers::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = timers
            .set_timeout(5, Box::new(move || h.set(h.get() + 1)))
            .unwrap();
        timers.clear_timeout(id);
        timers.clear_timeout(id);
        assert_eq!(timers.advance(100), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn callbacks_can_reschedule() {
        let timers = ManualTimers::new();
        let hits = Rc::new(Cell::new(0));
        fn arm(timers: &ManualTimers, hits: Rc<Cell<u32>>) {
            let again = timers.clone();
            timers
                .set_timeout(
                    10,
                    Box::new(move || {
                        hits.set(hits.get() + 1);
                        if hits.get() < 3 {
                            arm(&again, hits);
                        }
                    }),
                )
                .unwrap();
        }
        arm(&timers, hits.clone());
        timers.advance(1_000);
        assert_eq!(hits.get(), 3);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn refusal_applies_once() {
        let timers = ManualTimers::new();
        timers.refuse_next();
        assert!(timers.set_timeout(1, Box::new(|| {})).is_err());
        assert!(timers.set_timeout(1, Box::new(|| {})).is_ok());
    }
}
