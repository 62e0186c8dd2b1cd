//! `setTimeout`-backed [`TimerHost`] for the browser.

use plate_core::{TimerError, TimerHost};

#[cfg(target_arch = "wasm32")]
use crate::dom;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Schedules roll callbacks on the window's timer queue. Handles are the
/// numeric ids returned by `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = i32;

    #[cfg(target_arch = "wasm32")]
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<i32, TimerError> {
        let window = dom::window().ok_or_else(|| TimerError("window unavailable".into()))?;
        // Freed by wasm-bindgen after it runs; a cleared timer leaks one small closure.
        let closure = Closure::once_into_js(move || callback());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay)
            .map_err(|err| TimerError(dom::js_error_message(&err)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<i32, TimerError> {
        let _ = (delay_ms, callback);
        Err(TimerError("no browser timer queue on this target".into()))
    }

    fn clear_timeout(&self, handle: i32) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = dom::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = handle;
        }
    }
}
