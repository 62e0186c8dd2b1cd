//! Fire-and-forget audio cues for the roll.
//!
//! Playback failures (autoplay policy, missing files) are logged and dropped.

use crate::paths::asset_path;

pub const ROLLING_CUE: &str = "audio/rolling.mp3";
pub const WIN_CUE: &str = "audio/win.mp3";

#[cfg(target_arch = "wasm32")]
mod imp {
    use crate::dom::js_error_message;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;

    pub struct Player {
        rolling: Option<HtmlAudioElement>,
        win: Option<HtmlAudioElement>,
    }

    fn load(url: &str, looping: bool) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(url) {
            Ok(el) => {
                el.set_loop(looping);
                Some(el)
            }
            Err(err) => {
                log::warn!("audio {url} unavailable: {}", js_error_message(&err));
                None
            }
        }
    }

    fn play(el: &HtmlAudioElement, name: &'static str) {
        match el.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("{name} cue rejected: {}", js_error_message(&err));
                }
            }),
            Err(err) => log::warn!("{name} cue failed: {}", js_error_message(&err)),
        }
    }

    impl Player {
        pub fn new(rolling_url: &str, win_url: &str) -> Self {
            Self {
                rolling: load(rolling_url, true),
                win: load(win_url, false),
            }
        }

        pub fn start_rolling(&self) {
            if let Some(el) = &self.rolling {
                el.set_current_time(0.0);
                play(el, "rolling");
            }
        }

        pub fn stop_rolling(&self) {
            if let Some(el) = &self.rolling
                && let Err(err) = el.pause()
            {
                log::warn!("rolling cue did not pause: {}", js_error_message(&err));
            }
        }

        pub fn play_win(&self) {
            if let Some(el) = &self.win {
                el.set_current_time(0.0);
                play(el, "win");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub struct Player;

    impl Player {
        pub fn new(rolling_url: &str, win_url: &str) -> Self {
            log::debug!("audio disabled off-browser ({rolling_url}, {win_url})");
            Self
        }

        pub fn start_rolling(&self) {}

        pub fn stop_rolling(&self) {}

        pub fn play_win(&self) {}
    }
}

/// The looping rolling cue plus the one-shot win cue.
pub struct RollAudio {
    player: imp::Player,
}

impl RollAudio {
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: imp::Player::new(&asset_path(ROLLING_CUE), &asset_path(WIN_CUE)),
        }
    }

    pub fn rolling_started(&self) {
        self.player.start_rolling();
    }

    /// Stop the rolling loop; play the win cue when `win` is set.
    pub fn rolling_stopped(&self, win: bool) {
        self.player.stop_rolling();
        if win {
            self.player.play_win();
        }
    }
}

impl Default for RollAudio {
    fn default() -> Self {
        Self::new()
    }
}
