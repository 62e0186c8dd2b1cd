use crate::i18n::Lang;
use crate::pages::home::HomePage;
use yew::prelude::*;

pub mod roller;
pub mod state;

pub use roller::{RollHandle, use_roll_driver};
pub use state::{AppState, LOCALE_STORAGE_KEY, use_app_state};

/// Top-level component. Owns the language; the home page owns the roll.
#[function_component(App)]
pub fn app() -> Html {
    let app_state = use_app_state();
    let on_lang_change = {
        let app_state = app_state.clone();
        Callback::from(move |lang: Lang| app_state.set_lang(lang))
    };
    html! {
        <HomePage lang={*app_state.lang} {on_lang_change} />
    }
}
