use crate::i18n::Lang;
use yew::prelude::*;

/// `localStorage` key holding the chosen language code.
pub const LOCALE_STORAGE_KEY: &str = "plates.locale";

#[derive(Clone, PartialEq)]
pub struct AppState {
    pub lang: UseStateHandle<Lang>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        lang: use_state(saved_lang),
    }
}

impl AppState {
    /// Switch language, remember it and update `<html lang>`.
    pub fn set_lang(&self, lang: Lang) {
        if *self.lang != lang {
            log::info!("language -> {}", lang.code());
        }
        persist_lang(lang);
        self.lang.set(lang);
    }
}

/// Language saved by an earlier visit, or the default.
#[must_use]
pub fn saved_lang() -> Lang {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .and_then(|code| Lang::from_code(&code))
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Lang::default()
    }
}

pub fn persist_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::set_document_lang(lang.code());
        match crate::dom::local_storage() {
            Ok(storage) => {
                if let Err(err) = storage.set_item(LOCALE_STORAGE_KEY, lang.code()) {
                    log::warn!(
                        "could not save language: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
            Err(err) => log::warn!("localStorage: {}", crate::dom::js_error_message(&err)),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;
}
