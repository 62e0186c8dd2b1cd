use crate::i18n::locales::Lang;
use once_cell::sync::Lazy;
use serde_json::Value;

/// One language's parsed string table.
pub struct I18nBundle {
    pub lang: Lang,
    pub translations: Value,
}

fn raw_table(lang: Lang) -> &'static str {
    match lang {
        Lang::En => include_str!("../../i18n/en.json"),
        Lang::Ru => include_str!("../../i18n/ru.json"),
        Lang::Zh => include_str!("../../i18n/zh.json"),
        Lang::Ja => include_str!("../../i18n/ja.json"),
        Lang::Uk => include_str!("../../i18n/uk.json"),
        Lang::Be => include_str!("../../i18n/be.json"),
        Lang::Kk => include_str!("../../i18n/kk.json"),
        Lang::Es => include_str!("../../i18n/es.json"),
        Lang::Ba => include_str!("../../i18n/ba.json"),
        Lang::Tt => include_str!("../../i18n/tt.json"),
        Lang::Ko => include_str!("../../i18n/ko.json"),
    }
}

fn build_bundle(lang: Lang) -> I18nBundle {
    let translations = match serde_json::from_str(raw_table(lang)) {
        Ok(value) => value,
        Err(err) => {
            log::error!("locale table {} failed to parse: {err}", lang.code());
            Value::Object(serde_json::Map::new())
        }
    };
    I18nBundle { lang, translations }
}

static BUNDLES: Lazy<Vec<I18nBundle>> =
    Lazy::new(|| Lang::ALL.into_iter().map(build_bundle).collect());

/// Parsed string table for `lang`. Tables are parsed once, on first use.
#[must_use]
pub fn bundle(lang: Lang) -> &'static I18nBundle {
    &BUNDLES[lang.index()]
}
