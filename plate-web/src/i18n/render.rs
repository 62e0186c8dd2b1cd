use crate::i18n::bundle::bundle;
use crate::i18n::locales::Lang;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(lang: Lang, key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    get_nested_value(&bundle(lang).translations, key).and_then(|v| render_value(v, args))
}

/// Translate `key` in `lang`.
///
/// Missing keys render as the key itself; there is no cross-language fallback.
#[must_use]
pub fn t(lang: Lang, key: &str) -> String {
    resolve(lang, key, None).unwrap_or_else(|| key.to_string())
}

/// Translate `key` in `lang`, substituting `{name}` and `{{name}}` placeholders.
#[must_use]
pub fn tr(lang: Lang, key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(lang, key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_returns_key_when_missing() {
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
        assert_eq!(t(Lang::Ko, "buttons"), "buttons");
    }

    #[test]
    fn translate_reads_each_language_table() {
        assert_eq!(t(Lang::En, "buttons.roll"), "Roll");
        assert_ne!(t(Lang::Ru, "buttons.roll"), t(Lang::En, "buttons.roll"));
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn price_template_substitutes_price() {
        let mut args = BTreeMap::new();
        args.insert("price", "10 000 ₽");
        assert_eq!(tr(Lang::En, "result.price", Some(&args)), "Price: 10 000 ₽");
    }
}
