use crate::i18n::{Lang, locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub on_lang_change: Callback<Lang>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                match Lang::from_code(&sel.value()) {
                    Some(lang) => cb.emit(lang),
                    None => log::warn!("unknown language option {}", sel.value()),
                }
            }
        })
    };
    let lang = p.lang;
    html! {
        <header role="banner" class="header">
            <div class="header-lang">
                <label for="lang-select" class="sr-only">{ t(lang, "language.label") }</label>
                <select id="lang-select" onchange={on_change} aria-label={t(lang, "language.label")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.lang == lang}>{ meta.name }</option>
                    }) }
                </select>
            </div>
            <h1 class="title">{ t(lang, "app.title") }</h1>
            <p class="subtitle">{ t(lang, "app.subtitle") }</p>
        </header>
    }
}
