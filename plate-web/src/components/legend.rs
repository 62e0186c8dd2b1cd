use crate::i18n::{Lang, t};
use plate_core::Rarity;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(Legend)]
pub fn legend(p: &Props) -> Html {
    let lang = p.lang;
    html! {
        <aside class="legend">
            <h3>{ t(lang, "legend.title") }</h3>
            <ul>
                { for Rarity::ALL.iter().rev().map(|rarity| {
                    let key = rarity.key();
                    html! {
                        <li key={key} class={classes!("legend-item", format!("legend-item--{key}"))}>
                            <strong>{ t(lang, &format!("rarity.{key}.name")) }</strong>
                            { ": " }
                            { t(lang, &format!("rarity.{key}.description")) }
                            <span class="legend-price">{ rarity.price_label() }</span>
                        </li>
                    }
                }) }
            </ul>
            <p class="legend-info">{ t(lang, "app.info") }</p>
        </aside>
    }
}
