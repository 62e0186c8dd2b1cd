use crate::i18n::{Lang, t, tr};
use plate_core::{PlateString, Rarity};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub rarity: Rarity,
    pub rolling: bool,
    /// Set once the player pressed "take" on the current plate.
    #[prop_or_default]
    pub taken: Option<PlateString>,
}

#[function_component(RarityReadout)]
pub fn rarity_readout(p: &Props) -> Html {
    let lang = p.lang;
    if p.rolling {
        return html! {
            <div class="readout readout--rolling" aria-live="polite">
                <p class="readout-rolling">{ t(lang, "result.rolling") }</p>
            </div>
        };
    }

    let name = t(lang, &format!("rarity.{}.name", p.rarity.key()));
    let headline = {
        let mut args = BTreeMap::new();
        args.insert("rarity", name.as_str());
        tr(lang, "result.headline", Some(&args))
    };
    let price = {
        let mut args = BTreeMap::new();
        args.insert("price", p.rarity.price_label());
        tr(lang, "result.price", Some(&args))
    };
    let taken = p.taken.map(|plate| {
        let text = plate.to_string();
        let mut args = BTreeMap::new();
        args.insert("plate", text.as_str());
        tr(lang, "result.taken", Some(&args))
    });

    html! {
        <div class={classes!("readout", format!("readout--{}", p.rarity.key()))} aria-live="polite">
            <h2 class="readout-headline">{ headline }</h2>
            <p class="readout-price">{ price }</p>
            if let Some(message) = taken {
                <p class="readout-taken">{ message }</p>
            }
        </div>
    }
}
