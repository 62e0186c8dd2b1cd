use crate::components::plate::LicensePlate;
use crate::i18n::{Lang, tr};
use plate_core::{PlateString, Rarity};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    /// Newest first; the head is the current plate.
    pub history: Vec<PlateString>,
    pub rarity: Rarity,
    pub rolling: bool,
}

fn plate_label(lang: Lang, plate: PlateString) -> AttrValue {
    let text = plate.to_string();
    let mut args = BTreeMap::new();
    args.insert("plate", text.as_str());
    AttrValue::from(tr(lang, "plate.label", Some(&args)))
}

/// Slot-machine window: the current plate on top, recent draws fading below.
#[function_component(RollWindow)]
pub fn roll_window(p: &Props) -> Html {
    let country = p.lang.country();
    // Rarity styling belongs to settled plates only.
    let head_rarity = if p.rolling { Rarity::Common } else { p.rarity };
    let mut plates = p.history.iter().copied();
    let head = plates.next();
    html! {
        <section class={classes!("roll-window", p.rolling.then_some("roll-window--rolling"))} aria-live="polite">
            if let Some(plate) = head {
                <LicensePlate
                    {plate}
                    rarity={head_rarity}
                    {country}
                    rolling={p.rolling}
                    label={plate_label(p.lang, plate)}
                />
            }
            <div class="roll-trail" aria-hidden="true">
                { for plates.enumerate().map(|(idx, plate)| html! {
                    <div key={idx} class="roll-trail-item" style={format!("opacity: {:.2};", 0.8 - 0.12 * idx as f32)}>
                        <LicensePlate {plate} rarity={Rarity::Common} {country} rolling={p.rolling} compact=true />
                    </div>
                }) }
            </div>
        </section>
    }
}
