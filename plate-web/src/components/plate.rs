//! The license plate graphic.

use crate::components::flag::Flag;
use crate::dom;
use crate::theme::Country;
use crate::wear::{PlateWear, region_for};
use plate_core::{PlateString, Rarity};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub plate: PlateString,
    pub rarity: Rarity,
    pub country: Country,
    #[prop_or_default]
    pub rolling: bool,
    /// Secondary plates in the roll window render smaller.
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

fn wear_for(rolling: bool) -> PlateWear {
    if rolling {
        PlateWear::pristine()
    } else {
        PlateWear::random(&mut ChaCha20Rng::seed_from_u64(dom::entropy()))
    }
}

fn wear_overlay(wear: &PlateWear) -> Html {
    html! {
        <span class="plate-wear" aria-hidden="true">
            { for wear.specks.iter().map(|s| html! { <span class="plate-speck" style={s.style()}></span> }) }
            { for wear.scratches.iter().map(|s| html! { <span class="plate-scratch" style={s.style()}></span> }) }
        </span>
    }
}

#[function_component(LicensePlate)]
pub fn license_plate(p: &Props) -> Html {
    let plate = p.plate;
    let wear = wear_for(p.rolling);
    let class = classes!(
        "plate",
        format!("plate--{}", p.rarity.key()),
        format!("plate--{}", p.country.css_key()),
        p.rolling.then_some("plate--rolling"),
        p.compact.then_some("plate--compact"),
    );
    let label = p
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from(plate.to_string()));

    html! {
        <div {class} style={wear.plate_style()} role="img" aria-label={label}>
            <span class="plate-bolt plate-bolt--left" style={wear.bolts[0].style()}></span>
            <span class="plate-main">
                <span class="plate-letter">{ plate.leading_letter().to_string() }</span>
                <span class="plate-digits">{ plate.digits_str() }</span>
                <span class="plate-series">{ plate.series_str() }</span>
            </span>
            <span class="plate-region">
                <span class="plate-region-code">{ region_for(&plate).to_string() }</span>
                <span class="plate-country">
                    <Flag country={p.country} />
                    <span class="plate-country-code">{ p.country.code() }</span>
                </span>
            </span>
            <span class="plate-bolt plate-bolt--right" style={wear.bolts[1].style()}></span>
            { wear_overlay(&wear) }
        </div>
    }
}
