use crate::theme::{Country, FlagPattern};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub country: Country,
}

fn bands(colors: &[&str]) -> Html {
    html! {
        { for colors.iter().map(|color| html! {
            <span class="flag-band" style={format!("background-color: {color};")}></span>
        }) }
    }
}

#[function_component(Flag)]
pub fn flag(p: &Props) -> Html {
    let body = match p.country.flag() {
        FlagPattern::Bands(colors) => bands(colors),
        FlagPattern::Disc { field, disc } => html! {
            <span class="flag-field" style={format!("background-color: {field};")}>
                <span class="flag-disc" style={format!("background-color: {disc};")}></span>
            </span>
        },
        FlagPattern::Star { field, star } => html! {
            <span class="flag-field" style={format!("background-color: {field};")}>
                <span class="flag-star" style={format!("color: {star};")}>{ "★" }</span>
            </span>
        },
        FlagPattern::Canton { bands: colors, canton } => html! {
            <>
                { bands(colors) }
                <span class="flag-canton" style={format!("background-color: {canton};")}></span>
            </>
        },
    };
    html! {
        <span class={classes!("flag", format!("flag--{}", p.country.css_key()))} aria-hidden="true">
            { body }
        </span>
    }
}
