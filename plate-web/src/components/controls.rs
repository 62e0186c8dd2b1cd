use crate::components::button::Button;
use crate::i18n::{Lang, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub rolling: bool,
    pub can_regenerate: bool,
    pub can_take: bool,
    pub on_toggle: Callback<()>,
    pub on_regenerate: Callback<()>,
    pub on_take: Callback<()>,
}

#[function_component(Controls)]
pub fn controls(p: &Props) -> Html {
    let lang = p.lang;
    let toggle_label = if p.rolling {
        t(lang, "buttons.stop")
    } else {
        t(lang, "buttons.roll")
    };
    let on_toggle = p.on_toggle.reform(|_: MouseEvent| ());
    let on_regenerate = p.on_regenerate.reform(|_: MouseEvent| ());
    let on_take = p.on_take.reform(|_: MouseEvent| ());

    html! {
        <div class="controls">
            <Button
                id={AttrValue::from("roll-btn")}
                class={classes!("btn-roll", p.rolling.then_some("btn-roll--stop"))}
                label={toggle_label}
                onclick={on_toggle}
            />
            <Button
                id={AttrValue::from("generate-btn")}
                class={classes!("btn-generate")}
                label={t(lang, "buttons.generate")}
                onclick={on_regenerate}
                disabled={!p.can_regenerate}
            />
            <Button
                id={AttrValue::from("take-btn")}
                class={classes!("btn-take")}
                label={t(lang, "buttons.take")}
                onclick={on_take}
                disabled={!p.can_take}
            />
        </div>
    }
}
