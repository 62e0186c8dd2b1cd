use crate::app::use_roll_driver;
use crate::components::controls::Controls;
use crate::components::header::Header;
use crate::components::legend::Legend;
use crate::components::rarity_readout::RarityReadout;
use crate::components::roll_window::RollWindow;
use crate::i18n::Lang;
use plate_core::PlateString;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub on_lang_change: Callback<Lang>,
}

/// The whole roller page. Owns the roll; language comes from the app.
#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let roll = use_roll_driver();
    let taken = use_state(|| None::<PlateString>);
    let snap = &roll.snapshot;

    let on_toggle = {
        let roll = roll.clone();
        Callback::from(move |()| roll.toggle())
    };
    let on_regenerate = {
        let roll = roll.clone();
        Callback::from(move |()| {
            if roll.regenerate().is_none() {
                log::debug!("regenerate ignored while rolling");
            }
        })
    };
    let on_take = {
        let taken = taken.clone();
        let current = snap.current;
        let can_take = snap.can_take();
        Callback::from(move |()| {
            if can_take {
                taken.set(Some(current));
            }
        })
    };
    // The take message only applies to the plate it was pressed on.
    let taken_plate = (*taken).filter(|plate| !snap.is_rolling() && *plate == snap.current);

    html! {
        <main id="main" class="page page-home">
            <Header lang={p.lang} on_lang_change={p.on_lang_change.clone()} />
            <RollWindow
                lang={p.lang}
                history={snap.history.clone()}
                rarity={snap.rarity}
                rolling={snap.is_rolling()}
            />
            <RarityReadout
                lang={p.lang}
                rarity={snap.rarity}
                rolling={snap.is_rolling()}
                taken={taken_plate}
            />
            <Controls
                lang={p.lang}
                rolling={snap.is_rolling()}
                can_regenerate={snap.can_regenerate()}
                can_take={snap.can_take()}
                {on_toggle}
                {on_regenerate}
                {on_take}
            />
            <Legend lang={p.lang} />
        </main>
    }
}
