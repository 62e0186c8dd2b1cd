use futures::executor::block_on;
use plate_core::{PlateString, classify};
use plate_web::app::App;
use plate_web::components::flag::{Flag, Props as FlagProps};
use plate_web::components::plate::{LicensePlate, Props as PlateProps};
use plate_web::i18n::{Lang, t};
use plate_web::pages::home::{HomePage, Props as HomeProps};
use plate_web::theme::Country;
use yew::LocalServerRenderer;
use yew::prelude::*;

fn render_home(lang: Lang) -> String {
    let props = HomeProps {
        lang,
        on_lang_change: Callback::noop(),
    };
    block_on(LocalServerRenderer::<HomePage>::with_props(props).render())
}

#[test]
fn app_renders_default_language() {
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains(&t(Lang::Ru, "app.title")));
    assert!(html.contains(r#"id="roll-btn""#));
}

#[test]
fn every_language_renders_its_own_strings_and_theme() {
    for lang in Lang::ALL {
        let html = render_home(lang);
        assert!(html.contains(&t(lang, "buttons.roll")), "{}", lang.code());
        assert!(html.contains(&t(lang, "legend.title")), "{}", lang.code());
        let theme = format!("plate--{}", lang.country().css_key());
        assert!(html.contains(&theme), "{} missing {theme}", lang.code());
        assert!(html.contains(lang.country().code()), "{}", lang.code());
    }
}

#[test]
fn flags_render_for_every_country() {
    for country in Country::ALL {
        let html =
            block_on(LocalServerRenderer::<Flag>::with_props(FlagProps { country }).render());
        assert!(html.contains(&format!("flag--{}", country.css_key())));
    }
}

#[test]
fn plate_rendering_keeps_rarity_across_themes() {
    let plate: PlateString = "Е777ВА".parse().expect("plate");
    let rarity = classify(&plate);
    for country in Country::ALL {
        let props = PlateProps {
            plate,
            rarity,
            country,
            rolling: false,
            compact: false,
            label: None,
        };
        let html = block_on(LocalServerRenderer::<LicensePlate>::with_props(props).render());
        assert!(html.contains("plate--legendary"));
        assert!(html.contains(country.code()));
    }
}
