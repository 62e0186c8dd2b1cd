#![cfg(target_arch = "wasm32")]

use plate_core::{PlateRoller, RollConfig, RollDriver};
use plate_web::app::{App, LOCALE_STORAGE_KEY};
use plate_web::dom;
use plate_web::i18n::{Lang, t};
use plate_web::timers::BrowserTimers;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlSelectElement};
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    dom::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("timeout");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("sleep");
}

#[wasm_bindgen_test]
async fn language_select_switches_strings_and_persists() {
    dom::local_storage()
        .expect("storage")
        .remove_item(LOCALE_STORAGE_KEY)
        .expect("clear");
    Renderer::<App>::with_root(ensure_app_root()).render();
    sleep(20).await;

    let doc = document();
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("language select")
        .dyn_into()
        .expect("select element");
    select.set_value("ja");
    select
        .dispatch_event(&Event::new("change").expect("event"))
        .expect("dispatch");
    sleep(20).await;

    let stored = dom::local_storage()
        .expect("storage")
        .get_item(LOCALE_STORAGE_KEY)
        .expect("read");
    assert_eq!(stored.as_deref(), Some("ja"));
    let html_lang = doc
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
        .unwrap_or_default();
    assert_eq!(html_lang, "ja");
    let roll = doc.get_element_by_id("roll-btn").expect("roll button");
    assert_eq!(
        roll.text_content().unwrap_or_default().trim(),
        t(Lang::Ja, "buttons.roll")
    );
}

#[wasm_bindgen_test]
async fn roll_button_starts_and_stops() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    sleep(20).await;

    let doc = document();
    let button: web_sys::HtmlElement = doc
        .get_element_by_id("roll-btn")
        .expect("roll button")
        .dyn_into()
        .expect("html element");
    button.click();
    sleep(200).await;
    assert!(doc.query_selector(".roll-window--rolling").ok().flatten().is_some());
    assert!(doc.query_selector("#generate-btn[disabled]").ok().flatten().is_some());

    button.click();
    sleep(20).await;
    assert!(doc.query_selector(".roll-window--rolling").ok().flatten().is_none());
    assert_eq!(doc.query_selector_all(".plate-main").expect("plates").length(), 1);
}

/// Plate text, rarity tier and readout class shown in the roll window.
fn visible_roll(doc: &web_sys::Document) -> (String, Vec<String>, String) {
    let plate = doc
        .query_selector(".roll-window > .plate")
        .ok()
        .flatten()
        .expect("head plate");
    let text = plate
        .query_selector(".plate-main")
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    let tiers = plate
        .class_name()
        .split_whitespace()
        .filter(|c| {
            ["common", "uncommon", "rare", "legendary"]
                .iter()
                .any(|tier| *c == format!("plate--{tier}"))
        })
        .map(str::to_string)
        .collect();
    let readout = doc
        .query_selector(".readout")
        .ok()
        .flatten()
        .map(|el| el.class_name())
        .unwrap_or_default();
    (text, tiers, readout)
}

fn head_plate_theme(doc: &web_sys::Document) -> String {
    doc.query_selector(".roll-window > .plate")
        .ok()
        .flatten()
        .map(|el| el.class_name())
        .unwrap_or_default()
}

fn choose_language(doc: &web_sys::Document, code: &str) {
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("language select")
        .dyn_into()
        .expect("select element");
    select.set_value(code);
    select
        .dispatch_event(&Event::new("change").expect("event"))
        .expect("dispatch");
}

async fn flush_render() {
    // Yew renders from a microtask, ahead of any pending roll timer.
    for _ in 0..2 {
        wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(
            &wasm_bindgen::JsValue::NULL,
        ))
        .await
        .expect("microtask");
    }
}

#[wasm_bindgen_test]
async fn language_switch_keeps_plate_and_rarity() {
    dom::local_storage()
        .expect("storage")
        .remove_item(LOCALE_STORAGE_KEY)
        .expect("clear");
    Renderer::<App>::with_root(ensure_app_root()).render();
    sleep(20).await;
    let doc = document();

    // Idle: the settled plate and its tier survive the switch.
    let idle_before = visible_roll(&doc);
    choose_language(&doc, "es");
    flush_render().await;
    assert!(head_plate_theme(&doc).contains("plate--esp"));
    assert_eq!(visible_roll(&doc), idle_before);

    // Mid-roll: the spinning plate is untouched while the theme changes.
    doc.get_element_by_id("roll-btn")
        .expect("roll button")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("html element")
        .click();
    sleep(200).await;
    let rolling_before = visible_roll(&doc);
    assert!(rolling_before.2.contains("readout--rolling"));
    choose_language(&doc, "ko");
    flush_render().await;
    assert!(head_plate_theme(&doc).contains("plate--kor"));
    assert_eq!(
        doc.get_element_by_id("roll-btn")
            .and_then(|el| el.text_content())
            .unwrap_or_default()
            .trim(),
        t(Lang::Ko, "buttons.stop")
    );
    assert_eq!(visible_roll(&doc), rolling_before);

    doc.get_element_by_id("roll-btn")
        .expect("roll button")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("html element")
        .click();
}

#[wasm_bindgen_test]
fn browser_timers_arm_and_cancel() {
    let roller = PlateRoller::new(RollConfig::default(), ChaCha20Rng::seed_from_u64(1));
    let driver = RollDriver::new(BrowserTimers, roller);
    assert!(driver.start());
    assert!(driver.timers_armed());
    let settled = driver.stop().expect("was rolling");
    assert!(!driver.timers_armed());
    assert_eq!(driver.snapshot().current, settled.plate);
}
