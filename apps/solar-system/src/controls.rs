//! DOM wiring for the playback and theme buttons and the speed sliders.

use std::rc::Rc;

use orrery_web::dom::{element_by_id, listen, on_click};
use orrery_web::SharedRunner;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::game::{SolarSystem, Theme};

const TOGGLE_ANIMATION_ID: &str = "toggle-animation";
const TOGGLE_THEME_ID: &str = "toggle-theme";
const THEME_ATTRIBUTE: &str = "data-theme";

/// Bind every control. Fails on the first missing element.
pub fn bind(runner: &SharedRunner<SolarSystem>, document: &Document) -> Result<(), JsValue> {
    bind_animation_toggle(runner, document)?;
    bind_theme_toggle(document)?;

    let names: Vec<String> = runner.borrow().sim().bodies().names().map(str::to_owned).collect();
    for name in names {
        bind_speed_slider(runner, document, name)?;
    }
    Ok(())
}

fn bind_animation_toggle(runner: &SharedRunner<SolarSystem>, document: &Document) -> Result<(), JsValue> {
    let button: Element = element_by_id(document, TOGGLE_ANIMATION_ID)?;
    let runner = Rc::clone(runner);
    on_click(document, TOGGLE_ANIMATION_ID, move || {
        let state = runner.borrow_mut().sim_mut().toggle_animation();
        button.set_text_content(Some(state.button_label()));
    })
}

fn bind_theme_toggle(document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    on_click(document, TOGGLE_THEME_ID, move || {
        let current = body.get_attribute(THEME_ATTRIBUTE);
        let next = Theme::from_attribute(current.as_deref()).toggled();
        match body.set_attribute(THEME_ATTRIBUTE, next.as_attribute()) {
            Ok(()) => log::debug!("theme {next:?}"),
            Err(err) => log::warn!("could not set theme: {err:?}"),
        }
    })
}

fn bind_speed_slider(
    runner: &SharedRunner<SolarSystem>,
    document: &Document,
    name: String,
) -> Result<(), JsValue> {
    let id = format!("{name}-speed");
    let slider: HtmlInputElement = element_by_id(document, &id)?;
    let label = slider
        .next_element_sibling()
        .ok_or_else(|| JsValue::from_str(&format!("#{id} has no label after it")))?;

    let runner = Rc::clone(runner);
    listen(&slider, "input", move |event| {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let raw = input.value();
        let Some((value, text)) = speed_label(&raw) else {
            log::warn!("{name}: ignoring slider value '{raw}'");
            return;
        };
        if let Err(err) = runner.borrow_mut().sim_mut().set_speed_multiplier(&name, value) {
            log::warn!("{err}");
            return;
        }
        label.set_text_content(Some(&text));
    })
}

/// Parse a slider value into a speed multiplier and its `"<value>x"` label.
pub fn speed_label(raw: &str) -> Option<(f32, String)> {
    let value = raw.trim().parse::<f32>().ok()?;
    Some((value, format!("{value}x")))
}
