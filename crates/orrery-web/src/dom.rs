//! Small web-sys helpers shared by the launcher and app control layers.

use orrery_engine::OrreryError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Look up `#id` and cast it to `T`. A missing element or the wrong
/// element type is an error naming the id.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has an unexpected type")))
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like `listen`, but registers a non-passive listener so the handler may
/// call `prevent_default` (wheel scrolling, context menus).
pub fn listen_active<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(false);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Click handler on `#id`. Fails if the element is missing.
pub fn on_click<F>(document: &Document, id: &str, mut callback: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let element: web_sys::Element = element_by_id(document, id)?;
    listen(&element, "click", move |_| callback())
}

/// Convert an engine error for the wasm boundary.
pub fn js_error(err: OrreryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Seed for the simulation RNG when the config leaves it open.
pub fn random_seed() -> u64 {
    // 53 bits of randomness; xorshift needs a non-zero state.
    ((js_sys::Math::random() * (1u64 << 53) as f64) as u64) | 1
}
