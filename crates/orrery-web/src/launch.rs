//! Page start-up: canvas creation, window/pointer bindings, frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::{FrameScheduler, InputEvent, PointerButton, Simulation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::canvas::CanvasRenderer;
use crate::dom::{self, element_by_id, js_error, listen, listen_active};
use crate::runner::AppRunner;
use crate::scheduler::AnimationFrameScheduler;

/// The runner as shared between DOM handlers and the frame callback.
pub type SharedRunner<S> = Rc<RefCell<AppRunner<S, CanvasRenderer>>>;

/// A running app. The frame loop owns itself, so dropping the handle
/// leaves it running; call `stop` to end it.
pub struct AppHandle {
    scheduler: AnimationFrameScheduler,
}

impl AppHandle {
    /// Cancel the frame loop. Event handlers stay attached but no longer
    /// produce visible frames.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        log::info!("frame loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }
}

fn window_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w.max(0.0) as u32, h.max(0.0) as u32))
}

fn bind_resize<S: Simulation + 'static>(window: &Window, runner: &SharedRunner<S>) -> Result<(), JsValue> {
    let runner = Rc::clone(runner);
    let win = window.clone();
    listen(window, "resize", move |_| match window_size(&win) {
        Ok((w, h)) => runner.borrow_mut().resize(w, h),
        Err(err) => log::warn!("resize: could not read window size: {err:?}"),
    })
}

fn bind_pointer<S: Simulation + 'static>(
    canvas: &HtmlCanvasElement,
    runner: &SharedRunner<S>,
) -> Result<(), JsValue> {
    {
        let runner = Rc::clone(runner);
        let target = canvas.clone();
        listen(canvas, "pointerdown", move |event| {
            let Some(e) = event.dyn_ref::<web_sys::PointerEvent>() else {
                return;
            };
            // Keep receiving moves when the pointer leaves the canvas mid-drag.
            if let Err(err) = target.set_pointer_capture(e.pointer_id()) {
                log::debug!("pointer capture unavailable: {err:?}");
            }
            runner.borrow_mut().push_input(InputEvent::PointerDown {
                x: e.offset_x() as f32,
                y: e.offset_y() as f32,
                button: PointerButton::from_dom(e.button()),
            });
        })?;
    }
    {
        let runner = Rc::clone(runner);
        listen(canvas, "pointermove", move |event| {
            if let Some(e) = event.dyn_ref::<web_sys::PointerEvent>() {
                runner.borrow_mut().push_input(InputEvent::PointerMove {
                    x: e.offset_x() as f32,
                    y: e.offset_y() as f32,
                });
            }
        })?;
    }
    for name in ["pointerup", "pointercancel"] {
        let runner = Rc::clone(runner);
        listen(canvas, name, move |event| {
            if let Some(e) = event.dyn_ref::<web_sys::PointerEvent>() {
                runner.borrow_mut().push_input(InputEvent::PointerUp {
                    x: e.offset_x() as f32,
                    y: e.offset_y() as f32,
                });
            }
        })?;
    }
    {
        let runner = Rc::clone(runner);
        listen_active(canvas, "wheel", move |event| {
            event.prevent_default();
            if let Some(e) = event.dyn_ref::<web_sys::WheelEvent>() {
                runner.borrow_mut().push_input(InputEvent::Wheel {
                    delta_y: e.delta_y() as f32,
                });
            }
        })?;
    }
    // Right-drag pans; keep the browser menu out of the way.
    listen_active(canvas, "contextmenu", |event| event.prevent_default())
}

/// Start `sim` on the page.
///
/// Appends a canvas to the configured container, sizes it to the window,
/// builds the scene, hands the shared runner to `bind_controls` for
/// app-specific DOM wiring, then starts the frame loop. Any missing element
/// or init failure aborts start-up with an error.
pub fn launch<S, F>(sim: S, bind_controls: F) -> Result<AppHandle, JsValue>
where
    S: Simulation + 'static,
    F: FnOnce(&SharedRunner<S>, &Document) -> Result<(), JsValue>,
{
    let window = dom::window()?;
    let document = dom::document()?;
    let config = sim.config();

    let container: HtmlElement = element_by_id(&document, config.container_id)?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.style().set_property("display", "block")?;
    canvas.style().set_property("touch-action", "none")?;
    container.append_child(&canvas)?;

    let renderer = CanvasRenderer::new(canvas.clone(), config.clear_color, window.device_pixel_ratio())?;
    let mut runner = AppRunner::new(sim, renderer, dom::random_seed());
    let (w, h) = window_size(&window)?;
    runner.resize(w, h);
    runner.init().map_err(js_error)?;

    let runner = Rc::new(RefCell::new(runner));
    bind_resize(&window, &runner)?;
    bind_pointer(&canvas, &runner)?;
    bind_controls(&runner, &document)?;

    let mut scheduler = AnimationFrameScheduler::new(window);
    scheduler.start(Box::new(move |now_ms| runner.borrow_mut().tick(now_ms)));

    Ok(AppHandle { scheduler })
}
