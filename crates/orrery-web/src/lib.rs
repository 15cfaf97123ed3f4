pub mod canvas;
pub mod dom;
pub mod launch;
pub mod runner;
pub mod scheduler;

pub use canvas::CanvasRenderer;
pub use launch::{launch, AppHandle, SharedRunner};
pub use runner::AppRunner;
pub use scheduler::AnimationFrameScheduler;

/// Generate the `#[wasm_bindgen]` entry point for a simulation.
///
/// Expands to:
/// - an exported `OrreryApp` handle class with `stop()` and `isRunning()`
/// - `startOrrery()`, which installs the panic hook and console logger,
///   launches the simulation and returns the handle
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MySim;
///
/// orrery_web::export_app!(MySim, "my-sim", controls::bind);
/// ```
///
/// # Arguments
///
/// - `$sim_type`: a type implementing `orrery_engine::Simulation` with a `new()` constructor
/// - `$app_name`: string literal used in the start-up log line
/// - `$bind`: `fn(&SharedRunner<$sim_type>, &web_sys::Document) -> Result<(), JsValue>`
///   wiring the app's own DOM controls
#[macro_export]
macro_rules! export_app {
    ($sim_type:ty, $app_name:literal, $bind:path) => {
        #[wasm_bindgen]
        pub struct OrreryApp {
            handle: $crate::AppHandle,
        }

        #[wasm_bindgen]
        impl OrreryApp {
            /// Cancel the frame loop.
            pub fn stop(&mut self) {
                self.handle.stop();
            }

            #[wasm_bindgen(js_name = isRunning)]
            pub fn is_running(&self) -> bool {
                self.handle.is_running()
            }
        }

        #[wasm_bindgen(js_name = startOrrery)]
        pub fn start_orrery() -> Result<OrreryApp, JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let handle = $crate::launch(<$sim_type>::new(), $bind)?;
            log::info!("{}: started", $app_name);
            Ok(OrreryApp { handle })
        }
    };
}
