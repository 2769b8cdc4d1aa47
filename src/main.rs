//! Angle dial demo entry point
//!
//! Mounts a dial onto the host page, bound to an `<input id="angle">`
//! element when one exists. Extra options can be supplied as JSON in the
//! input's `data-options` attribute.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    use angle_dial::{AngleDial, DialOptions};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Angle dial demo starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to mount into");
            return;
        };

        let field: Option<HtmlInputElement> = document
            .get_element_by_id("angle")
            .and_then(|el| el.dyn_into().ok());
        if field.is_none() {
            log::info!("No #angle input found, mounting an unbound dial");
        }

        let options = field
            .as_ref()
            .and_then(|f| f.get_attribute("data-options"))
            .map(|json| match DialOptions::from_json(&json) {
                Ok(opts) => opts,
                Err(e) => {
                    log::warn!("Ignoring unparsable data-options: {e}");
                    DialOptions::default()
                }
            })
            .unwrap_or_default();

        match AngleDial::attach(field, options) {
            Some(dial) => {
                log::info!("Dial mounted at {:.3} rad", dial.value());
                // the widget lives as long as the page does
                dial.forget();
            }
            None => log::error!("Canvas 2D unavailable, dial not created"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_demo::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Angle dial (native) starting...");
    log::info!("The dial mounts onto a web page - run with `trunk serve` for the demo");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
