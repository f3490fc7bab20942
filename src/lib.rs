//! # tensors-panel
//!
//! Leptos + WASM plugin panel for inspecting layer weights (kernels and
//! biases) across training steps. The host application loads the compiled
//! module and calls [`render`], which mounts [`app::TensorsPanel`] into the
//! host document.
//!
//! Data shapes, slicing, and number formatting live in the `tensors` crate;
//! this crate holds the views, the reactive state they bind to, and the
//! HTTP call to the host's tensors endpoint.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// `id` of the element the panel mounts into.
pub const ROOT_ELEMENT_ID: &str = "app";

#[cfg(feature = "csr")]
pub use mount::render;

#[cfg(feature = "csr")]
mod mount {
    use std::sync::atomic::{AtomicBool, Ordering};

    use leptos::prelude::*;
    use wasm_bindgen::prelude::wasm_bindgen;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::ROOT_ELEMENT_ID;
    use crate::app::TensorsPanel;
    use crate::config::PanelConfig;

    static MOUNTED: AtomicBool = AtomicBool::new(false);

    /// Host entry point: inject the stylesheet link and a root `<div>` into
    /// `document.body`, then mount the panel there.
    ///
    /// Runs once per plugin load; later calls are ignored.
    ///
    /// # Errors
    ///
    /// Returns the DOM exception when the document or body is unavailable or
    /// an element cannot be created.
    #[wasm_bindgen]
    pub fn render() -> Result<(), JsValue> {
        if MOUNTED.swap(true, Ordering::SeqCst) {
            log::warn!("tensors panel already mounted; ignoring render()");
            return Ok(());
        }
        console_error_panic_hook::set_once();
        // A logger installed by the host page takes precedence.
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no document body"))?;
        let config = read_config(&window);

        let link = document.create_element("link")?;
        link.set_attribute("rel", "stylesheet")?;
        link.set_attribute("href", &config.stylesheet_href)?;
        body.append_child(&link)?;

        let root = document.create_element("div")?;
        root.set_id(ROOT_ELEMENT_ID);
        body.append_child(&root)?;
        let root: web_sys::HtmlElement = root.dyn_into().map_err(JsValue::from)?;

        log::info!("mounting tensors panel: endpoint={} log_dir={}", config.endpoint, config.log_dir);
        leptos::mount::mount_to(root, move || view! { <TensorsPanel config=config/> }).forget();
        Ok(())
    }

    /// Defaults overridden by the host page's query string. Invalid overrides
    /// are logged and dropped as a whole.
    fn read_config(window: &web_sys::Window) -> PanelConfig {
        let search = window.location().search().unwrap_or_default();
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
            return PanelConfig::default();
        };
        match PanelConfig::from_query(|key| params.get(key)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring tensors panel overrides: {e}");
                PanelConfig::default()
            }
        }
    }
}
