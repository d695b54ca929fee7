#![cfg(target_arch = "wasm32")]
use crate::core::field::FieldPhase;
use crate::core::{FieldConfig, FieldState};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
/// Platform-free dot field: grid, tweens, rotation maths and the per-frame
/// update. Drawing goes through [`core::dot::Surface`].
pub mod core;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dot-field loaded");
    Ok(())
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

fn parse_options(options: JsValue) -> anyhow::Result<FieldConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(FieldConfig::default());
    }
    let config: FieldConfig = serde_wasm_bindgen::from_value(options)
        .map_err(|e| anyhow::anyhow!("invalid options: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// A dot field mounted on one canvas. Call `destroy()` (or `free()`) to
/// detach it from the page.
#[wasm_bindgen]
pub struct DotField {
    state: Rc<RefCell<FieldState>>,
    listeners: events::Listeners,
    size_watch: Option<events::SizeWatch>,
    ticker: Option<frame::Ticker>,
}

#[wasm_bindgen]
impl DotField {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement, options: JsValue) -> Result<DotField, JsValue> {
        mount(canvas, options).map_err(to_js)
    }

    /// Replace the options; keys left out fall back to their defaults.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&self, options: JsValue) -> Result<(), JsValue> {
        let config = parse_options(options).map_err(to_js)?;
        self.state
            .borrow_mut()
            .set_config(config)
            .map_err(|e| to_js(e.into()))
    }

    /// Whether the canvas has been measured and the grid built.
    #[wasm_bindgen(getter = isReady)]
    pub fn is_ready(&self) -> bool {
        self.state.borrow().phase() == FieldPhase::Ready
    }

    /// Remove every listener, stop watching the canvas size and stop the
    /// frame loop. Safe to call twice.
    pub fn destroy(&mut self) {
        self.listeners.remove_all();
        if let Some(watch) = self.size_watch.take() {
            watch.disconnect();
        }
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
            log::info!("[mount] dot field destroyed");
        }
    }
}

impl Drop for DotField {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount(canvas: web::HtmlCanvasElement, options: JsValue) -> anyhow::Result<DotField> {
    let (_, document) = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let config = parse_options(options)?;
    let ctx = dom::context_2d(&canvas)?;

    let state = Rc::new(RefCell::new(FieldState::new(config, StdRng::from_entropy())?));

    let size_watch = events::wire_resize(&canvas, &state)?;
    let mut listeners = events::Listeners::default();
    events::wire_pointer_handlers(&mut listeners, &canvas, &document, &state)?;

    let ticker = frame::start_loop(frame::FrameContext {
        state: state.clone(),
        surface: frame::CanvasSurface::new(ctx),
        last_instant: Instant::now(),
    });

    log::info!(
        "[mount] dot field attached ({} listeners, {:?})",
        listeners.len(),
        state.borrow().phase()
    );

    Ok(DotField {
        state,
        listeners,
        size_watch: Some(size_watch),
        ticker: Some(ticker),
    })
}
