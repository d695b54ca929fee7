use crate::core::FieldState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A `ResizeObserver` on the canvas together with the closure it calls.
/// Disconnects when dropped.
pub struct SizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl SizeWatch {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SizeWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Size the canvas now and again whenever its box changes, rebuilding the
/// grid when the measured size differs. Layout changes that never resize the
/// window are caught as well.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<FieldState>>) -> anyhow::Result<SizeWatch> {
    apply_size(canvas, state);

    let canvas_resize = canvas.clone();
    let st = state.clone();
    // entries are ignored: the canvas box is re-read from the DOM
    let callback = Closure::wrap(Box::new(move |_entries: JsValue| {
        apply_size(&canvas_resize, &st);
    }) as Box<dyn FnMut(JsValue)>);

    let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver failed: {:?}", e))?;
    let element: &web::Element = canvas.as_ref();
    observer.observe(element);

    Ok(SizeWatch {
        observer,
        _callback: callback,
    })
}

fn apply_size(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<FieldState>>) {
    let bbox = dom::sync_canvas_size(canvas);
    if !bbox.is_measured() {
        log::debug!("[resize] canvas not measured yet");
        return;
    }
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    let mut state = state.borrow_mut();
    if state.resize(w, h) {
        let dots = state.grid().map_or(0, |g| g.len());
        log::info!("[resize] canvas {}x{}, {} dots", w, h, dots);
    }
}
