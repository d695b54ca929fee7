use crate::constants::CONTEXT_2D;
use crate::input::CanvasBox;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context(CONTEXT_2D)
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Match the canvas backing store to its CSS box and return that box.
/// An unmeasured canvas keeps a 1x1 backing store.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) -> CanvasBox {
    let bbox = CanvasBox::from_rect(&canvas.get_bounding_client_rect());
    let w_px = bbox.width.floor() as u32;
    let h_px = bbox.height.floor() as u32;
    if canvas.width() != w_px.max(1) {
        canvas.set_width(w_px.max(1));
    }
    if canvas.height() != h_px.max(1) {
        canvas.set_height(h_px.max(1));
    }
    bbox
}
