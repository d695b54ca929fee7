use glam::DVec2;
use web_sys as web;

/// Screen-space box of the canvas as reported by `getBoundingClientRect`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CanvasBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBox {
    #[inline]
    pub fn from_rect(rect: &web::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Map client coordinates into canvas backing-store pixels.
///
/// When the backing store matches the CSS box this is a plain offset by the
/// box origin; otherwise the offset is scaled per axis.
#[inline]
pub fn client_to_canvas(client: DVec2, bbox: CanvasBox, backing: (u32, u32)) -> DVec2 {
    let local = client - DVec2::new(bbox.left, bbox.top);
    if !bbox.is_measured() {
        return local;
    }
    let sx = backing.0 as f64 / bbox.width;
    let sy = backing.1 as f64 / bbox.height;
    DVec2::new(local.x * sx, local.y * sy)
}

// ---------------- Event helpers ----------------
#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let bbox = CanvasBox::from_rect(&canvas.get_bounding_client_rect());
    let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
    client_to_canvas(client, bbox, (canvas.width(), canvas.height()))
}

/// Position of the first touch that started on the event target, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<DVec2> {
    let touch = ev.target_touches().get(0)?;
    let bbox = CanvasBox::from_rect(&canvas.get_bounding_client_rect());
    let client = DVec2::new(touch.client_x() as f64, touch.client_y() as f64);
    Some(client_to_canvas(client, bbox, (canvas.width(), canvas.height())))
}
