use crate::core::dot::{Segment, Surface};
use crate::core::FieldState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        // fall back to the whole backing store before the first measurement
        let (w, h) = match self.ctx.canvas() {
            Some(c) if width <= 0.0 || height <= 0.0 => (c.width() as f64, c.height() as f64),
            _ => (width, height),
        };
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn stroke_segment(&mut self, s: &Segment<'_>) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(s.alpha);
        ctx.set_stroke_style_str(s.color);
        ctx.set_line_width(s.line_width);
        ctx.set_line_cap("round");

        ctx.save();
        ctx.begin_path();
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, s.center.x, s.center.y);
        _ = ctx.rotate(s.angle);
        ctx.move_to(-s.length / 2.0, 0.0);
        ctx.line_to(s.length / 2.0, 0.0);
        ctx.stroke();
        ctx.restore();
    }
}

pub struct FrameContext {
    pub state: Rc<RefCell<FieldState>>,
    pub surface: CanvasSurface,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.state
            .borrow_mut()
            .frame(dt.as_secs_f64(), &mut self.surface);
    }
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct Ticker {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl Ticker {
    /// Cancel the pending frame and drop the loop closure.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: FrameContext) -> Ticker {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.frame();
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    handle.set(request_frame(&tick));
    Ticker { tick, handle }
}
