use super::Listeners;
use crate::constants::*;
use crate::core::FieldState;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse events are taken from the canvas; touch events from the whole
/// document so a drag that leaves the canvas keeps steering the dots.
pub fn wire_pointer_handlers(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
    state: &Rc<RefCell<FieldState>>,
) -> anyhow::Result<()> {
    wire_mouse(listeners, canvas, state)?;
    wire_touch(listeners, canvas, document, state)?;
    Ok(())
}

fn wire_mouse(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<FieldState>>,
) -> anyhow::Result<()> {
    let target: &web::EventTarget = canvas.as_ref();

    let st = state.clone();
    listeners.add(target, EV_MOUSE_ENTER, move |_ev| {
        st.borrow_mut().pointer_enter();
    })?;

    let st = state.clone();
    let canvas_move = canvas.clone();
    listeners.add(target, EV_MOUSE_MOVE, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let pos = input::mouse_canvas_px(ev, &canvas_move);
            st.borrow_mut().pointer_move(pos);
        }
    })?;

    let st = state.clone();
    listeners.add(target, EV_MOUSE_LEAVE, move |_ev| {
        let mut state = st.borrow_mut();
        state.pointer_leave();
        log::debug!("[pointer] left canvas, relaxing ({} tweens)", state.tweens().len());
    })?;

    Ok(())
}

fn wire_touch(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
    state: &Rc<RefCell<FieldState>>,
) -> anyhow::Result<()> {
    let target: &web::EventTarget = document.as_ref();

    let st = state.clone();
    let canvas_start = canvas.clone();
    listeners.add(target, EV_TOUCH_START, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let mut state = st.borrow_mut();
        match input::touch_canvas_px(ev, &canvas_start) {
            Some(pos) => state.touch_start(pos),
            None => state.pointer_enter(),
        }
    })?;

    let st = state.clone();
    let canvas_move = canvas.clone();
    listeners.add(target, EV_TOUCH_MOVE, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(pos) = input::touch_canvas_px(ev, &canvas_move) {
            st.borrow_mut().pointer_move(pos);
        }
    })?;

    let st = state.clone();
    listeners.add(target, EV_TOUCH_END, move |_ev| {
        st.borrow_mut().pointer_leave();
    })?;

    Ok(())
}
