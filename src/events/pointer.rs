use super::WebShowcase;
use crate::constants::{CANVAS_ID, EXIT_BUTTON_ID, INSPECT_BUTTON_ID, PICK_RADIUS_LOCAL};
use crate::dom;
use crate::picking::{self, CameraRig};
use armory_core::{FrameState, PointerTarget};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub root: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub showcase: Rc<RefCell<WebShowcase>>,
    pub last_frame: Rc<Cell<Option<FrameState>>>,
    pub camera: CameraRig,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_click(&w);
}

#[inline]
fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    (sx, sy)
}

/// Pointer position as a fraction of the canvas; unclamped so drags may
/// leave the canvas.
#[inline]
fn pointer_canvas_fraction(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (ev.client_x() as f32 - rect.left() as f32) / w,
            (ev.client_y() as f32 - rect.top() as f32) / h,
        )
    } else {
        Vec2::splat(0.5)
    }
}

fn object_under_pointer(ev: &web::MouseEvent, w: &InputWiring) -> bool {
    let Some(state) = w.last_frame.get() else {
        return false;
    };
    let size = (w.canvas.width() as f32, w.canvas.height() as f32);
    let pixel = pointer_canvas_px(ev, &w.canvas);
    let radius = PICK_RADIUS_LOCAL * state.transform.scale;
    picking::hits_object(&w.camera, size, pixel, state.object_center(), radius)
}

fn resolve_click_target(ev: &web::MouseEvent, w: &InputWiring) -> PointerTarget {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return PointerTarget::Background;
    };
    if dom::within(&el, EXIT_BUTTON_ID) {
        PointerTarget::ExitButton
    } else if dom::within(&el, INSPECT_BUTTON_ID) {
        PointerTarget::InspectButton
    } else if dom::within(&el, CANVAS_ID) && object_under_pointer(ev, w) {
        PointerTarget::Object
    } else {
        PointerTarget::Background
    }
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = pointer_canvas_fraction(&ev, &w.canvas);
        w.showcase.borrow_mut().pointer_down(pos);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let pos = pointer_canvas_fraction(&ev, &w.canvas);
        w.showcase.borrow_mut().pointer_move(pos);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        if let Some(gesture) = w.showcase.borrow_mut().pointer_up() {
            log::debug!("[pointer] {:?}", gesture);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// One delegated listener per click keeps a single dispatch per DOM event.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let root = w.root.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = resolve_click_target(&ev, &w);
        let dispatch = w.showcase.borrow_mut().click(target);
        log::info!("[click] {:?} -> {:?}", target, dispatch.handled());
        if dispatch.propagation_stopped() {
            ev.stop_propagation();
        }
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
