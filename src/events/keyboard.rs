use super::WebShowcase;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, showcase: &Rc<RefCell<WebShowcase>>) {
    if ev.repeat() {
        return;
    }
    let dispatch = showcase.borrow_mut().key(&ev.key());
    if !dispatch.handled().is_empty() {
        log::info!("[keys] {} handled", ev.key());
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(showcase: Rc<RefCell<WebShowcase>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &showcase);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
