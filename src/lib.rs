#![cfg(target_arch = "wasm32")]
use armory_core::{Showcase, ShowcaseConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod picking;
mod render;
mod ui_state;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn camera_rig() -> picking::CameraRig {
    picking::CameraRig {
        eye: CAMERA_EYE,
        fovy_radians: CAMERA_FOV_DEG.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("armory-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let root: web::Element = dom::element_by_id(&document, ROOT_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let ambient =
        audio::HtmlMediaChannel::from_page(&document, AMBIENT_AUDIO_ID, AMBIENT_AUDIO_SRC, true)?;
    let click =
        audio::HtmlMediaChannel::from_page(&document, CLICK_AUDIO_ID, CLICK_AUDIO_SRC, false)?;
    let config = ShowcaseConfig {
        float_seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
        ..ShowcaseConfig::default()
    };
    let showcase = Rc::new(RefCell::new(Showcase::new(&config, ambient, click)));
    let last_frame = Rc::new(Cell::new(None));
    let camera = camera_rig();

    events::keyboard::wire_global_keydown(showcase.clone());
    events::pointer::wire_input_handlers(events::pointer::InputWiring {
        root,
        canvas: canvas.clone(),
        showcase: showcase.clone(),
        last_frame: last_frame.clone(),
        camera,
    });

    let gpu = frame::init_gpu(&canvas, camera).await;

    let mut overlay = overlay::Overlay::default();
    // page reflects the initial mode before the first animation frame
    overlay.sync(&document, &showcase.borrow_mut().frame(0.0));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        showcase,
        last_frame,
        overlay,
        document,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
