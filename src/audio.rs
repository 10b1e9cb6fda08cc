use armory_core::{AudioError, MediaChannel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `<audio>` element exposed as a [`MediaChannel`].
///
/// `play()` resolves asynchronously; a later rejection is caught by a
/// shared no-op handler so it never surfaces as an unhandled promise.
pub struct HtmlMediaChannel {
    el: web::HtmlAudioElement,
    swallow: Closure<dyn FnMut(JsValue)>,
}

impl HtmlMediaChannel {
    pub fn new(el: web::HtmlAudioElement, looping: bool) -> Self {
        el.set_loop(looping);
        Self {
            el,
            swallow: Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>),
        }
    }

    /// Use the page's `<audio id=..>` if present, otherwise create one for `src`.
    pub fn from_page(
        document: &web::Document,
        element_id: &str,
        src: &str,
        looping: bool,
    ) -> anyhow::Result<Self> {
        let existing = document
            .get_element_by_id(element_id)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        let el = match existing {
            Some(el) => el,
            None => web::HtmlAudioElement::new_with_src(src)
                .map_err(|e| anyhow::anyhow!("audio element {}: {:?}", src, e))?,
        };
        Ok(Self::new(el, looping))
    }
}

impl MediaChannel for HtmlMediaChannel {
    fn play(&mut self) -> Result<(), AudioError> {
        match self.el.play() {
            Ok(promise) => {
                _ = promise.catch(&self.swallow);
                Ok(())
            }
            Err(e) => Err(AudioError::PlaybackBlocked(format!("{:?}", e))),
        }
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.el.set_current_time(seconds);
    }

    fn set_volume(&mut self, volume: f32) {
        self.el.set_volume(volume as f64);
    }

    fn paused(&self) -> bool {
        self.el.paused()
    }
}
