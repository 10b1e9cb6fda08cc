use crate::constants::{EXIT_BUTTON_ID, INSPECTING_CLASS, ROOT_ID, UI_LAYER_ID};
use crate::dom;
use crate::ui_state;
use armory_core::{FrameState, ViewMode};
use web_sys as web;

/// Tracks which view revision the page currently shows.
#[derive(Default)]
pub struct Overlay {
    applied_revision: Option<u64>,
}

impl Overlay {
    /// Push mode-dependent UI state to the page when the view changed.
    pub fn sync(&mut self, document: &web::Document, state: &FrameState) {
        if self.applied_revision == Some(state.revision) {
            return;
        }
        self.applied_revision = Some(state.revision);
        apply(document, state);
    }
}

pub fn apply(document: &web::Document, state: &FrameState) {
    let params = &state.params;
    if let Some(el) = document.get_element_by_id(UI_LAYER_ID) {
        _ = el.set_attribute("style", &ui_state::layer_style(params));
        _ = el.set_attribute("aria-hidden", ui_state::layer_aria_hidden(params));
    }
    if let Some(root) = document.get_element_by_id(ROOT_ID) {
        let cl = root.class_list();
        _ = match state.mode {
            ViewMode::Inspecting => cl.add_1(INSPECTING_CLASS),
            ViewMode::Presenting => cl.remove_1(INSPECTING_CLASS),
        };
    }
    let hidden = ui_state::hidden_buttons(state.mode);
    dom::set_hidden(document, EXIT_BUTTON_ID, hidden.contains(&EXIT_BUTTON_ID));
}
