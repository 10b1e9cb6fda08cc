use crate::constants::EXIT_BUTTON_ID;
use armory_core::{PresentationParams, ViewMode};

/// Inline style for the overlay layer. The page's CSS transition animates
/// the opacity change, so the inspect button fades with its layer.
pub fn layer_style(params: &PresentationParams) -> String {
    format!(
        "opacity:{};pointer-events:{}",
        params.ui_opacity,
        if params.ui_interactive { "auto" } else { "none" }
    )
}

pub fn layer_aria_hidden(params: &PresentationParams) -> &'static str {
    if params.ui_interactive {
        "false"
    } else {
        "true"
    }
}

/// Buttons carrying the `hidden` attribute in `mode`. Only the exit button
/// toggles; the inspect button lives inside the fading layer.
pub fn hidden_buttons(mode: ViewMode) -> &'static [&'static str] {
    match mode {
        ViewMode::Presenting => &[EXIT_BUTTON_ID],
        ViewMode::Inspecting => &[],
    }
}
