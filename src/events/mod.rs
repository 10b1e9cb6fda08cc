pub mod keyboard;
pub mod pointer;

use armory_core::Showcase;

use crate::audio::HtmlMediaChannel;

pub type WebShowcase = Showcase<HtmlMediaChannel, HtmlMediaChannel>;
