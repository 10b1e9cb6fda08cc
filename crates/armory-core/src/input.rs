//! Maps raw clicks and key presses onto view transitions and audio cues.
//!
//! Each DOM event becomes one [`EventDispatch`]: the target handler runs
//! first, then the root (background) handler unless the target stopped
//! propagation. A dispatch remembers which handlers already ran, so a handler
//! reached twice within the same event does nothing the second time.

use crate::audio::{AudioCueController, MediaChannel};
use crate::state::{ViewEvent, ViewMode, ViewStateMachine};
use smallvec::SmallVec;

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Background,
    Object,
    InspectButton,
    ExitButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    Background,
    Object,
    InspectButton,
    ExitButton,
    Escape,
}

#[derive(Clone, Debug)]
pub struct EventDispatch {
    id: u64,
    propagation_stopped: bool,
    handled: SmallVec<[Handler; 4]>,
}

impl EventDispatch {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            propagation_stopped: false,
            handled: SmallVec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[inline]
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Record `handler` as run. False if it already ran in this dispatch.
    pub fn mark(&mut self, handler: Handler) -> bool {
        if self.handled.contains(&handler) {
            return false;
        }
        self.handled.push(handler);
        true
    }

    pub fn handled(&self) -> &[Handler] {
        &self.handled
    }
}

/// Buttons only accept clicks while interactive. The inspect button fades out
/// with its layer and the exit button is hidden, so a click on either outside
/// its mode falls through to the background.
#[inline]
pub fn resolve_target(target: PointerTarget, mode: ViewMode) -> PointerTarget {
    match (target, mode) {
        (PointerTarget::InspectButton, ViewMode::Inspecting) => PointerTarget::Background,
        (PointerTarget::ExitButton, ViewMode::Presenting) => PointerTarget::Background,
        (t, _) => t,
    }
}

/// The object toggles: enter inspection from presenting, leave it otherwise.
#[inline]
pub fn object_click_event(mode: ViewMode) -> ViewEvent {
    match mode {
        ViewMode::Presenting => ViewEvent::ToggleInspect,
        ViewMode::Inspecting => ViewEvent::Exit,
    }
}

#[inline]
pub fn is_cancel_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

#[derive(Debug, Default)]
pub struct InputRouter {
    next_id: u64,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_dispatch(&mut self) -> EventDispatch {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        EventDispatch::new(id)
    }

    /// Route one click through target and root phases.
    pub fn dispatch_click<A: MediaChannel, C: MediaChannel>(
        &mut self,
        target: PointerTarget,
        machine: &mut ViewStateMachine,
        audio: &mut AudioCueController<A, C>,
    ) -> EventDispatch {
        let mut dispatch = self.begin_dispatch();
        let target = resolve_target(target, machine.mode());
        self.on_target(&mut dispatch, target, machine, audio);
        if !dispatch.propagation_stopped() {
            self.on_root(&mut dispatch, audio);
        }
        dispatch
    }

    /// Target phase of a click.
    pub fn on_target<A: MediaChannel, C: MediaChannel>(
        &self,
        dispatch: &mut EventDispatch,
        target: PointerTarget,
        machine: &mut ViewStateMachine,
        audio: &mut AudioCueController<A, C>,
    ) {
        match target {
            PointerTarget::Background => {}
            PointerTarget::Object => {
                if dispatch.mark(Handler::Object) {
                    let event = object_click_event(machine.mode());
                    machine.transition(event, audio);
                }
            }
            PointerTarget::InspectButton => {
                dispatch.stop_propagation();
                if dispatch.mark(Handler::InspectButton) {
                    machine.transition(ViewEvent::ToggleInspect, audio);
                }
            }
            PointerTarget::ExitButton => {
                dispatch.stop_propagation();
                if dispatch.mark(Handler::ExitButton) {
                    machine.transition(ViewEvent::Exit, audio);
                }
            }
        }
    }

    /// Root phase: any click reaching the page starts the ambient bed.
    pub fn on_root<A: MediaChannel, C: MediaChannel>(
        &self,
        dispatch: &mut EventDispatch,
        audio: &mut AudioCueController<A, C>,
    ) {
        if dispatch.mark(Handler::Background) {
            audio.start_ambience();
        }
    }

    /// Global keydown. Only the cancel key while inspecting does anything.
    pub fn dispatch_key<A: MediaChannel, C: MediaChannel>(
        &mut self,
        key: &str,
        machine: &mut ViewStateMachine,
        audio: &mut AudioCueController<A, C>,
    ) -> EventDispatch {
        let mut dispatch = self.begin_dispatch();
        if is_cancel_key(key)
            && machine.mode() == ViewMode::Inspecting
            && dispatch.mark(Handler::Escape)
        {
            machine.transition(ViewEvent::Exit, audio);
        }
        dispatch
    }
}
