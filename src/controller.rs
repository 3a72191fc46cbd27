//! Session controller — turns hotkey triggers into capture/submit cycles.
//!
//! One controller instance owns the session and the phase guard. Each
//! trigger runs as one async task; the phase guard serializes them by
//! rejecting finalize/add-frame triggers that arrive while a capture or
//! submission is already in flight (busy rejection, not queueing).

use std::sync::Mutex;
use std::time::Duration;

use crate::capture::{CaptureError, CapturedFrame};
use crate::llm::SubmitError;
use crate::session::Session;
use crate::ui::UiEvent;

/// Settle delay between hiding the overlay and grabbing the frame,
/// so the compositor has redrawn without it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

#[cfg(target_os = "macos")]
pub const DEFAULT_INSTRUCTION: &str =
    "Cmd+Shift+S: Screenshot | Cmd+Shift+A: Multi-mode | Cmd+Shift+R: Reset | Cmd+Shift+H: Toggle visibility";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_INSTRUCTION: &str =
    "Ctrl+Shift+S: Screenshot | Ctrl+Shift+A: Multi-mode | Ctrl+Shift+R: Reset | Ctrl+Shift+H: Toggle visibility";

#[cfg(target_os = "macos")]
pub const MULTI_MODE_INSTRUCTION: &str = "Multi-mode: Cmd+Shift+A to add, Cmd+Shift+S to finalize";
#[cfg(not(target_os = "macos"))]
pub const MULTI_MODE_INSTRUCTION: &str = "Multi-mode: Ctrl+Shift+A to add, Ctrl+Shift+S to finalize";

pub const BUSY_MESSAGE: &str = "Busy: a capture or analysis is already in flight";

/// External trigger events, one per global hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Finalize,
    AddFrame,
    Reset,
    ToggleVisibility,
}

/// Where the controller currently is in the workflow.
///
/// `Idle` exists only before hotkey registration, so it has no variant
/// here — a constructed controller is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Armed,
    Capturing,
    Submitting,
}

/// Produces one frame per call. May suspend while the OS renders it.
#[allow(async_fn_in_trait)]
pub trait FrameSource: Send + Sync {
    async fn capture(&self) -> Result<CapturedFrame, CaptureError>;
}

/// Sends the accumulated frames out for inference. Suspends on network I/O.
#[allow(async_fn_in_trait)]
pub trait Submitter: Send + Sync {
    async fn submit(&self, frames: &[CapturedFrame]) -> Result<String, SubmitError>;
}

/// Fire-and-forget notifications plus presentation-surface visibility.
pub trait UiPort: Send + Sync {
    fn notify(&self, event: UiEvent);
    fn hide_surface(&self);
    fn show_surface(&self);
    fn toggle_surface(&self);
}

pub struct Controller<F, S, U> {
    source: F,
    submitter: S,
    ui: U,
    session: Mutex<Session>,
    phase: Mutex<Phase>,
}

impl<F, S, U> Controller<F, S, U>
where
    F: FrameSource,
    S: Submitter,
    U: UiPort,
{
    pub fn new(source: F, submitter: S, ui: U) -> Self {
        Self {
            source,
            submitter,
            ui,
            session: Mutex::new(Session::new()),
            phase: Mutex::new(Phase::Armed),
        }
    }

    pub async fn handle(&self, trigger: Trigger) {
        log::debug!("Trigger: {trigger:?}");
        match trigger {
            Trigger::Finalize => self.finalize().await,
            Trigger::AddFrame => self.add_frame().await,
            Trigger::Reset => self.reset(),
            Trigger::ToggleVisibility => self.ui.toggle_surface(),
        }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap()
    }

    pub fn frame_count(&self) -> usize {
        self.session.lock().unwrap().len()
    }

    pub fn is_multi_frame(&self) -> bool {
        self.session.lock().unwrap().is_multi_frame()
    }

    /// Capture one frame, append it, and submit the whole session.
    /// The session stays populated afterwards — only an explicit reset
    /// starts a new one.
    async fn finalize(&self) {
        if !self.begin_capture() {
            return;
        }

        let frame = match self.capture_frame().await {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Capture failed: {e}");
                self.ui.notify(UiEvent::Error(e.to_string()));
                self.set_phase(Phase::Armed);
                return;
            }
        };

        let frames = {
            let mut session = self.session.lock().unwrap();
            session.append(frame);
            session.snapshot()
        };

        self.set_phase(Phase::Submitting);
        log::info!("Submitting {} frame(s) for analysis", frames.len());

        match self.submitter.submit(&frames).await {
            Ok(text) => self.ui.notify(UiEvent::AnalysisResult(text)),
            Err(e) => {
                // Session kept intact so the user can finalize again
                log::error!("Submission failed: {e}");
                self.ui.notify(UiEvent::Error(e.to_string()));
            }
        }

        self.set_phase(Phase::Armed);
    }

    /// Capture one frame and append it without submitting. First use
    /// flips the session into multi-frame mode and announces it before
    /// the capture happens.
    async fn add_frame(&self) {
        if !self.begin_capture() {
            return;
        }

        let newly_multi = {
            let mut session = self.session.lock().unwrap();
            if session.is_multi_frame() {
                false
            } else {
                session.set_multi_frame();
                true
            }
        };
        if newly_multi {
            self.ui
                .notify(UiEvent::Instruction(MULTI_MODE_INSTRUCTION.to_string()));
        }

        match self.capture_frame().await {
            Ok(frame) => {
                self.session.lock().unwrap().append(frame);
                self.ui
                    .notify(UiEvent::Instruction(MULTI_MODE_INSTRUCTION.to_string()));
            }
            Err(e) => {
                log::error!("Capture failed: {e}");
                self.ui.notify(UiEvent::Error(e.to_string()));
            }
        }

        self.set_phase(Phase::Armed);
    }

    /// Clears the session and restores the default banner. Reachable from
    /// any state and always succeeds; an in-flight submission finishes on
    /// its own snapshot.
    fn reset(&self) {
        self.session.lock().unwrap().reset();
        self.ui.notify(UiEvent::ClearResult);
        self.ui
            .notify(UiEvent::Instruction(DEFAULT_INSTRUCTION.to_string()));
        log::info!("Session reset");
    }

    /// Hide the surface, wait for the compositor to redraw, grab the frame,
    /// and re-show the surface on every exit path.
    async fn capture_frame(&self) -> Result<CapturedFrame, CaptureError> {
        self.ui.notify(UiEvent::HideInstruction);
        self.ui.hide_surface();
        tokio::time::sleep(SETTLE_DELAY).await;

        let result = self.source.capture().await;

        self.ui.show_surface();
        result
    }

    /// Armed -> Capturing, or busy rejection.
    fn begin_capture(&self) -> bool {
        let mut phase = self.phase.lock().unwrap();
        if *phase != Phase::Armed {
            let current = *phase;
            drop(phase);
            log::warn!("Trigger rejected while {current:?}");
            self.ui.notify(UiEvent::Error(BUSY_MESSAGE.to_string()));
            return false;
        }
        *phase = Phase::Capturing;
        true
    }

    fn set_phase(&self, phase: Phase) {
        *self.phase.lock().unwrap() = phase;
    }
}
