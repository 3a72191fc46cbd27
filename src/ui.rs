//! Outbound UI channel — one-way, fire-and-forget notifications from the
//! controller to the overlay window, plus surface visibility control.

use tauri::{AppHandle, Emitter, Manager};

use crate::controller::UiPort;

/// Label of the overlay window.
pub const MAIN_WINDOW: &str = "main";

/// One-way notifications the controller sends to the presentation layer.
///
/// No acknowledgment is expected; emission failures are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Instruction(String),
    HideInstruction,
    Error(String),
    AnalysisResult(String),
    ClearResult,
}

impl UiEvent {
    /// Event channel name the overlay frontend listens on.
    pub fn channel(&self) -> &'static str {
        match self {
            UiEvent::Instruction(_) => "update-instruction",
            UiEvent::HideInstruction => "hide-instruction",
            UiEvent::Error(_) => "error",
            UiEvent::AnalysisResult(_) => "analysis-result",
            UiEvent::ClearResult => "clear-result",
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            UiEvent::Instruction(text) | UiEvent::Error(text) | UiEvent::AnalysisResult(text) => {
                Some(text)
            }
            UiEvent::HideInstruction | UiEvent::ClearResult => None,
        }
    }
}

/// Production UI port: emits Tauri events to the overlay window and
/// drives its visibility.
pub struct TauriUi {
    app: AppHandle,
}

impl TauriUi {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn window(&self) -> Option<tauri::WebviewWindow> {
        self.app.get_webview_window(MAIN_WINDOW)
    }
}

impl UiPort for TauriUi {
    fn notify(&self, event: UiEvent) {
        let channel = event.channel();
        let result = match event.payload() {
            Some(text) => self.app.emit(channel, text),
            None => self.app.emit(channel, ()),
        };
        if let Err(e) = result {
            log::warn!("Failed to emit {channel}: {e}");
        }
    }

    fn hide_surface(&self) {
        if let Some(window) = self.window() {
            if let Err(e) = window.hide() {
                log::warn!("Failed to hide overlay: {e}");
            }
        }
    }

    fn show_surface(&self) {
        if let Some(window) = self.window() {
            if let Err(e) = window.show() {
                log::warn!("Failed to show overlay: {e}");
            }
        }
    }

    fn toggle_surface(&self) {
        let Some(window) = self.window() else {
            return;
        };
        match window.is_visible() {
            Ok(true) => {
                if let Err(e) = window.hide() {
                    log::warn!("Failed to hide overlay: {e}");
                }
            }
            // If visibility can't be read, err on the side of showing
            Ok(false) | Err(_) => {
                if let Err(e) = window.show() {
                    log::warn!("Failed to show overlay: {e}");
                }
            }
        }
    }
}
