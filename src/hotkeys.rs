//! Global shortcut registration — the trigger surface.
//!
//! Four system-wide hotkeys, Super on macOS and Control elsewhere, each
//! mapped to one controller trigger. Only key-press events dispatch; each
//! dispatch spawns an async task so a slow capture or network call never
//! blocks the event loop.

use std::sync::Arc;

use tauri::Manager;
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};

use crate::controller::Trigger;
use crate::AppController;

fn primary_modifiers() -> Modifiers {
    #[cfg(target_os = "macos")]
    {
        Modifiers::SUPER | Modifiers::SHIFT
    }
    #[cfg(not(target_os = "macos"))]
    {
        Modifiers::CONTROL | Modifiers::SHIFT
    }
}

/// The four hotkey bindings.
pub fn shortcut_bindings() -> [(Shortcut, Trigger); 4] {
    let mods = Some(primary_modifiers());
    [
        (Shortcut::new(mods, Code::KeyS), Trigger::Finalize),
        (Shortcut::new(mods, Code::KeyA), Trigger::AddFrame),
        (Shortcut::new(mods, Code::KeyR), Trigger::Reset),
        (Shortcut::new(mods, Code::KeyH), Trigger::ToggleVisibility),
    ]
}

pub fn trigger_for(shortcut: &Shortcut) -> Option<Trigger> {
    shortcut_bindings()
        .into_iter()
        .find(|(bound, _)| bound == shortcut)
        .map(|(_, trigger)| trigger)
}

/// Registers all bindings with the OS. Called once from setup, after the
/// overlay window exists.
pub fn register_all(
    app: &tauri::AppHandle,
) -> Result<(), tauri_plugin_global_shortcut::Error> {
    for (shortcut, trigger) in shortcut_bindings() {
        app.global_shortcut().register(shortcut)?;
        log::info!("Registered {shortcut:?} for {trigger:?}");
    }
    Ok(())
}

/// Plugin callback: maps the shortcut to its trigger and hands it to the
/// controller on the async runtime.
pub fn handle_shortcut_event(app: &tauri::AppHandle, shortcut: &Shortcut, state: ShortcutState) {
    if state != ShortcutState::Pressed {
        return;
    }
    let Some(trigger) = trigger_for(shortcut) else {
        return;
    };

    let controller = app.state::<Arc<AppController>>().inner().clone();
    tauri::async_runtime::spawn(async move {
        controller.handle(trigger).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trigger_has_a_binding() {
        let triggers: Vec<Trigger> = shortcut_bindings().into_iter().map(|(_, t)| t).collect();
        assert!(triggers.contains(&Trigger::Finalize));
        assert!(triggers.contains(&Trigger::AddFrame));
        assert!(triggers.contains(&Trigger::Reset));
        assert!(triggers.contains(&Trigger::ToggleVisibility));
    }

    #[test]
    fn bindings_are_distinct() {
        let bindings = shortcut_bindings();
        for (i, (a, _)) in bindings.iter().enumerate() {
            for (b, _) in bindings.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn lookup_maps_back_to_the_trigger() {
        for (shortcut, trigger) in shortcut_bindings() {
            assert_eq!(trigger_for(&shortcut), Some(trigger));
        }
    }

    #[test]
    fn unbound_shortcut_maps_to_none() {
        let other = Shortcut::new(Some(primary_modifiers()), Code::KeyZ);
        assert_eq!(trigger_for(&other), None);
    }
}
