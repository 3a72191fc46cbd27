//! Glimpse — Tauri application entry point.
//!
//! This is the app shell that wires together:
//! - Startup configuration (config.rs) — fatal if the credential is missing
//! - The transparent always-on-top overlay window
//! - Global hotkeys (hotkeys.rs) driving the session controller
//! - Screen capture (capture/) and inference submission (llm/)

pub mod capture;
pub mod config;
pub mod controller;
pub mod hotkeys;
pub mod llm;
pub mod session;
pub mod ui;

use std::sync::Arc;

use tauri::{Emitter, Manager};

/// The controller with its production ports plugged in.
pub type AppController =
    controller::Controller<capture::PrimaryMonitorSource, llm::AnthropicClient, ui::TauriUi>;

/// Entry point — called by the Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();
    let _ = dotenvy::dotenv();

    // Resolve config before any window or hotkey exists; a missing
    // credential aborts startup.
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .plugin(
            tauri_plugin_global_shortcut::Builder::new()
                .with_handler(|app, shortcut, event| {
                    hotkeys::handle_shortcut_event(app, shortcut, event.state());
                })
                .build(),
        )
        .setup(move |app| {
            log::info!("Glimpse starting up");

            let window = tauri::WebviewWindowBuilder::new(
                app,
                ui::MAIN_WINDOW,
                tauri::WebviewUrl::App("index.html".into()),
            )
            .title("Glimpse")
            .inner_size(800.0, 600.0)
            .transparent(true)
            .decorations(false)
            .always_on_top(true)
            .skip_taskbar(true)
            .content_protected(true)
            .visible_on_all_workspaces(true)
            .build()?;

            let controller = Arc::new(controller::Controller::new(
                capture::PrimaryMonitorSource,
                llm::AnthropicClient::new(&config),
                ui::TauriUi::new(app.handle().clone()),
            ));
            app.manage(controller);

            hotkeys::register_all(app.handle())?;
            window.emit("update-instruction", controller::DEFAULT_INSTRUCTION)?;

            log::info!("Hotkeys registered — ready");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running Glimpse");
}
