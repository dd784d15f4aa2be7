//! Scanimate
//!
//! A prototype desktop shell for a stop-motion scan-and-animate workflow.

mod app;
mod capture;
mod components;
mod constants;
mod hotkeys;
mod state;

use std::path::Path;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::state::{AppSettings, SETTINGS_FILE};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scanimate=info")),
        )
        .init();

    info!("Scanimate {} starting", env!("CARGO_PKG_VERSION"));

    let settings = AppSettings::load_or_default(Path::new(SETTINGS_FILE));

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Scanimate")
                .with_inner_size(LogicalSize::new(
                    settings.window_width,
                    settings.window_height,
                ))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
