//! Root application component
//!
//! This defines the main App component and the overall layout structure.
//! All mutable state lives in the `SessionState` signal; the markup below is
//! a projection of it, and click handlers call its transition methods.

use std::path::Path;

use dioxus::prelude::*;
use tracing::{debug, info};

use crate::capture::{FrameSource, MockFrameSource};
use crate::components::{
    ClearOverlay, FramesPanel, ResultsPanel, StatusBar, TitleBar, Toolbar,
};
use crate::constants::*;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{AppSettings, SessionState, SETTINGS_FILE};

/// Main application component
#[component]
pub fn App() -> Element {
    let settings = use_signal(|| AppSettings::load_or_default(Path::new(SETTINGS_FILE)));
    let mut session = use_signal(SessionState::new);
    let mut source = use_signal(move || MockFrameSource::new(settings.peek().capture_batch_size));

    // Projections rendered this frame.
    let rows = session.read().frames.rows().to_vec();
    let frame_count = rows.len();
    let selected = session.read().frames.selected();
    let selected_name = session.read().frames.selected_row().map(|row| row.name.clone());
    let last_capture = session.read().frames.last_captured_at();
    let controls_enabled = session.read().controls_enabled();
    let scanimate_visible = session.read().scanimate_visible();
    let results_revealed = session.read().results_revealed();
    let overlay_open = session.read().clear_overlay.is_open();

    rsx! {
        // Global CSS. Inline styles win over class rules, hence the
        // !important on the hover overrides.
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .toolbar-btn {{ transition: background-color 0.15s ease, opacity 0.15s ease; }}
            .toolbar-btn:disabled {{ opacity: 0.4; cursor: default; }}
            .toolbar-btn:not(:disabled):hover {{ background-color: {BG_HOVER} !important; }}
            .row:hover {{ background-color: {BG_HOVER} !important; }}
            .row .remove {{ opacity: 0.6; transition: opacity 0.15s ease; }}
            .row .remove:hover {{ opacity: 1; color: {ACCENT_DANGER} !important; }}
            "#
        }

        // Main app container
        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
            ",
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    overlay_open: session.read().clear_overlay.is_open(),
                    has_selection: session.read().frames.selected().is_some(),
                    input_focused: false,
                };

                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::RemoveSelectedFrame => {
                                let selected = session.read().frames.selected();
                                if let Some(id) = selected {
                                    session.write().remove_frame(id);
                                }
                            }
                            HotkeyAction::DismissOverlay => {
                                session.write().dismiss_overlay();
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {}

            Toolbar {
                controls_enabled: controls_enabled,
                scanimate_visible: scanimate_visible,
                on_add: move |_| {
                    let batch = source.write().acquire_batch();
                    debug!("captured batch of {} frames", batch.len());
                    session.write().add_frames(batch);
                },
                on_clear: move |_| session.write().request_clear(),
                on_scanimate: move |_| {
                    info!("scanimate started over {} frames", session.read().frames.len());
                    session.write().start_scanimate();
                },
            }

            div {
                style: "display: flex; flex-direction: row; flex: 1; overflow: hidden;",

                div {
                    style: "display: flex; flex-direction: column; flex: 1; overflow: hidden;",
                    FramesPanel {
                        rows: rows,
                        selected: selected,
                        on_select: move |id| session.write().select_frame(id),
                        on_remove: move |id| session.write().remove_frame(id),
                    }
                }

                if results_revealed {
                    ResultsPanel { frame_count: frame_count }
                }
            }

            StatusBar {
                frame_count: frame_count,
                selected_name: selected_name,
                last_capture: last_capture,
            }

            ClearOverlay {
                show: overlay_open,
                frame_count: frame_count,
                on_confirm: move |_| session.write().confirm_clear(),
                on_dismiss: move |_| session.write().dismiss_overlay(),
            }
        }
    }
}
