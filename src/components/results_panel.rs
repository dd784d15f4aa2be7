use dioxus::prelude::*;

use crate::constants::*;

/// The results region revealed by the scanimate trigger. Presentation only;
/// the assembled animation would render here once a real pipeline exists.
#[component]
pub fn ResultsPanel(frame_count: usize) -> Element {
    rsx! {
        div {
            id: "results-section",
            style: "
                display: flex; flex-direction: column;
                width: {RESULTS_PANEL_WIDTH}px; min-width: {RESULTS_PANEL_WIDTH}px;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
            ",
            div {
                style: "
                    display: flex; align-items: center;
                    height: 32px; padding: 0 12px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Result"
                }
            }
            div {
                style: "
                    flex: 1; margin: 12px;
                    display: flex; flex-direction: column; align-items: center; justify-content: center;
                    gap: 8px;
                    background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; border-radius: 8px;
                    color: {TEXT_MUTED};
                ",
                span { style: "font-size: 28px;", "▶" }
                span { style: "font-size: 12px;", "Animation preview" }
                span { style: "font-size: 11px; color: {TEXT_DIM};", "{frame_count} frames in sequence" }
            }
        }
    }
}
