use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::constants::*;

#[component]
pub fn StatusBar(
    frame_count: usize,
    selected_name: Option<String>,
    last_capture: Option<DateTime<Utc>>,
) -> Element {
    let status = if frame_count == 0 {
        "Ready".to_string()
    } else if frame_count == 1 {
        "1 frame".to_string()
    } else {
        format!("{} frames", frame_count)
    };
    let capture_label = last_capture.map(|ts| ts.format("%H:%M:%S UTC").to_string());

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {STATUS_BAR_HEIGHT}px; padding: 0 14px;
                background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT};
                font-size: 11px; color: {TEXT_DIM}; flex-shrink: 0;
            ",
            span { "{status}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                if let Some(name) = selected_name {
                    span { "{name}" }
                }
                if let Some(ts) = capture_label {
                    span { "captured {ts}" }
                }
            }
        }
    }
}
