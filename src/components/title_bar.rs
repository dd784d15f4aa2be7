use dioxus::prelude::*;

use crate::constants::*;

#[component]
pub fn TitleBar() -> Element {
    let version = env!("CARGO_PKG_VERSION");
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {TITLE_BAR_HEIGHT}px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none; flex-shrink: 0;
            ",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                span {
                    style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};",
                    "Scanimate"
                }
                span {
                    style: "font-size: 11px; color: {TEXT_DIM};",
                    "stop-motion capture"
                }
            }
            span {
                style: "font-size: 11px; color: {TEXT_DIM};",
                "v{version}"
            }
        }
    }
}
