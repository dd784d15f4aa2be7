use dioxus::prelude::*;

use crate::constants::*;

/// The control strip under the title bar. Enablement of the frame controls
/// is a projection of "frames exist"; nothing here toggles itself.
#[component]
pub fn Toolbar(
    controls_enabled: bool,
    scanimate_visible: bool,
    on_add: EventHandler<MouseEvent>,
    on_clear: EventHandler<MouseEvent>,
    on_scanimate: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 8px;
                height: {TOOLBAR_HEIGHT}px; padding: 0 12px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                flex-shrink: 0;
            ",

            button {
                id: "frames-add",
                class: "toolbar-btn",
                style: "
                    padding: 6px 14px; border: 1px solid {BORDER_STRONG}; border-radius: 4px;
                    background-color: {BG_ELEVATED}; color: {TEXT_PRIMARY}; font-size: 12px;
                    cursor: pointer;
                ",
                onclick: move |e| on_add.call(e),
                "Add frames"
            }
            button {
                id: "frames-clear",
                class: "toolbar-btn",
                style: "
                    padding: 6px 14px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    background-color: {BG_ELEVATED}; color: {TEXT_SECONDARY}; font-size: 12px;
                    cursor: pointer;
                ",
                disabled: !controls_enabled,
                onclick: move |e| on_clear.call(e),
                "Clear"
            }
            // Enabled state only; the prototype defines no click behavior
            // for this control.
            button {
                id: "frames-show",
                class: "toolbar-btn",
                style: "
                    padding: 6px 14px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    background-color: {BG_ELEVATED}; color: {TEXT_SECONDARY}; font-size: 12px;
                    cursor: pointer;
                ",
                disabled: !controls_enabled,
                "Show"
            }
            button {
                id: "settings-reset",
                class: "toolbar-btn",
                style: "
                    padding: 6px 14px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    background-color: {BG_ELEVATED}; color: {TEXT_SECONDARY}; font-size: 12px;
                    cursor: pointer;
                ",
                disabled: true,
                "Reset settings"
            }

            div { style: "flex: 1;" }

            if scanimate_visible {
                button {
                    id: "scanimate",
                    class: "toolbar-btn",
                    style: "
                        padding: 6px 18px; border: none; border-radius: 4px;
                        background-color: {ACCENT_CAPTURE}; color: white; font-size: 12px;
                        font-weight: 600; cursor: pointer;
                    ",
                    disabled: !controls_enabled,
                    onclick: move |e| on_scanimate.call(e),
                    "Scanimate"
                }
            }
        }
    }
}
