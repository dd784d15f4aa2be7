use dioxus::prelude::*;

use crate::constants::*;

/// Confirmation dialog for clearing the frame list. Clicking the backdrop
/// or the cancel control dismisses; clicks inside the inner panel stop
/// propagation so they never reach the backdrop handler.
#[component]
pub fn ClearOverlay(
    show: bool,
    frame_count: usize,
    on_confirm: EventHandler<MouseEvent>,
    on_dismiss: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        if show {
            div {
                id: "frames-clear-overlay",
                class: "overlay",
                style: "
                    position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                    background-color: rgba(0, 0, 0, 0.5);
                    display: flex; align-items: center; justify-content: center;
                    z-index: 2000;
                ",
                onclick: move |e| on_dismiss.call(e),
                div {
                    style: "
                        width: 360px; background-color: {BG_ELEVATED};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;
                        padding: 24px; box-shadow: 0 10px 25px rgba(0,0,0,0.5);
                    ",
                    onclick: move |e| e.stop_propagation(),

                    h3 {
                        style: "margin: 0 0 8px 0; font-size: 16px; color: {TEXT_PRIMARY};",
                        "Clear all frames?"
                    }
                    p {
                        style: "margin: 0 0 20px 0; font-size: 12px; color: {TEXT_SECONDARY};",
                        "This detaches all {frame_count} frames from the list. There is no undo."
                    }
                    div {
                        style: "display: flex; justify-content: flex-end; gap: 8px;",
                        button {
                            class: "overlay-close",
                            style: "
                                padding: 8px 14px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                                background-color: {BG_SURFACE}; color: {TEXT_SECONDARY}; font-size: 12px;
                                cursor: pointer;
                            ",
                            onclick: move |e| on_dismiss.call(e),
                            "Cancel"
                        }
                        button {
                            id: "frames-clear-yes",
                            style: "
                                padding: 8px 14px; border: none; border-radius: 4px;
                                background-color: {ACCENT_DANGER}; color: white; font-size: 12px;
                                cursor: pointer;
                            ",
                            onclick: move |e| on_confirm.call(e),
                            "Clear all"
                        }
                    }
                }
            }
        }
    }
}
