use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::*;
use crate::state::FrameRow;

#[component]
pub fn FrameRowItem(
    frame: FrameRow,
    selected: bool,
    on_select: EventHandler<Uuid>,
    on_remove: EventHandler<Uuid>,
) -> Element {
    let frame_id = frame.id;
    let row_class = if selected { "row selected" } else { "row" };
    let border = if selected { ACCENT_SELECTED } else { BORDER_SUBTLE };

    rsx! {
        div {
            class: "{row_class}",
            style: "
                display: flex; align-items: center; gap: 10px;
                padding: 6px 10px; margin-bottom: 4px;
                background-color: {BG_SURFACE}; border: 1px solid {border};
                border-radius: 4px; cursor: pointer; user-select: none;
                transition: background-color 0.1s ease;
            ",
            onclick: move |_| on_select.call(frame_id),

            span {
                class: "index",
                style: "
                    min-width: 22px; text-align: right;
                    font-size: 11px; color: {TEXT_DIM};
                    font-family: 'SF Mono', Consolas, monospace;
                ",
                "{frame.index}"
            }
            span {
                class: "name",
                style: "
                    flex: 1; min-width: 0; font-size: 12px; color: {TEXT_PRIMARY};
                    overflow: hidden; text-overflow: ellipsis; white-space: nowrap;
                ",
                "{frame.name}"
            }
            button {
                class: "remove",
                style: "
                    width: 20px; height: 20px; border: none; border-radius: 4px;
                    background: transparent; color: {TEXT_MUTED}; font-size: 11px;
                    cursor: pointer; display: flex; align-items: center; justify-content: center;
                ",
                onclick: move |e| {
                    e.stop_propagation();
                    on_remove.call(frame_id);
                },
                "✕"
            }
        }
    }
}
