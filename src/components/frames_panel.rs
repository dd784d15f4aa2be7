use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::FrameRowItem;
use crate::constants::*;
use crate::state::FrameRow;

/// The central frames region: the empty-state dropzone before any frames
/// exist, the scrollable row list afterwards. Which one renders is derived
/// from the row list itself.
#[component]
pub fn FramesPanel(
    rows: Vec<FrameRow>,
    selected: Option<Uuid>,
    on_select: EventHandler<Uuid>,
    on_remove: EventHandler<Uuid>,
) -> Element {
    rsx! {
        if rows.is_empty() {
            div {
                id: "frames-dropzone",
                style: "
                    flex: 1; margin: 12px;
                    display: flex; flex-direction: column; align-items: center; justify-content: center;
                    gap: 8px;
                    border: 1px dashed {BORDER_STRONG}; border-radius: 8px;
                    color: {TEXT_MUTED};
                ",
                span { style: "font-size: 28px;", "🎞" }
                span { style: "font-size: 13px;", "No frames yet" }
                span { style: "font-size: 11px; color: {TEXT_DIM};", "Use \"Add frames\" to capture a batch" }
            }
        } else {
            div {
                id: "frames-list",
                style: "flex: 1; overflow-y: auto; padding: 8px 12px;",
                for row in rows.iter() {
                    FrameRowItem {
                        key: "{row.id}",
                        frame: row.clone(),
                        selected: selected == Some(row.id),
                        on_select: move |id| on_select.call(id),
                        on_remove: move |id| on_remove.call(id),
                    }
                }
            }
        }
    }
}
