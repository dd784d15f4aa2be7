//! Capture session state.
//!
//! `SessionState` is the single owner of everything the window shows: the
//! frame library, the clear-confirmation overlay, and whether the scanimate
//! results have been revealed. Click handlers call the transition methods
//! below; the view layer renders a projection of this struct and nothing
//! else. Control enablement, list visibility, and the dropzone are all
//! derived from "the library is non-empty" rather than toggled imperatively.

use uuid::Uuid;

use crate::capture::CapturedFrame;
use crate::state::{FrameLibrary, OverlayState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub frames: FrameLibrary,
    pub clear_overlay: OverlayState,
    results_revealed: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one acquired batch to the library.
    pub fn add_frames(&mut self, batch: Vec<CapturedFrame>) {
        self.frames.append_batch(batch);
    }

    /// Mark a single row as selected, clearing any prior selection.
    pub fn select_frame(&mut self, id: Uuid) {
        self.frames.select(id);
    }

    /// Detach one row. Unknown ids are a no-op.
    pub fn remove_frame(&mut self, id: Uuid) {
        self.frames.remove(id);
    }

    /// Open the clear-confirmation overlay. The library is untouched until
    /// the user confirms.
    pub fn request_clear(&mut self) {
        self.clear_overlay.open();
    }

    /// Confirm a pending clear: detach every row and close the overlay.
    /// Ignored when the overlay is not open.
    pub fn confirm_clear(&mut self) {
        if !self.clear_overlay.is_open() {
            return;
        }
        self.frames.clear();
        self.clear_overlay.close();
    }

    /// Close the overlay without touching the library.
    pub fn dismiss_overlay(&mut self) {
        self.clear_overlay.close();
    }

    /// Reveal the results region and retire the scanimate trigger. Ignored
    /// while the library is empty; sticky once revealed.
    pub fn start_scanimate(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        self.results_revealed = true;
    }

    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    /// Clear/show/scanimate are usable exactly while frames exist.
    pub fn controls_enabled(&self) -> bool {
        !self.frames.is_empty()
    }

    /// The empty-state dropzone shows exactly while no frames exist.
    #[allow(dead_code)]
    pub fn dropzone_visible(&self) -> bool {
        self.frames.is_empty()
    }

    /// The scanimate trigger renders until the results take its place.
    pub fn scanimate_visible(&self) -> bool {
        !self.results_revealed
    }
}
