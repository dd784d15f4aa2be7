//! Frame library state.
//!
//! The library owns the ordered list of frame rows plus the current
//! selection. Rows are keyed by a generated id rather than list position, so
//! selection and removal stay valid as the list shifts.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::capture::CapturedFrame;

/// A single captured frame shown in the frames list.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow {
    /// Stable identity, independent of list position.
    pub id: Uuid,
    /// 1-based sequence index assigned by the frame source.
    pub index: u32,
    /// User-facing display name.
    pub name: String,
    /// When the frame was acquired.
    pub captured_at: DateTime<Utc>,
}

impl FrameRow {
    pub fn from_captured(frame: CapturedFrame) -> Self {
        Self {
            id: Uuid::new_v4(),
            index: frame.index,
            name: frame.name,
            captured_at: frame.captured_at,
        }
    }
}

/// Ordered collection of frame rows with at most one selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLibrary {
    rows: Vec<FrameRow>,
    selected: Option<Uuid>,
}

impl FrameLibrary {
    pub fn rows(&self) -> &[FrameRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// Return the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&FrameRow> {
        let id = self.selected?;
        self.rows.iter().find(|row| row.id == id)
    }

    /// Append a batch of captured frames in delivery order.
    pub fn append_batch(&mut self, batch: Vec<CapturedFrame>) {
        self.rows
            .extend(batch.into_iter().map(FrameRow::from_captured));
    }

    /// Replace the selection with a single row. Unknown ids are ignored.
    pub fn select(&mut self, id: Uuid) {
        if self.rows.iter().any(|row| row.id == id) {
            self.selected = Some(id);
        }
    }

    /// Remove a row, if present. Removing the selected row clears the
    /// selection; removing any other row leaves it untouched.
    pub fn remove(&mut self, id: Uuid) {
        self.rows.retain(|row| row.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Remove every row and drop the selection.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
    }

    /// Timestamp of the most recently acquired frame.
    pub fn last_captured_at(&self) -> Option<DateTime<Utc>> {
        self.rows.iter().map(|row| row.captured_at).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{FrameSource, MockFrameSource};

    fn library_with_batch(count: u32) -> FrameLibrary {
        let mut library = FrameLibrary::default();
        library.append_batch(MockFrameSource::new(count).acquire_batch());
        library
    }

    #[test]
    fn test_append_keeps_delivery_order() {
        let library = library_with_batch(6);
        let names: Vec<&str> = library.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "frame-001.png",
                "frame-002.png",
                "frame-003.png",
                "frame-004.png",
                "frame-005.png",
                "frame-006.png",
            ]
        );
    }

    #[test]
    fn test_repeated_batches_accumulate_without_dedup() {
        let mut library = library_with_batch(6);
        library.append_batch(MockFrameSource::new(6).acquire_batch());
        assert_eq!(library.len(), 12);
        assert_eq!(library.rows()[0].name, library.rows()[6].name);
    }

    #[test]
    fn test_single_selection_last_click_wins() {
        let mut library = library_with_batch(3);
        let a = library.rows()[0].id;
        let b = library.rows()[1].id;
        library.select(a);
        library.select(b);
        assert_eq!(library.selected(), Some(b));
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut library = library_with_batch(3);
        let a = library.rows()[0].id;
        library.select(a);
        library.select(Uuid::new_v4());
        assert_eq!(library.selected(), Some(a));
    }

    #[test]
    fn test_remove_preserves_order_and_names() {
        let mut library = library_with_batch(4);
        let second = library.rows()[1].id;
        library.remove(second);
        let names: Vec<&str> = library.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["frame-001.png", "frame-003.png", "frame-004.png"]
        );
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut library = library_with_batch(3);
        let a = library.rows()[0].id;
        library.select(a);
        library.remove(a);
        assert_eq!(library.selected(), None);
    }

    #[test]
    fn test_remove_other_row_keeps_selection() {
        let mut library = library_with_batch(3);
        let a = library.rows()[0].id;
        let b = library.rows()[1].id;
        library.select(a);
        library.remove(b);
        assert_eq!(library.selected(), Some(a));
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut library = library_with_batch(3);
        let a = library.rows()[0].id;
        library.remove(a);
        library.remove(a);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_clear_drops_rows_and_selection() {
        let mut library = library_with_batch(6);
        let a = library.rows()[0].id;
        library.select(a);
        library.clear();
        assert!(library.is_empty());
        assert_eq!(library.selected(), None);
    }
}
