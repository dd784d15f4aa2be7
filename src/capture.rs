//! Frame acquisition boundary.
//!
//! The UI never talks to capture hardware directly. It consumes the
//! [`FrameSource`] trait, which delivers batches of named frames; a real
//! scanner backend plugs in behind the same interface. The shipped
//! implementation is [`MockFrameSource`], which fabricates sequentially
//! named scan frames for prototyping.

use chrono::{DateTime, Utc};

/// A single frame delivered by a capture backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    /// 1-based index within the delivered batch.
    pub index: u32,
    /// Display name, e.g. "frame-001.png".
    pub name: String,
    /// When the frame was acquired.
    pub captured_at: DateTime<Utc>,
}

/// Source of captured frames.
pub trait FrameSource {
    /// Acquire the next batch of frames. Infallible for the mock backend;
    /// a hardware backend would surface failures before frames reach here.
    fn acquire_batch(&mut self) -> Vec<CapturedFrame>;
}

/// Stand-in source that fabricates a fixed-size batch per acquisition.
#[derive(Debug, Clone)]
pub struct MockFrameSource {
    batch_size: u32,
}

impl MockFrameSource {
    pub fn new(batch_size: u32) -> Self {
        Self { batch_size }
    }
}

impl FrameSource for MockFrameSource {
    fn acquire_batch(&mut self) -> Vec<CapturedFrame> {
        // Indices restart at 1 for every batch; repeated acquisitions
        // produce repeated names on purpose.
        (1..=self.batch_size)
            .map(|index| CapturedFrame {
                index,
                name: format!("frame-{:03}.png", index),
                captured_at: Utc::now(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_batch_size() {
        let mut source = MockFrameSource::new(6);
        assert_eq!(source.acquire_batch().len(), 6);
    }

    #[test]
    fn test_mock_naming_pattern() {
        let mut source = MockFrameSource::new(6);
        let batch = source.acquire_batch();
        assert_eq!(batch[0].name, "frame-001.png");
        assert_eq!(batch[5].name, "frame-006.png");
        assert_eq!(batch[0].index, 1);
        assert_eq!(batch[5].index, 6);
    }

    #[test]
    fn test_mock_indices_restart_per_batch() {
        let mut source = MockFrameSource::new(3);
        let first = source.acquire_batch();
        let second = source.acquire_batch();
        assert_eq!(first[0].index, second[0].index);
        assert_eq!(first[0].name, second[0].name);
    }
}
