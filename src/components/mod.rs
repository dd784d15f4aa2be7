//! UI components grouped by region.
mod clear_overlay;
mod frame_row;
mod frames_panel;
mod results_panel;
mod status_bar;
mod title_bar;
mod toolbar;

pub use clear_overlay::ClearOverlay;
pub use frame_row::FrameRowItem;
pub use frames_panel::FramesPanel;
pub use results_panel::ResultsPanel;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use toolbar::Toolbar;
