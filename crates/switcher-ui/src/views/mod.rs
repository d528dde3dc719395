//! UI views for the workspace switcher.
//!
//! Views are stateful GPUI components that manage focus and emit events.

mod demo_page;
mod preview_card;
mod search_input;
mod switcher_panel;

pub use demo_page::DemoPage;
pub use preview_card::PreviewCardView;
pub use search_input::{SearchInput, SearchInputEvent, TextBuffer};
pub use switcher_panel::{SwitcherPanel, SwitcherPanelEvent};

use gpui::ScrollStrategy;
use gpui_component::VirtualListScrollHandle;

/// Scroll the workspace list to make the keyboard selection visible.
pub fn scroll_to_cursor(scroll_handle: &VirtualListScrollHandle, row_index: usize) {
    scroll_handle.scroll_to_item(row_index, ScrollStrategy::Nearest);
}
