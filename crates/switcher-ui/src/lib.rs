//! GPUI frontend for the workspace switcher.
//!
//! This crate provides the native GPUI user interface including:
//! - The display model (list deriver, state machine, reorder, preview placement)
//! - The in-memory backend with simulated latency
//! - SwitcherPanel, PreviewCardView and the DemoPage that hosts them
//! - Configurable keybindings

pub mod actions;
pub mod backend;
pub mod keymap;
pub mod model;
pub mod theme;
pub mod views;
pub mod window;

// Re-export commonly used types
pub use backend::{Backend, BackendState, InMemoryBackend, Latency};
pub use model::{
    derive_list, move_by_id, Busy, DerivedList, OpenState, PreviewCard, PreviewPlacement,
    RecentSearches, RowBounds, SubmitOutcome, SwitcherPhase,
};
pub use theme::{Appearance, Theme, ThemeExt, ThemeSettings};
pub use views::{
    scroll_to_cursor, DemoPage, PreviewCardView, SearchInput, SearchInputEvent, SwitcherPanel,
    SwitcherPanelEvent,
};
pub use window::run_demo;
