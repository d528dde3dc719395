//! State model for the workspace switcher UI.
//!
//! This module contains the list derivation, the interaction state machine,
//! drag reordering and preview placement. All types are GPUI-independent
//! for testability.

mod derive;
mod preview;
mod reorder;
mod state;

pub use derive::{derive_list, DerivedList};
pub use preview::{PreviewCard, PreviewPlacement, RowBounds, PREVIEW_GAP};
pub use reorder::move_by_id;
pub use state::{Busy, OpenState, RecentSearches, SubmitOutcome, SwitcherPhase};
