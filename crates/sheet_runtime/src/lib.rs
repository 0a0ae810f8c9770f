//! Headless state machine for the dismissible bottom sheet.
//!
//! [`reduce_sheet`] owns every transition: the open/mounted lag used for exit transitions, the
//! single pointer session behind drag tracking, and the release decision. It returns
//! [`SheetEffect`] intents that a [`SheetHost`] executes, so the browser binding in `system_ui`
//! and the in-memory hosts used by tests drive the exact same logic.

pub mod gesture;
pub mod host;
pub mod model;
pub mod reducer;

pub use gesture::{drag_offset, release_decision, DragRelease};
pub use host::{run_sheet_effect, run_sheet_effects, SheetHost};
pub use model::*;
pub use reducer::{reduce_sheet, SheetAction, SheetEffect, SheetError};
