//! Drag offset math and the release decision for the sheet gesture tracker.

use crate::model::DISMISS_THRESHOLD_PX;

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// Ask the owner to close the sheet.
    Dismiss,
    /// Snap the sheet back to its rest position.
    SpringBack,
}

/// Downward displacement since the drag started. Upward movement clamps to zero.
pub fn drag_offset(start_y: f64, current_y: f64) -> f64 {
    (current_y - start_y).max(0.0)
}

/// Strict comparison: a release exactly at the threshold springs back.
pub fn release_decision(offset: f64) -> DragRelease {
    if offset > DISMISS_THRESHOLD_PX {
        DragRelease::Dismiss
    } else {
        DragRelease::SpringBack
    }
}
