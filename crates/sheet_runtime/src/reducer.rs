//! Reducer actions, side-effect intents, and transition logic for the bottom sheet.

use std::time::Duration;

use thiserror::Error;

use crate::{
    gesture::{drag_offset, release_decision, DragRelease},
    model::{
        unmount_delay, ClickTarget, DragState, PointerSession, PointerSource, PressOrigin,
        SheetConfig, SheetState, UnmountTicket,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_sheet`] to mutate [`SheetState`].
pub enum SheetAction {
    /// Owner-controlled open flag changed.
    SetOpen {
        /// New value of the owner's open flag.
        open: bool,
    },
    /// Replace the configurable props.
    UpdateConfig {
        /// New props.
        config: SheetConfig,
    },
    /// The deferred unmount timer fired.
    UnmountElapsed {
        /// Ticket the timer was scheduled with.
        ticket: UnmountTicket,
    },
    /// Press on a drag surface.
    BeginDrag {
        /// Input device that started the drag.
        source: PointerSource,
        /// Vertical client coordinate of the press.
        y: f64,
        /// Element class the press landed on.
        origin: PressOrigin,
    },
    /// Pointer movement during a drag, from either input source.
    MoveDrag {
        /// Current vertical client coordinate.
        y: f64,
    },
    /// Touch end, touch cancel, or mouse up.
    EndDrag,
    /// Click anywhere on the backdrop layer.
    BackdropClick {
        /// Which element the click landed on.
        target: ClickTarget,
    },
    /// The component is being torn down.
    Detach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_sheet`] for a [`crate::SheetHost`] to execute.
pub enum SheetEffect {
    /// Suppress background page scrolling.
    LockScroll,
    /// Restore background page scrolling.
    UnlockScroll,
    /// Start the one-shot unmount timer.
    ScheduleUnmount {
        /// Ticket to report back through [`SheetAction::UnmountElapsed`].
        ticket: UnmountTicket,
        /// Time until the sheet should leave the DOM.
        delay: Duration,
    },
    /// Cancel a previously scheduled unmount timer.
    CancelUnmount {
        /// Ticket of the timer to cancel.
        ticket: UnmountTicket,
    },
    /// Install window-level mouse move/up listeners.
    AttachPointerListeners,
    /// Remove the window-level mouse listeners.
    DetachPointerListeners,
    /// Invoke the owner's close callback.
    RequestClose,
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Rejected sheet transitions. State is left untouched when one is returned.
pub enum SheetError {
    /// A drag was started while nothing is rendered.
    #[error("cannot start a drag while the sheet is not mounted")]
    NotMounted,
    /// Pointer coordinate was NaN or infinite.
    #[error("pointer coordinate is not finite: {0}")]
    NonFiniteCoordinate(f64),
}

fn ensure_finite(y: f64) -> Result<f64, SheetError> {
    if y.is_finite() {
        Ok(y)
    } else {
        Err(SheetError::NonFiniteCoordinate(y))
    }
}

/// Ends the active session, if any, and applies the release decision.
fn finish_drag(state: &mut SheetState, effects: &mut Vec<SheetEffect>) {
    let Some(session) = state.drag.session.take() else {
        return;
    };

    if session.source.needs_global_listeners() {
        effects.push(SheetEffect::DetachPointerListeners);
        state.drag.release_click_pending = true;
    }

    match release_decision(state.drag.offset) {
        DragRelease::Dismiss => {
            // Offset is kept so the exit transition starts where the pointer let go.
            if state.visibility.is_open {
                effects.push(SheetEffect::RequestClose);
            }
        }
        DragRelease::SpringBack => state.drag.offset = 0.0,
    }
}

/// Applies `action` to `state` and returns the side effects the host must run, in order.
///
/// # Errors
///
/// Returns [`SheetError`] for drags started while unmounted or with non-finite coordinates.
pub fn reduce_sheet(
    state: &mut SheetState,
    action: SheetAction,
) -> Result<Vec<SheetEffect>, SheetError> {
    let mut effects = Vec::new();

    match action {
        SheetAction::SetOpen { open: true } => {
            if state.visibility.is_open {
                return Ok(effects);
            }
            if let Some(ticket) = state.visibility.pending_unmount.take() {
                effects.push(SheetEffect::CancelUnmount { ticket });
            }
            state.visibility.is_open = true;
            state.visibility.mounted = true;
            state.drag.offset = 0.0;
            effects.push(SheetEffect::LockScroll);
        }
        SheetAction::SetOpen { open: false } => {
            if !state.visibility.is_open {
                return Ok(effects);
            }
            state.visibility.is_open = false;
            effects.push(SheetEffect::UnlockScroll);

            let ticket = state.visibility.next_ticket();
            state.visibility.pending_unmount = Some(ticket);
            effects.push(SheetEffect::ScheduleUnmount {
                ticket,
                delay: unmount_delay(),
            });
        }
        SheetAction::UpdateConfig { config } => {
            state.config = config;
        }
        SheetAction::UnmountElapsed { ticket } => {
            let is_current = state.visibility.pending_unmount == Some(ticket);
            if !is_current || state.visibility.is_open {
                return Ok(effects);
            }
            finish_drag(state, &mut effects);
            state.visibility.pending_unmount = None;
            state.visibility.mounted = false;
            state.drag = DragState::default();
        }
        SheetAction::BeginDrag { source, y, origin } => {
            if origin == PressOrigin::InteractiveControl {
                return Ok(effects);
            }
            if !state.visibility.mounted {
                return Err(SheetError::NotMounted);
            }
            let start_y = ensure_finite(y)?;
            if state.drag.is_active() {
                return Ok(effects);
            }

            state.drag = DragState {
                offset: 0.0,
                session: Some(PointerSession { source, start_y }),
                release_click_pending: false,
            };
            if source.needs_global_listeners() {
                effects.push(SheetEffect::AttachPointerListeners);
            }
        }
        SheetAction::MoveDrag { y } => {
            let Some(session) = state.drag.session else {
                return Ok(effects);
            };
            let y = ensure_finite(y)?;
            state.drag.offset = drag_offset(session.start_y, y);
        }
        SheetAction::EndDrag => finish_drag(state, &mut effects),
        SheetAction::BackdropClick { target } => {
            if std::mem::take(&mut state.drag.release_click_pending) {
                return Ok(effects);
            }
            if target == ClickTarget::Backdrop
                && state.config.enable_backdrop_close
                && state.visibility.is_open
            {
                effects.push(SheetEffect::RequestClose);
            }
        }
        SheetAction::Detach => {
            finish_drag(state, &mut effects);
            if let Some(ticket) = state.visibility.pending_unmount.take() {
                effects.push(SheetEffect::CancelUnmount { ticket });
            }
            effects.push(SheetEffect::UnlockScroll);
            state.visibility.is_open = false;
            state.visibility.mounted = false;
            state.drag = DragState::default();
        }
    }

    Ok(effects)
}
