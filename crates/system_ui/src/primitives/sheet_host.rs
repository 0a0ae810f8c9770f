//! Browser implementation of [`SheetHost`]: body scroll lock, the deferred unmount timer, and
//! window-level mouse listeners for header drags.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, WindowListenerHandle};
use leptos::*;
use sheet_runtime::{SheetAction, SheetHost, UnmountTicket};

/// A browser resource that is given back exactly once.
trait Release {
    fn release(self);
}

impl Release for TimeoutHandle {
    fn release(self) {
        self.clear();
    }
}

impl<R: Release> Release for (UnmountTicket, R) {
    fn release(self) {
        self.1.release();
    }
}

/// Stores `held`, releasing whatever it supersedes.
fn replace_held<R: Release>(slot: &mut Option<R>, held: R) {
    if let Some(superseded) = slot.replace(held) {
        superseded.release();
    }
}

/// Releases the held resource, if any. Safe to call repeatedly.
fn release_held<R: Release>(slot: &mut Option<R>) {
    if let Some(held) = slot.take() {
        held.release();
    }
}

/// Releases the pending timer only when it belongs to `ticket`.
fn release_timer<R: Release>(slot: &mut Option<(UnmountTicket, R)>, ticket: UnmountTicket) {
    if matches!(slot, Some((pending, _)) if *pending == ticket) {
        release_held(slot);
    }
}

/// Forgets a timer that has already fired, without clearing it.
fn forget_fired_timer<R>(slot: &mut Option<(UnmountTicket, R)>, ticket: UnmountTicket) {
    if matches!(slot, Some((pending, _)) if *pending == ticket) {
        *slot = None;
    }
}

/// Window mouse listeners held for the duration of one mouse drag.
struct PointerListenerScope {
    mouse_move: WindowListenerHandle,
    mouse_up: WindowListenerHandle,
}

impl PointerListenerScope {
    fn acquire(dispatch: Callback<SheetAction>) -> Self {
        let mouse_move = window_event_listener(ev::mousemove, move |ev| {
            dispatch.call(SheetAction::MoveDrag {
                y: f64::from(ev.client_y()),
            });
        });
        let mouse_up = window_event_listener(ev::mouseup, move |_| {
            dispatch.call(SheetAction::EndDrag);
        });
        Self {
            mouse_move,
            mouse_up,
        }
    }
}

impl Release for PointerListenerScope {
    fn release(self) {
        self.mouse_move.remove();
        self.mouse_up.remove();
    }
}

#[derive(Clone, Copy)]
pub(super) struct WebSheetHost {
    dispatch: Callback<SheetAction>,
    on_close: Callback<()>,
    listeners: StoredValue<Option<PointerListenerScope>>,
    unmount_timer: StoredValue<Option<(UnmountTicket, TimeoutHandle)>>,
}

impl WebSheetHost {
    pub(super) fn new(dispatch: Callback<SheetAction>, on_close: Callback<()>) -> Self {
        Self {
            dispatch,
            on_close,
            listeners: store_value(None),
            unmount_timer: store_value(None),
        }
    }
}

fn set_body_overflow(value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            logging::warn!("bottom sheet scroll lock skipped: document body unavailable");
            return;
        };
        if let Err(err) = body.style().set_property("overflow", value) {
            logging::warn!("bottom sheet scroll lock failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = value;
}

impl SheetHost for WebSheetHost {
    fn lock_scroll(&self) {
        set_body_overflow("hidden");
    }

    fn unlock_scroll(&self) {
        set_body_overflow("unset");
    }

    fn schedule_unmount(&self, ticket: UnmountTicket, delay: Duration) {
        let dispatch = self.dispatch;
        let unmount_timer = self.unmount_timer;
        let fire = move || {
            unmount_timer.try_update_value(|slot| forget_fired_timer(slot, ticket));
            dispatch.call(SheetAction::UnmountElapsed { ticket });
        };

        match set_timeout_with_handle(fire, delay) {
            Ok(handle) => {
                self.unmount_timer
                    .try_update_value(|slot| replace_held(slot, (ticket, handle)));
            }
            Err(err) => logging::warn!("bottom sheet unmount timer failed: {err:?}"),
        }
    }

    fn cancel_unmount(&self, ticket: UnmountTicket) {
        self.unmount_timer
            .try_update_value(|slot| release_timer(slot, ticket));
    }

    fn attach_pointer_listeners(&self) {
        let dispatch = self.dispatch;
        self.listeners.try_update_value(|slot| {
            release_held(slot);
            *slot = Some(PointerListenerScope::acquire(dispatch));
        });
    }

    fn detach_pointer_listeners(&self) {
        self.listeners.try_update_value(release_held);
    }

    fn request_close(&self) {
        self.on_close.call(());
    }
}
