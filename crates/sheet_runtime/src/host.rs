//! Host boundary for executing reducer-emitted sheet effects.
//!
//! The reducer only describes side effects. A host owns the real resources behind them: the
//! page scroll lock, the one-shot unmount timer, the window-level pointer listeners, and the
//! owner's close callback. The browser implementation lives in `system_ui`; tests use an
//! in-memory host.

use std::time::Duration;

use crate::{model::UnmountTicket, reducer::SheetEffect};

/// Resources a mounted sheet acquires and releases while it runs.
///
/// Methods take `&self` so a host can be shared with the callbacks it installs.
pub trait SheetHost {
    /// Suppresses background scrolling.
    fn lock_scroll(&self);
    /// Restores background scrolling. Must be safe to call when not locked.
    fn unlock_scroll(&self);
    /// Starts a timer that reports `ticket` back after `delay`.
    fn schedule_unmount(&self, ticket: UnmountTicket, delay: Duration);
    /// Cancels the timer scheduled for `ticket`, if it is still pending.
    fn cancel_unmount(&self, ticket: UnmountTicket);
    /// Installs window-level mouse move/up listeners feeding the active drag.
    fn attach_pointer_listeners(&self);
    /// Removes the listeners installed by [`SheetHost::attach_pointer_listeners`].
    fn detach_pointer_listeners(&self);
    /// Invokes the owner's close callback.
    fn request_close(&self);
}

/// Executes a single [`SheetEffect`] against `host`.
pub fn run_sheet_effect<H: SheetHost + ?Sized>(host: &H, effect: SheetEffect) {
    match effect {
        SheetEffect::LockScroll => host.lock_scroll(),
        SheetEffect::UnlockScroll => host.unlock_scroll(),
        SheetEffect::ScheduleUnmount { ticket, delay } => host.schedule_unmount(ticket, delay),
        SheetEffect::CancelUnmount { ticket } => host.cancel_unmount(ticket),
        SheetEffect::AttachPointerListeners => host.attach_pointer_listeners(),
        SheetEffect::DetachPointerListeners => host.detach_pointer_listeners(),
        SheetEffect::RequestClose => host.request_close(),
    }
}

/// Executes reducer effects in emission order.
pub fn run_sheet_effects<H: SheetHost + ?Sized>(host: &H, effects: Vec<SheetEffect>) {
    for effect in effects {
        run_sheet_effect(host, effect);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<String>>,
    }

    impl RecordingHost {
        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    impl SheetHost for RecordingHost {
        fn lock_scroll(&self) {
            self.record("lock");
        }

        fn unlock_scroll(&self) {
            self.record("unlock");
        }

        fn schedule_unmount(&self, ticket: UnmountTicket, delay: Duration) {
            self.record(format!("schedule:{}:{}", ticket.0, delay.as_millis()));
        }

        fn cancel_unmount(&self, ticket: UnmountTicket) {
            self.record(format!("cancel:{}", ticket.0));
        }

        fn attach_pointer_listeners(&self) {
            self.record("attach");
        }

        fn detach_pointer_listeners(&self) {
            self.record("detach");
        }

        fn request_close(&self) {
            self.record("close");
        }
    }

    #[test]
    fn effects_run_in_emission_order() {
        let host = RecordingHost::default();

        run_sheet_effects(
            &host,
            vec![
                SheetEffect::DetachPointerListeners,
                SheetEffect::RequestClose,
                SheetEffect::UnlockScroll,
                SheetEffect::ScheduleUnmount {
                    ticket: UnmountTicket(3),
                    delay: Duration::from_millis(300),
                },
                SheetEffect::CancelUnmount {
                    ticket: UnmountTicket(3),
                },
            ],
        );

        assert_eq!(
            host.calls.into_inner(),
            vec!["detach", "close", "unlock", "schedule:3:300", "cancel:3"]
        );
    }

    #[test]
    fn host_is_usable_as_trait_object() {
        let host = RecordingHost::default();
        let host_obj: &dyn SheetHost = &host;

        run_sheet_effect(host_obj, SheetEffect::LockScroll);
        run_sheet_effect(host_obj, SheetEffect::AttachPointerListeners);

        assert_eq!(host.calls.into_inner(), vec!["lock", "attach"]);
    }
}
