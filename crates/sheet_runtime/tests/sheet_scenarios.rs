use std::cell::{Cell, RefCell};
use std::time::Duration;

use sheet_runtime::{
    reduce_sheet, run_sheet_effects, ClickTarget, PointerSource, PressOrigin, SheetAction,
    SheetConfig, SheetHeight, SheetHost, SheetState, UnmountTicket, UNMOUNT_DELAY_MS,
};

/// In-memory host with a manual clock.
#[derive(Default)]
struct FakeHost {
    now_ms: Cell<u64>,
    timers: RefCell<Vec<(UnmountTicket, u64)>>,
    scroll_locked: Cell<bool>,
    listeners_attached: Cell<u32>,
    close_requests: Cell<u32>,
}

impl SheetHost for FakeHost {
    fn lock_scroll(&self) {
        self.scroll_locked.set(true);
    }

    fn unlock_scroll(&self) {
        self.scroll_locked.set(false);
    }

    fn schedule_unmount(&self, ticket: UnmountTicket, delay: Duration) {
        let due = self.now_ms.get() + delay.as_millis() as u64;
        self.timers.borrow_mut().push((ticket, due));
    }

    fn cancel_unmount(&self, ticket: UnmountTicket) {
        self.timers.borrow_mut().retain(|(pending, _)| *pending != ticket);
    }

    fn attach_pointer_listeners(&self) {
        self.listeners_attached
            .set(self.listeners_attached.get() + 1);
    }

    fn detach_pointer_listeners(&self) {
        let attached = self.listeners_attached.get();
        assert!(attached > 0, "detached listeners that were never attached");
        self.listeners_attached.set(attached - 1);
    }

    fn request_close(&self) {
        self.close_requests.set(self.close_requests.get() + 1);
    }
}

struct Harness {
    state: SheetState,
    host: FakeHost,
    mounted_history: Vec<bool>,
}

impl Harness {
    fn new(config: SheetConfig) -> Self {
        Self {
            state: SheetState::new(config),
            host: FakeHost::default(),
            mounted_history: Vec::new(),
        }
    }

    fn dispatch(&mut self, action: SheetAction) {
        let effects = reduce_sheet(&mut self.state, action).expect("valid transition");
        run_sheet_effects(&self.host, effects);
        self.observe();
    }

    fn observe(&mut self) {
        assert!(self.state.drag_offset() >= 0.0);
        let mounted = self.state.is_mounted();
        if self.mounted_history.last() != Some(&mounted) {
            self.mounted_history.push(mounted);
        }
    }

    fn set_open(&mut self, open: bool) {
        self.dispatch(SheetAction::SetOpen { open });
    }

    fn advance(&mut self, ms: u64) {
        let target = self.host.now_ms.get() + ms;
        loop {
            let due = {
                let timers = self.host.timers.borrow();
                timers
                    .iter()
                    .filter(|(_, due)| *due <= target)
                    .min_by_key(|(_, due)| *due)
                    .copied()
            };
            let Some((ticket, due)) = due else {
                break;
            };
            self.host.now_ms.set(due);
            self.host.cancel_unmount(ticket);
            self.dispatch(SheetAction::UnmountElapsed { ticket });
        }
        self.host.now_ms.set(target);
    }

    fn touch_drag(&mut self, distance: f64) {
        self.dispatch(SheetAction::BeginDrag {
            source: PointerSource::Touch,
            y: 500.0,
            origin: PressOrigin::Surface,
        });
        self.dispatch(SheetAction::MoveDrag {
            y: 500.0 + distance / 2.0,
        });
        self.dispatch(SheetAction::MoveDrag {
            y: 500.0 + distance,
        });
        self.dispatch(SheetAction::EndDrag);
    }

    fn mouse_down(&mut self, y: f64) {
        self.dispatch(SheetAction::BeginDrag {
            source: PointerSource::Mouse,
            y,
            origin: PressOrigin::Surface,
        });
    }

    /// Window-level mouse move; only reaches the sheet through an attached listener.
    fn global_mouse_move(&mut self, y: f64) {
        if self.host.listeners_attached.get() > 0 {
            self.dispatch(SheetAction::MoveDrag { y });
        }
    }

    fn global_mouse_up(&mut self) {
        if self.host.listeners_attached.get() > 0 {
            self.dispatch(SheetAction::EndDrag);
        }
    }
}

#[test]
fn fixed_height_sheet_dragged_past_threshold_requests_close_once() {
    let mut sheet = Harness::new(SheetConfig {
        height: SheetHeight::from("400px"),
        ..SheetConfig::default()
    });
    sheet.set_open(true);

    sheet.touch_drag(150.0);

    assert_eq!(sheet.host.close_requests.get(), 1);
    sheet.set_open(false);
    sheet.advance(UNMOUNT_DELAY_MS);
    assert!(!sheet.state.is_mounted());
    assert_eq!(sheet.state.drag_offset(), 0.0);
    assert_eq!(sheet.host.close_requests.get(), 1);
}

#[test]
fn short_drag_springs_back_and_keeps_sheet_open() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);

    sheet.touch_drag(50.0);

    assert_eq!(sheet.state.drag_offset(), 0.0);
    assert!(sheet.state.is_open());
    assert!(sheet.state.is_mounted());
    assert_eq!(sheet.host.close_requests.get(), 0);
}

#[test]
fn drag_exactly_at_threshold_does_not_close() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);

    sheet.touch_drag(100.0);

    assert_eq!(sheet.host.close_requests.get(), 0);
    assert_eq!(sheet.state.drag_offset(), 0.0);
}

#[test]
fn closed_sheet_stays_mounted_for_the_full_delay() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);
    sheet.set_open(false);

    sheet.advance(UNMOUNT_DELAY_MS - 1);
    assert!(sheet.state.is_mounted());

    sheet.advance(1);
    assert!(!sheet.state.is_mounted());
    assert!(sheet.host.timers.borrow().is_empty());
}

#[test]
fn quick_close_and_reopen_keeps_one_continuous_mounted_phase() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);
    sheet.advance(5);
    sheet.set_open(false);
    sheet.advance(10);
    sheet.set_open(true);

    sheet.advance(UNMOUNT_DELAY_MS * 3);

    assert!(sheet.state.is_mounted());
    assert!(sheet.state.is_open());
    assert_eq!(sheet.mounted_history, vec![true]);
    assert!(sheet.host.scroll_locked.get());
}

#[test]
fn scroll_lock_follows_open_flag_and_is_released_on_detach() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);
    assert!(sheet.host.scroll_locked.get());

    sheet.set_open(false);
    assert!(!sheet.host.scroll_locked.get());

    sheet.set_open(true);
    sheet.dispatch(SheetAction::Detach);
    assert!(!sheet.host.scroll_locked.get());
    assert!(sheet.host.timers.borrow().is_empty());
}

#[test]
fn mouse_drag_listeners_are_gone_after_spring_back() {
    let mut sheet = Harness::new(SheetConfig {
        show_header: true,
        ..SheetConfig::default()
    });
    sheet.set_open(true);

    sheet.mouse_down(100.0);
    assert_eq!(sheet.host.listeners_attached.get(), 1);
    sheet.global_mouse_move(160.0);
    assert_eq!(sheet.state.drag_offset(), 60.0);
    sheet.global_mouse_up();

    assert_eq!(sheet.host.listeners_attached.get(), 0);
    let before = sheet.state.clone();
    sheet.global_mouse_move(700.0);
    sheet.global_mouse_up();
    assert_eq!(sheet.state, before);
}

#[test]
fn mouse_drag_listeners_are_gone_after_dismiss() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);

    sheet.mouse_down(100.0);
    sheet.global_mouse_move(40.0);
    assert_eq!(sheet.state.drag_offset(), 0.0);
    sheet.global_mouse_move(260.0);
    sheet.global_mouse_up();

    assert_eq!(sheet.host.close_requests.get(), 1);
    assert_eq!(sheet.host.listeners_attached.get(), 0);
}

#[test]
fn detach_mid_drag_removes_listeners() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);
    sheet.mouse_down(100.0);
    sheet.global_mouse_move(130.0);

    sheet.dispatch(SheetAction::Detach);

    assert_eq!(sheet.host.listeners_attached.get(), 0);
    assert_eq!(sheet.host.close_requests.get(), 0);
    let before = sheet.state.clone();
    sheet.global_mouse_move(900.0);
    assert_eq!(sheet.state, before);
}

#[test]
fn unmount_while_dragging_removes_listeners() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);
    sheet.mouse_down(100.0);
    sheet.set_open(false);

    sheet.advance(UNMOUNT_DELAY_MS);

    assert!(!sheet.state.is_mounted());
    assert_eq!(sheet.host.listeners_attached.get(), 0);
    assert_eq!(sheet.host.close_requests.get(), 0);
}

#[test]
fn backdrop_clicks_close_only_through_the_backdrop_itself() {
    let mut sheet = Harness::new(SheetConfig::default());
    sheet.set_open(true);

    sheet.dispatch(SheetAction::BackdropClick {
        target: ClickTarget::Descendant,
    });
    assert_eq!(sheet.host.close_requests.get(), 0);

    sheet.dispatch(SheetAction::BackdropClick {
        target: ClickTarget::Backdrop,
    });
    assert_eq!(sheet.host.close_requests.get(), 1);
}

#[test]
fn upward_mouse_drag_released_over_backdrop_keeps_sheet_open() {
    let mut sheet = Harness::new(SheetConfig {
        show_header: true,
        ..SheetConfig::default()
    });
    sheet.set_open(true);

    sheet.mouse_down(400.0);
    sheet.global_mouse_move(150.0);
    sheet.global_mouse_up();
    sheet.dispatch(SheetAction::BackdropClick {
        target: ClickTarget::Backdrop,
    });

    assert!(sheet.state.is_open());
    assert_eq!(sheet.host.close_requests.get(), 0);

    sheet.dispatch(SheetAction::BackdropClick {
        target: ClickTarget::Backdrop,
    });
    assert_eq!(sheet.host.close_requests.get(), 1);
}
