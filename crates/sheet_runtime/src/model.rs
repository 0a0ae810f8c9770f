use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between a close request and the sheet leaving the DOM.
pub const UNMOUNT_DELAY_MS: u64 = 300;
/// Drag distance (in CSS px) a release must exceed to dismiss the sheet.
pub const DISMISS_THRESHOLD_PX: f64 = 100.0;

pub fn unmount_delay() -> Duration {
    Duration::from_millis(UNMOUNT_DELAY_MS)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetHeight {
    /// Intrinsic height.
    #[default]
    Auto,
    /// Fixed height in CSS pixels.
    Pixels(u32),
    /// Any CSS dimension, e.g. `400px` or `60vh`.
    Css(String),
}

impl SheetHeight {
    pub fn css_value(&self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Pixels(px) => format!("{px}px"),
            Self::Css(value) => value.clone(),
        }
    }
}

impl From<u32> for SheetHeight {
    fn from(px: u32) -> Self {
        Self::Pixels(px)
    }
}

impl From<&str> for SheetHeight {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Css(value.to_string())
        }
    }
}

impl From<String> for SheetHeight {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub height: SheetHeight,
    pub enable_backdrop_close: bool,
    pub show_header: bool,
    pub title: Option<String>,
    pub class_name: Option<String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            height: SheetHeight::Auto,
            enable_backdrop_close: true,
            show_header: false,
            title: None,
            class_name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnmountTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilityState {
    pub is_open: bool,
    pub mounted: bool,
    pub pending_unmount: Option<UnmountTicket>,
    pub generation: u64,
}

impl VisibilityState {
    pub(crate) fn next_ticket(&mut self) -> UnmountTicket {
        self.generation = self.generation.wrapping_add(1);
        UnmountTicket(self.generation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerSource {
    Touch,
    Mouse,
}

impl PointerSource {
    /// Mouse drags can leave the sheet bounds and need window-level listeners.
    pub fn needs_global_listeners(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

/// Where a press landed inside the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOrigin {
    Surface,
    /// A button or other control that handles the press itself.
    InteractiveControl,
}

/// Where a click on the backdrop layer landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop element itself.
    Backdrop,
    /// The panel or any other descendant of the backdrop.
    Descendant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    pub source: PointerSource,
    pub start_y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragState {
    pub offset: f64,
    pub session: Option<PointerSession>,
    /// A mouse session just ended. The browser follows the release with a `click` on the
    /// common ancestor of press and release, which is not a backdrop click.
    pub release_click_pending: bool,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn source(&self) -> Option<PointerSource> {
        self.session.map(|session| session.source)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetState {
    pub config: SheetConfig,
    pub visibility: VisibilityState,
    pub drag: DragState,
}

impl SheetState {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.visibility.mounted
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn drag_offset(&self) -> f64 {
        self.drag.offset
    }
}
