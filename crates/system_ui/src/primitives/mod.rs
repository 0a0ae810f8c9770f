//! Shared control and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod overlays;
mod sheet_host;

pub use controls::{Button, TextField};
pub use overlays::BottomSheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Primary emphasized action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Confirming/positive action button.
    Success,
    /// Danger/destructive button.
    Danger,
    /// Low-emphasis neutral button.
    Neutral,
}

impl ButtonVariant {
    /// Stable `data-ui-variant` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }

    /// Every variant, in display order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Neutral,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Stable `data-ui-size` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn height_px(self) -> u32 {
        match self {
            Self::Sm => 35,
            Self::Md => 44,
            Self::Lg => 52,
        }
    }

    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Input types supported by [`TextField`].
pub enum InputType {
    /// Free text.
    #[default]
    Text,
    /// Masked secret with a reveal toggle.
    Password,
    /// Numeric entry.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Input-field color tones.
pub enum FieldTone {
    /// Standard input.
    #[default]
    Default,
    /// Validation error styling.
    Danger,
}

impl FieldTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&str>) -> String {
    match layout_class.map(str::trim) {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
