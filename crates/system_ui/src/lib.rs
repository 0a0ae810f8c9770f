//! Shared UI primitive library: buttons, text fields, icons, and the draggable bottom sheet.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet layer. The bottom sheet is a thin
//! browser binding over the headless `sheet_runtime` state machine.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    BottomSheet, Button, ButtonSize, ButtonVariant, FieldTone, InputType, TextField,
};
pub use sheet_runtime::SheetHeight;

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        BottomSheet, Button, ButtonSize, ButtonVariant, FieldTone, Icon, IconName, IconSize,
        InputType, SheetHeight, TextField,
    };
}
