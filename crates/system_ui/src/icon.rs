//! Centralized inline SVG icon set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to primitives and consuming apps.
pub enum IconName {
    /// Open eye, shown while a password is revealed.
    Eye,
    /// Struck-through eye, shown while a password is masked.
    EyeOff,
    /// Padlock, the default leading icon for password fields.
    Lock,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::Lock => "lock",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Eye => &[
                "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            Self::EyeOff => &[
                "M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94",
                "M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19",
                "M14.12 14.12a3 3 0 1 1-4.24-4.24",
                "M1 1l22 22",
            ],
            Self::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px icon.
    Sm,
    /// 20px icon.
    #[default]
    Md,
    /// 24px icon.
    Lg,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn px(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Inline stroke icon. Decorative: hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=px
            height=px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon
                .paths()
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect_view()}
        </svg>
    }
}
