//! Full-view status panels for loading and failure states.
//!
//! DESIGN
//! ======
//! Each panel replaces the whole page body. Pages pass their escape-hatch
//! buttons as children so the panel stays free of navigation concerns.

use leptos::prelude::*;

/// Alert tone for `AlertPanel`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertTone {
    #[default]
    Danger,
    Warning,
}

impl AlertTone {
    fn class(self) -> &'static str {
        match self {
            Self::Danger => "alert alert--danger",
            Self::Warning => "alert alert--warning",
        }
    }
}

/// Centered spinner with a caption.
#[component]
pub fn LoadingPanel(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="status-panel" role="status">
            <span class="spinner" aria-hidden="true"></span>
            {message.map(|text| view! { <p class="status-panel__caption">{text}</p> })}
        </div>
    }
}

/// Centered alert with optional action children.
#[component]
pub fn AlertPanel(
    message: &'static str,
    #[prop(optional)] tone: AlertTone,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class=tone.class() role="alert">{message}</div>
            {children.map(|children| children())}
        </div>
    }
}
