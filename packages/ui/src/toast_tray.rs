use dioxus::prelude::*;

use crate::toast::{use_toasts, ToastLevel};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Fixed overlay in the top-right corner rendering the active toasts.
#[component]
pub fn ToastTray() -> Element {
    let mut toasts = use_toasts();

    let entries = toasts().entries.clone();
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        div {
            class: "toast-tray",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Error => "toast toast--error",
                        ToastLevel::Warning => "toast toast--warning",
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Info => "toast toast--info",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "x"
                    }
                }
            }
        }
    }
}
