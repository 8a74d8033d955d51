//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    client_for, handle_api_error, redirect, session_store, use_session, Session, SessionProvider,
};

pub mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod toast_tray;
pub use toast_tray::ToastTray;

pub mod thread;
pub use thread::{ChatMessage, ChatThread, Delivery, MessageKey};

mod chat_panel;
pub use chat_panel::ChatPanel;

pub mod grades;
pub use grades::{grade_for_score, Grade, GradeSheet};

pub mod validate;
pub use validate::{required, valid_email, FieldErrors};

mod sidebar;
pub use sidebar::{Sidebar, SidebarItem};

mod spinner;
pub use spinner::LoadingSpinner;

mod notifications;
pub use notifications::NotificationPanel;
