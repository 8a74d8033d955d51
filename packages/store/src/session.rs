//! # Session storage — the single read/write boundary for browser-local state
//!
//! Every piece of state the portal keeps on the client side goes through
//! [`SessionStore`]: the per-role bearer tokens, the email stashed between the
//! two steps of the password-reset flow, and the display name shown in the
//! dashboard header. No other code reads or writes storage keys directly.
//!
//! ## Storage keys
//!
//! | Key | Written by | Cleared by |
//! |-----|-----------|------------|
//! | `student_token` / `teacher_token` / `admin_token` | successful login | logout, or any 401 response |
//! | `student_reset_email` / `teacher_reset_email` / `admin_reset_email` | forgot-password step | reset-password completion |
//! | `student_name` / `teacher_name` / `admin_name` | successful login | logout |
//!
//! The backing medium is a [`KeyValueBackend`]: browser `localStorage` on the
//! web, one file per key on native, and an in-memory map in tests.

use serde::{Deserialize, Serialize};

/// Which of the three portal roles a session belongs to.
///
/// The role determines the token storage key, the API path prefix, and the
/// login/dashboard routes — the three places the original habit of ad hoc
/// per-role string literals used to live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// API path prefix: every backend endpoint for this role lives under it.
    pub fn prefix(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    pub fn token_key(self) -> &'static str {
        match self {
            Role::Student => "student_token",
            Role::Teacher => "teacher_token",
            Role::Admin => "admin_token",
        }
    }

    pub fn reset_email_key(self) -> &'static str {
        match self {
            Role::Student => "student_reset_email",
            Role::Teacher => "teacher_reset_email",
            Role::Admin => "admin_reset_email",
        }
    }

    pub fn name_key(self) -> &'static str {
        match self {
            Role::Student => "student_name",
            Role::Teacher => "teacher_name",
            Role::Admin => "admin_name",
        }
    }

    /// Client-side route of this role's login page.
    pub fn login_route(self) -> &'static str {
        match self {
            Role::Student => "/login-student",
            Role::Teacher => "/login-teacher",
            Role::Admin => "/login-superadmin",
        }
    }

    /// Client-side route of this role's dashboard.
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Role::Student => "/student-dashboard",
            Role::Teacher => "/teacher-dashboard",
            Role::Admin => "/admin-dashboard",
        }
    }

    /// Human-facing label used in page titles and headings.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Super Admin",
        }
    }
}

/// A flat string key/value medium.
///
/// Writes are best-effort: a corrupted or unavailable medium degrades to
/// "no stored data" rather than an error the UI would have to handle.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed accessors over a [`KeyValueBackend`].
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The bearer token for a role, if one is stored.
    pub fn token(&self, role: Role) -> Option<String> {
        self.backend.get(role.token_key()).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, role: Role, token: &str) {
        self.backend.set(role.token_key(), token);
    }

    /// Drop the token for one role. Other roles' tokens are untouched, so a
    /// student and an admin logged in from the same browser stay independent.
    pub fn clear_token(&self, role: Role) {
        self.backend.remove(role.token_key());
    }

    pub fn display_name(&self, role: Role) -> Option<String> {
        self.backend.get(role.name_key())
    }

    pub fn set_display_name(&self, role: Role, name: &str) {
        self.backend.set(role.name_key(), name);
    }

    /// Email captured by the forgot-password step, consumed by reset-password.
    pub fn reset_email(&self, role: Role) -> Option<String> {
        self.backend.get(role.reset_email_key())
    }

    pub fn set_reset_email(&self, role: Role, email: &str) {
        self.backend.set(role.reset_email_key(), email);
    }

    pub fn clear_reset_email(&self, role: Role) {
        self.backend.remove(role.reset_email_key());
    }

    /// Full logout for a role: token and display name both go.
    pub fn clear_session(&self, role: Role) {
        self.backend.remove(role.token_key());
        self.backend.remove(role.name_key());
    }
}
