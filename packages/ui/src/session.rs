//! Session context for the application.
//!
//! [`SessionProvider`] loads the per-role tokens from the [`store`] once on
//! mount and exposes them as a context signal. Login and logout go through
//! the [`Session`] methods so the signal and the persistent store never
//! disagree. A 401 response anywhere calls [`Session::expire`], which clears
//! exactly that role's token and sends the browser to that role's login page.

use dioxus::prelude::*;
use store::{KeyValueBackend, Role, SessionStore};

use crate::toast::{push_toast, ToastLevel, Toasts};

/// Create a platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): browser `localStorage`
/// - **Native**: one file per key under the platform data dir
pub fn session_store() -> SessionStore<impl KeyValueBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::WebStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::FileBackend::in_data_dir())
    }
}

/// Snapshot of the client-side session: one optional token and display name
/// per role. Roles are independent; a student and an admin logged in from the
/// same browser do not interfere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    tokens: [Option<String>; 3],
    names: [Option<String>; 3],
}

fn slot(role: Role) -> usize {
    match role {
        Role::Student => 0,
        Role::Teacher => 1,
        Role::Admin => 2,
    }
}

impl Session {
    /// Load the current snapshot from persistent storage.
    pub fn load() -> Self {
        let store = session_store();
        let mut session = Session::default();
        for role in Role::ALL {
            session.tokens[slot(role)] = store.token(role);
            session.names[slot(role)] = store.display_name(role);
        }
        session
    }

    pub fn token(&self, role: Role) -> Option<&str> {
        self.tokens[slot(role)].as_deref()
    }

    pub fn is_logged_in(&self, role: Role) -> bool {
        self.token(role).is_some()
    }

    pub fn display_name(&self, role: Role) -> Option<&str> {
        self.names[slot(role)].as_deref()
    }

    /// Record a successful login: persist, then update the snapshot.
    pub fn login(&mut self, role: Role, token: &str, name: Option<&str>) {
        let store = session_store();
        store.set_token(role, token);
        if let Some(name) = name {
            store.set_display_name(role, name);
        }
        self.tokens[slot(role)] = Some(token.to_string());
        self.names[slot(role)] = name.map(str::to_string);
    }

    pub fn logout(&mut self, role: Role) {
        session_store().clear_session(role);
        self.tokens[slot(role)] = None;
        self.names[slot(role)] = None;
    }

    /// React to a 401: drop the role's token and return to its login page.
    pub fn expire(&mut self, role: Role) {
        self.logout(role);
        redirect(role.login_route());
    }
}

/// Get the current session state.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal.
/// Wrap the app with this component (together with [`crate::ToastProvider`]).
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::load);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// An [`api::ApiClient`] carrying the role's token, or `None` when the role
/// is not logged in — callers redirect to login in that case.
pub fn client_for(session: &Session, role: Role) -> Option<api::ApiClient> {
    let base = store::PortalConfig::default();
    let client = api::ApiClient::new(base.api_base_url());
    session.token(role).map(|token| client.with_token(token))
}

/// Full-page navigation. Used where the router is not in scope (401 handling
/// can fire from any component tree).
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("redirect to {path}");
    }
}

/// Shared failure handling for authenticated calls: a 401 expires the role's
/// session, everything else becomes an error toast.
pub fn handle_api_error(
    session: &mut Signal<Session>,
    toasts: &mut Signal<Toasts>,
    role: Role,
    err: &api::ApiError,
) {
    if err.is_unauthorized() {
        push_toast(toasts, ToastLevel::Error, "Session expired. Please log in again.");
        session.write().expire(role);
    } else {
        push_toast(toasts, ToastLevel::Error, &err.to_string());
    }
}
