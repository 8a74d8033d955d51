//! Per-role login pages. Students sign in with their student ID, staff and
//! admins with email. Validation failures keep the submit local; nothing is
//! sent until every field passes.

use dioxus::prelude::*;

use api::{ApiClient, ApiError, Credentials};
use store::{PortalConfig, Role};
use ui::{
    push_toast, required, use_session, use_toasts, valid_email, FieldErrors, ToastLevel,
};

#[component]
pub fn LoginStudent() -> Element {
    rsx! { Login { role: Role::Student } }
}

#[component]
pub fn LoginTeacher() -> Element {
    rsx! { Login { role: Role::Teacher } }
}

#[component]
pub fn LoginAdmin() -> Element {
    rsx! { Login { role: Role::Admin } }
}

#[component]
fn Login(role: Role) -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    // Already signed in for this role: straight to the dashboard.
    if session.read().is_logged_in(role) {
        nav.replace(role.dashboard_route());
        return rsx! {};
    }

    let id_label = match role {
        Role::Student => "Student ID",
        Role::Teacher | Role::Admin => "Email",
    };
    let id_field = match role {
        Role::Student => "studentId",
        Role::Teacher | Role::Admin => "email",
    };

    let submit = move |_| {
        if busy() {
            return;
        }

        let id_value = identifier();
        let pw_value = password();
        {
            let mut errs = errors.write();
            match role {
                Role::Student => errs.check(id_field, required(&id_value, id_label)),
                Role::Teacher | Role::Admin => errs.check(id_field, valid_email(&id_value)),
            }
            errs.check("password", required(&pw_value, "Password"));
            if !errs.is_empty() {
                return;
            }
        }

        busy.set(true);
        spawn(async move {
            let credentials = match role {
                Role::Student => Credentials::Student {
                    student_id: id_value.trim().to_string(),
                    password: pw_value,
                },
                Role::Teacher | Role::Admin => Credentials::Email {
                    email: id_value.trim().to_string(),
                    password: pw_value,
                },
            };

            let client = ApiClient::new(PortalConfig::default().api_base_url());
            match client.login(role, &credentials).await {
                Ok(response) => {
                    session
                        .write()
                        .login(role, &response.token, response.display_name());
                    push_toast(&mut toasts, ToastLevel::Success, "Welcome back!");
                    nav.push(role.dashboard_route());
                }
                Err(err @ (ApiError::Unauthorized | ApiError::Forbidden { .. })) => {
                    let message = match &err {
                        ApiError::Forbidden { message: Some(m) } => m.clone(),
                        _ => "Invalid credentials".to_string(),
                    };
                    push_toast(&mut toasts, ToastLevel::Error, &message);
                }
                Err(err) => {
                    push_toast(&mut toasts, ToastLevel::Error, &err.to_string());
                }
            }
            busy.set(false);
        });
    };

    let signup_path = match role {
        Role::Student => "/signup-student",
        Role::Teacher => "/signup-teacher",
        Role::Admin => "/signup-superadmin",
    };
    let forgot_path = format!("/{}/forgot-password", role_segment(role));

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: submit,

                h1 { "{role.label()} Login" }

                label {
                    class: "auth-field",
                    span { "{id_label}" }
                    input {
                        r#type: if role == Role::Student { "text" } else { "email" },
                        value: identifier(),
                        oninput: move |evt| {
                            identifier.set(evt.value());
                            errors.write().clear(id_field);
                        },
                    }
                    if let Some(msg) = errors.read().get(id_field) {
                        span { class: "field-error", "{msg}" }
                    }
                }

                label {
                    class: "auth-field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        oninput: move |evt| {
                            password.set(evt.value());
                            errors.write().clear("password");
                        },
                    }
                    if let Some(msg) = errors.read().get("password") {
                        span { class: "field-error", "{msg}" }
                    }
                }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Log in" }
                }

                div {
                    class: "auth-links",
                    Link { to: "{forgot_path}", "Forgot password?" }
                    Link { to: "{signup_path}", "Create an account" }
                }
            }
        }
    }
}

pub(crate) fn role_segment(role: Role) -> &'static str {
    match role {
        Role::Student => "student",
        Role::Teacher => "teacher",
        Role::Admin => "superadmin",
    }
}
