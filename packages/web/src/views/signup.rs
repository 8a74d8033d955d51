//! Per-role registration pages. The backend assigns student IDs and marks
//! teachers pending approval; a successful signup lands back on the role's
//! login page.

use dioxus::prelude::*;

use api::{ApiClient, SignupRequest};
use store::{PortalConfig, Role};
use ui::{push_toast, required, use_toasts, valid_email, FieldErrors, ToastLevel};

#[component]
pub fn SignupStudent() -> Element {
    rsx! { Signup { role: Role::Student } }
}

#[component]
pub fn SignupTeacher() -> Element {
    rsx! { Signup { role: Role::Teacher } }
}

#[component]
pub fn SignupAdmin() -> Element {
    rsx! { Signup { role: Role::Admin } }
}

#[component]
fn Signup(role: Role) -> Element {
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut level = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }

        let first = first_name().trim().to_string();
        let last = last_name().trim().to_string();
        let email_value = email().trim().to_string();
        let pw_value = password();
        let dept = department().trim().to_string();
        let level_value = level().trim().to_string();
        let title_value = title().trim().to_string();

        {
            let mut errs = errors.write();
            errs.check("firstname", required(&first, "First name"));
            errs.check("lastname", required(&last, "Last name"));
            errs.check("email", valid_email(&email_value));
            errs.check("password", required(&pw_value, "Password"));
            if role == Role::Student {
                errs.check("department", required(&dept, "Department"));
                errs.check("level", required(&level_value, "Level"));
            }
            if !errs.is_empty() {
                return;
            }
        }

        busy.set(true);
        spawn(async move {
            let request = match role {
                Role::Student => SignupRequest {
                    firstname: Some(first),
                    lastname: Some(last),
                    email: email_value,
                    password: pw_value,
                    department: Some(dept),
                    level: Some(level_value),
                    ..Default::default()
                },
                Role::Teacher => SignupRequest {
                    firstname: Some(first),
                    lastname: Some(last),
                    email: email_value,
                    password: pw_value,
                    department: (!dept.is_empty()).then_some(dept),
                    title: (!title_value.is_empty()).then_some(title_value),
                    ..Default::default()
                },
                Role::Admin => SignupRequest {
                    full_name: Some(format!("{first} {last}")),
                    email: email_value,
                    password: pw_value,
                    ..Default::default()
                },
            };

            let client = ApiClient::new(PortalConfig::default().api_base_url());
            match client.signup(role, &request).await {
                Ok(ack) => {
                    let message = ack
                        .message
                        .unwrap_or_else(|| "Account created. You can log in now.".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    nav.push(role.login_route());
                }
                Err(err) => {
                    push_toast(&mut toasts, ToastLevel::Error, &err.to_string());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: submit,

                h1 { "{role.label()} Sign Up" }

                div {
                    class: "auth-row",
                    label {
                        class: "auth-field",
                        span { "First name" }
                        input {
                            value: first_name(),
                            oninput: move |evt| {
                                first_name.set(evt.value());
                                errors.write().clear("firstname");
                            },
                        }
                        if let Some(msg) = errors.read().get("firstname") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                    label {
                        class: "auth-field",
                        span { "Last name" }
                        input {
                            value: last_name(),
                            oninput: move |evt| {
                                last_name.set(evt.value());
                                errors.write().clear("lastname");
                            },
                        }
                        if let Some(msg) = errors.read().get("lastname") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                }

                label {
                    class: "auth-field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        value: email(),
                        oninput: move |evt| {
                            email.set(evt.value());
                            errors.write().clear("email");
                        },
                    }
                    if let Some(msg) = errors.read().get("email") {
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

                if role == Role::Student {
                    div {
                        class: "auth-row",
                        label {
                            class: "auth-field",
                            span { "Department" }
                            input {
                                value: department(),
                                oninput: move |evt| {
                                    department.set(evt.value());
                                    errors.write().clear("department");
                                },
                            }
                            if let Some(msg) = errors.read().get("department") {
                                span { class: "field-error", "{msg}" }
                            }
                        }
                        label {
                            class: "auth-field",
                            span { "Level" }
                            input {
                                placeholder: "e.g. 200",
                                value: level(),
                                oninput: move |evt| {
                                    level.set(evt.value());
                                    errors.write().clear("level");
                                },
                            }
                            if let Some(msg) = errors.read().get("level") {
                                span { class: "field-error", "{msg}" }
                            }
                        }
                    }
                }

                if role == Role::Teacher {
                    div {
                        class: "auth-row",
                        label {
                            class: "auth-field",
                            span { "Department (optional)" }
                            input {
                                value: department(),
                                oninput: move |evt| department.set(evt.value()),
                            }
                        }
                        label {
                            class: "auth-field",
                            span { "Title (optional)" }
                            input {
                                placeholder: "e.g. Dr.",
                                value: title(),
                                oninput: move |evt| title.set(evt.value()),
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Creating account..." } else { "Sign up" }
                }

                div {
                    class: "auth-links",
                    Link { to: role.login_route(), "Already have an account? Log in" }
                }
            }
        }
    }
}
