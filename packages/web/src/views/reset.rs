//! The three-step password reset. The email entered on the forgot-password
//! page is stashed in the role's session store so the reset page, reached by
//! navigation or a fresh tab, still knows which account it is verifying.

use dioxus::prelude::*;

use api::ApiClient;
use store::{PortalConfig, Role};
use ui::{
    push_toast, required, session_store, use_toasts, valid_email, FieldErrors, ToastLevel,
};

use super::role_from_segment;

fn client() -> ApiClient {
    ApiClient::new(PortalConfig::default().api_base_url())
}

#[component]
pub fn ForgotPassword(role: String) -> Element {
    let role: Role = role_from_segment(&role);
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let mut email = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let email_value = email().trim().to_string();
        {
            let mut errs = errors.write();
            errs.check("email", valid_email(&email_value));
            if !errs.is_empty() {
                return;
            }
        }

        busy.set(true);
        spawn(async move {
            match client().forgot_password(role, &email_value).await {
                Ok(ack) => {
                    session_store().set_reset_email(role, &email_value);
                    let message = ack
                        .message
                        .unwrap_or_else(|| "A reset code has been sent to your email.".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    nav.push(format!("/{}/reset-password", super::login::role_segment(role)));
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

                h1 { "Forgot Password" }
                p { class: "auth-hint", "Enter your {role.label()} account email and we'll send a reset code." }

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

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Sending..." } else { "Send reset code" }
                }

                div {
                    class: "auth-links",
                    Link { to: role.login_route(), "Back to login" }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ResetStep {
    VerifyCode,
    NewPassword,
}

#[component]
pub fn ResetPassword(role: String) -> Element {
    let role: Role = role_from_segment(&role);
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let email = use_signal(|| session_store().reset_email(role).unwrap_or_default());
    let mut step = use_signal(|| ResetStep::VerifyCode);
    let mut code = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    // No stashed email means the user skipped the forgot-password step.
    if email().is_empty() {
        nav.replace(format!("/{}/forgot-password", super::login::role_segment(role)));
        return rsx! {};
    }

    let verify = move |_| {
        if busy() {
            return;
        }
        let code_value = code().trim().to_string();
        {
            let mut errs = errors.write();
            errs.check("code", required(&code_value, "Reset code"));
            if !errs.is_empty() {
                return;
            }
        }

        busy.set(true);
        spawn(async move {
            match client().verify_code(role, &email(), &code_value).await {
                Ok(_) => {
                    step.set(ResetStep::NewPassword);
                }
                Err(err) => {
                    push_toast(&mut toasts, ToastLevel::Error, &err.to_string());
                }
            }
            busy.set(false);
        });
    };

    let reset = move |_| {
        if busy() {
            return;
        }
        let pw_value = new_password();
        let confirm_value = confirm();
        {
            let mut errs = errors.write();
            errs.check("password", required(&pw_value, "New password"));
            let mismatch = (!confirm_value.is_empty() || !pw_value.is_empty())
                && pw_value != confirm_value;
            errs.check(
                "confirm",
                mismatch.then(|| "Passwords do not match".to_string()),
            );
            if !errs.is_empty() {
                return;
            }
        }

        busy.set(true);
        spawn(async move {
            match client().reset_password(role, &email(), &pw_value).await {
                Ok(ack) => {
                    session_store().clear_reset_email(role);
                    let message = ack
                        .message
                        .unwrap_or_else(|| "Password updated. Log in with it now.".to_string());
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
            match step() {
                ResetStep::VerifyCode => rsx! {
                    form {
                        class: "auth-card",
                        onsubmit: verify,

                        h1 { "Enter Reset Code" }
                        p { class: "auth-hint", "We emailed a code to {email}." }

                        label {
                            class: "auth-field",
                            span { "Reset code" }
                            input {
                                inputmode: "numeric",
                                maxlength: 6,
                                value: code(),
                                oninput: move |evt| {
                                    code.set(evt.value());
                                    errors.write().clear("code");
                                },
                            }
                            if let Some(msg) = errors.read().get("code") {
                                span { class: "field-error", "{msg}" }
                            }
                        }

                        button {
                            class: "btn btn-primary auth-submit",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Verifying..." } else { "Verify code" }
                        }
                    }
                },
                ResetStep::NewPassword => rsx! {
                    form {
                        class: "auth-card",
                        onsubmit: reset,

                        h1 { "Set New Password" }

                        label {
                            class: "auth-field",
                            span { "New password" }
                            input {
                                r#type: "password",
                                value: new_password(),
                                oninput: move |evt| {
                                    new_password.set(evt.value());
                                    errors.write().clear("password");
                                },
                            }
                            if let Some(msg) = errors.read().get("password") {
                                span { class: "field-error", "{msg}" }
                            }
                        }

                        label {
                            class: "auth-field",
                            span { "Confirm password" }
                            input {
                                r#type: "password",
                                value: confirm(),
                                oninput: move |evt| {
                                    confirm.set(evt.value());
                                    errors.write().clear("confirm");
                                },
                            }
                            if let Some(msg) = errors.read().get("confirm") {
                                span { class: "field-error", "{msg}" }
                            }
                        }

                        button {
                            class: "btn btn-primary auth-submit",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Saving..." } else { "Reset password" }
                        }
                    }
                },
            }
        }
    }
}
