//! Paystack landing page. Paystack redirects here with `?reference=` after a
//! checkout; the reference is verified against the backend before anything is
//! shown as paid.

use dioxus::prelude::*;

use api::models::PaymentVerification;
use api::ApiError;
use store::Role;
use ui::{client_for, handle_api_error, use_session, use_toasts, LoadingSpinner};

/// `reference` from the current URL's query string.
fn payment_reference() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get("reference").filter(|r| !r.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
pub fn PaymentSuccess() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut toasts = use_toasts();

    let verification = use_resource(move || async move {
        let reference = payment_reference();
        let client = client_for(&session.read(), Role::Student);
        match (client, reference) {
            (Some(client), Some(reference)) => {
                Some(client.verify_paystack(&reference).await)
            }
            _ => None,
        }
    });

    if !session.read().is_logged_in(Role::Student) {
        nav.replace(Role::Student.login_route());
        return rsx! {};
    }

    let body = match &*verification.read() {
        None => rsx! { LoadingSpinner { label: "Verifying payment...".to_string() } },
        Some(None) => rsx! {
            h1 { "Missing payment reference" }
            p { "This page is only reachable from a Paystack checkout." }
        },
        Some(Some(Ok(PaymentVerification { status, message }))) => {
            let ok = status.as_deref() == Some("success");
            let heading = if ok { "Payment confirmed" } else { "Payment not confirmed" };
            let detail = message.clone().unwrap_or_else(|| {
                if ok {
                    "Your fees have been updated.".to_string()
                } else {
                    "The payment could not be verified. Contact support if you were debited.".to_string()
                }
            });
            rsx! {
                h1 { "{heading}" }
                p { "{detail}" }
            }
        }
        Some(Some(Err(err))) => {
            if matches!(err, ApiError::Unauthorized) {
                handle_api_error(&mut session, &mut toasts, Role::Student, err);
            }
            rsx! {
                h1 { "Verification failed" }
                p { "{err}" }
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                {body}
                Link {
                    class: "btn btn-primary auth-submit",
                    to: Role::Student.dashboard_route(),
                    "Back to dashboard"
                }
            }
        }
    }
}
