use dioxus::prelude::*;

use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, redirect, use_session, use_toasts, LoadingSpinner,
    ToastLevel,
};

use crate::views::files::{first_file, receipt_type_allowed};

/// Fee history plus the two ways to pay: Paystack checkout (full-page
/// redirect, verified on return by the payment-success page) or a bank
/// transfer receipt upload that an admin reviews manually.
#[component]
pub fn StudentPayments() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let mut payments = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.payments().await)
    });

    let pay_now = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Student) else {
                busy.set(false);
                return;
            };
            match client.initiate_paystack().await {
                Ok(init) => match init.authorization_url {
                    Some(url) => redirect(&url),
                    None => push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Payment could not be started. Try again later.",
                    ),
                },
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Student, &err),
            }
            busy.set(false);
        });
    };

    let upload_receipt = move |evt: FormEvent| {
        spawn(async move {
            let Some((name, mime, bytes)) = first_file(&evt).await else {
                return;
            };
            if !receipt_type_allowed(&mime) {
                push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Receipts must be an image or a PDF",
                );
                return;
            }
            busy.set(true);
            let Some(client) = client_for(&session.read(), Role::Student) else {
                busy.set(false);
                return;
            };
            match client.upload_transfer_receipt(&name, &mime, bytes).await {
                Ok(_) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Receipt uploaded for review");
                    payments.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Student, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Payments" }

            div {
                class: "payment-actions",
                button {
                    class: "btn btn-primary",
                    disabled: busy(),
                    onclick: pay_now,
                    if busy() { "Starting checkout..." } else { "Pay with Paystack" }
                }
                label {
                    class: "btn btn-secondary",
                    "Upload transfer receipt"
                    input {
                        r#type: "file",
                        accept: "image/*,.pdf",
                        class: "visually-hidden",
                        onchange: upload_receipt,
                    }
                }
            }

            match &*payments.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(history))) => {
                    if history.is_empty() {
                        rsx! { p { class: "section-empty", "No payment records yet." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Session" }
                                        th { "Level" }
                                        th { "Expected" }
                                        th { "Paid" }
                                        th { "Balance" }
                                        th { "Status" }
                                        th { "Receipt" }
                                    }
                                }
                                tbody {
                                    for payment in history.iter() {
                                        tr {
                                            td { {payment.session.as_deref().unwrap_or("-")} }
                                            td { {payment.level.as_deref().unwrap_or("-")} }
                                            td { {format!("{:.2}", payment.expected())} }
                                            td { {format!("{:.2}", payment.paid())} }
                                            td { {format!("{:.2}", payment.balance())} }
                                            td {
                                                span {
                                                    class: "status",
                                                    {payment.status.as_deref().unwrap_or("unpaid")}
                                                }
                                            }
                                            td {
                                                if let Some(url) = payment.receipt_url.as_ref() {
                                                    a { href: "{url}", target: "_blank", "View" }
                                                } else {
                                                    "-"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }
        }
    }
}
