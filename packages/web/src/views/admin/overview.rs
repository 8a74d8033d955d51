use dioxus::prelude::*;

use store::Role;
use ui::{client_for, use_session, LoadingSpinner};

#[component]
pub fn AdminOverview() -> Element {
    let session = use_session();

    let stats = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.admin_stats().await)
    });

    rsx! {
        div {
            class: "section",
            h2 { "Overview" }

            match &*stats.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(stats))) => rsx! {
                    div {
                        class: "stat-cards",
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.total_students}" }
                            span { class: "stat-label", "Students" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.total_teachers}" }
                            span { class: "stat-label", "Teachers" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.approved_teachers}" }
                            span { class: "stat-label", "Approved teachers" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", {format!("{:.2}", stats.total_revenue)} }
                            span { class: "stat-label", "Revenue" }
                        }
                    }
                },
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }
        }
    }
}
