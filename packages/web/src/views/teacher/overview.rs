use dioxus::prelude::*;

use store::Role;
use ui::{client_for, use_session, LoadingSpinner};

#[component]
pub fn TeacherOverview() -> Element {
    let session = use_session();

    let profile = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.teacher_profile().await)
    });

    let stats = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.teacher_stats().await)
    });

    rsx! {
        div {
            class: "section",
            h2 { "Overview" }

            match &*profile.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(profile))) => rsx! {
                    div {
                        class: "profile-summary",
                        div {
                            h3 { "{profile.full_name()}" }
                            p { {profile.department.as_deref().unwrap_or("-")} }
                            if let Some(status) = profile.status.as_ref() {
                                p {
                                    "Account status: "
                                    span { class: "status status--{status}", "{status}" }
                                }
                            }
                        }
                    }
                },
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }

            match &*stats.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(stats))) => rsx! {
                    div {
                        class: "stat-cards",
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.total_classes}" }
                            span { class: "stat-label", "Classes" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.total_students}" }
                            span { class: "stat-label", "Students" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.submitted_assignments}" }
                            span { class: "stat-label", "Assignment submissions" }
                        }
                    }
                },
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }
        }
    }
}
