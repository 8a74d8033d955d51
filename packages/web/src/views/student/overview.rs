use dioxus::prelude::*;

use store::Role;
use ui::{client_for, use_session, LoadingSpinner};

/// Landing section: profile summary plus the dashboard counters. The three
/// fetches are independent; one failing leaves the others rendered.
#[component]
pub fn StudentOverview() -> Element {
    let session = use_session();

    let info = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.student_info().await)
    });

    let stats = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.student_stats().await)
    });

    rsx! {
        div {
            class: "section",
            h2 { "Overview" }

            match &*info.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(info))) => rsx! {
                    div {
                        class: "profile-summary",
                        if let Some(pic) = info.profilepic.as_ref() {
                            img { class: "avatar", src: "{pic}", alt: "Profile photo" }
                        }
                        div {
                            h3 { {info.full_name.as_deref().unwrap_or("Student")} }
                            p { "Student ID: " {info.student_id.as_deref().unwrap_or("-")} }
                            p {
                                {info.department.as_deref().unwrap_or("-")}
                                " / Level "
                                {info.level.as_deref().unwrap_or("-")}
                            }
                            if let Some(cgpa) = info.cgpa {
                                p { class: "cgpa", "CGPA: {cgpa:.2}" }
                            }
                            if let Some(status) = info.payment_status.as_ref() {
                                p { "Fees: {status}" }
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
                            span { class: "stat-value", "{stats.enrolled_courses}" }
                            span { class: "stat-label", "Enrolled courses" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.completed_exams}" }
                            span { class: "stat-label", "Completed exams" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.upcoming_exams}" }
                            span { class: "stat-label", "Upcoming exams" }
                        }
                        if let Some(attendance) = stats.attendance.as_ref() {
                            div {
                                class: "stat-card",
                                span { class: "stat-value", "{attendance}" }
                                span { class: "stat-label", "Attendance" }
                            }
                        }
                    }
                },
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }
        }
    }
}
