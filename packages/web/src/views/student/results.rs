use dioxus::prelude::*;

use store::Role;
use ui::{client_for, use_session, LoadingSpinner};

/// Approved results only. Unapproved scores a teacher has entered are not
/// visible here until the admin publishes them.
#[component]
pub fn StudentResults() -> Element {
    let session = use_session();

    let results = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.approved_results().await)
    });

    rsx! {
        div {
            class: "section",
            h2 { "Results" }

            match &*results.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(approved))) => rsx! {
                    if let Some(cgpa) = approved.cgpa {
                        p { class: "cgpa", "CGPA: {cgpa:.2}" }
                    }

                    if approved.results.is_empty() {
                        p { class: "section-empty", "No approved results yet." }
                    } else {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Course" }
                                    th { "Score" }
                                    th { "Grade" }
                                    th { "Point" }
                                    th { "Unit" }
                                    th { "Semester" }
                                }
                            }
                            tbody {
                                for entry in approved.results.iter() {
                                    tr {
                                        td { {entry.code.as_deref().unwrap_or("-")} }
                                        td { {entry.score.map(|s| format!("{s}")).unwrap_or_else(|| "-".into())} }
                                        td { {entry.grade.as_deref().unwrap_or("-")} }
                                        td { {entry.point.map(|p| format!("{p}")).unwrap_or_else(|| "-".into())} }
                                        td { {entry.unit.map(|u| u.to_string()).unwrap_or_else(|| "-".into())} }
                                        td { {entry.semester.as_deref().unwrap_or("-")} }
                                    }
                                }
                            }
                        }
                    }

                    if !approved.outstanding_courses.is_empty() {
                        h3 { "Outstanding courses" }
                        ul {
                            class: "plain-list",
                            for course in approved.outstanding_courses.iter() {
                                li {
                                    {course.code.as_deref().unwrap_or("")}
                                    " "
                                    "{course.display_title()}"
                                }
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
