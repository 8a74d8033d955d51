use dioxus::prelude::*;

use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

use crate::views::files::first_file;

/// Open assignments with a one-file upload each, and the student's past
/// submissions with any grade the teacher has entered.
#[component]
pub fn StudentAssignments() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut uploading = use_signal(|| None::<String>);

    let assignments = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.student_assignments().await)
    });

    let mut submissions = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.student_submissions().await)
    });

    let submitted_for: Vec<String> = match &*submissions.read() {
        Some(Some(Ok(subs))) => subs
            .iter()
            .filter_map(|s| s.assignment_id.clone())
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "section",
            h2 { "Assignments" }

            match &*assignments.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(list))) => {
                    if list.is_empty() {
                        rsx! { p { class: "section-empty", "No assignments right now." } }
                    } else {
                        rsx! {
                            div {
                                class: "assignment-list",
                                for assignment in list.iter().cloned() {
                                    {
                                        let id = assignment.id.clone();
                                        let already = submitted_for.contains(&id);
                                        let in_flight = uploading.read().as_deref() == Some(id.as_str());
                                        rsx! {
                                            div {
                                                key: "{assignment.id}",
                                                class: "assignment-card",
                                                h3 { {assignment.title.as_deref().unwrap_or("Untitled assignment")} }
                                                if let Some(desc) = assignment.description.as_ref() {
                                                    p { "{desc}" }
                                                }
                                                if let Some(deadline) = assignment.deadline.as_ref() {
                                                    p { class: "deadline", "Due: {deadline}" }
                                                }
                                                for url in assignment.file_urls.iter() {
                                                    a { href: "{url}", target: "_blank", "Attachment" }
                                                }

                                                if already {
                                                    span { class: "status status--submitted", "Submitted" }
                                                } else if in_flight {
                                                    span { class: "status", "Uploading..." }
                                                } else {
                                                    label {
                                                        class: "btn btn-secondary",
                                                        "Upload answer"
                                                        input {
                                                            r#type: "file",
                                                            class: "visually-hidden",
                                                            onchange: move |evt| {
                                                                let id = id.clone();
                                                                spawn(async move {
                                                                    let Some((name, mime, bytes)) = first_file(&evt).await else {
                                                                        return;
                                                                    };
                                                                    uploading.set(Some(id.clone()));
                                                                    let Some(client) = client_for(&session.read(), Role::Student) else {
                                                                        uploading.set(None);
                                                                        return;
                                                                    };
                                                                    match client.submit_assignment(&id, &name, &mime, bytes).await {
                                                                        Ok(_) => {
                                                                            push_toast(&mut toasts, ToastLevel::Success, "Assignment submitted");
                                                                            submissions.restart();
                                                                        }
                                                                        Err(err) => handle_api_error(&mut session, &mut toasts, Role::Student, &err),
                                                                    }
                                                                    uploading.set(None);
                                                                });
                                                            },
                                                        }
                                                    }
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

            h3 { "My submissions" }
            match &*submissions.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(subs))) => {
                    if subs.is_empty() {
                        rsx! { p { class: "section-empty", "Nothing submitted yet." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Submitted" }
                                        th { "Status" }
                                        th { "Grade" }
                                        th { "Files" }
                                    }
                                }
                                tbody {
                                    for sub in subs.iter() {
                                        tr {
                                            td { {sub.submitted_at.as_deref().unwrap_or("-")} }
                                            td { {sub.status.as_deref().unwrap_or("pending")} }
                                            td {
                                                {sub.score.map(|g| format!("{g}")).unwrap_or_else(|| "-".into())}
                                            }
                                            td {
                                                for url in sub.file_urls.iter() {
                                                    a { href: "{url}", target: "_blank", "View" }
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
