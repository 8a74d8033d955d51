use std::collections::HashSet;

use dioxus::prelude::*;

use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

/// Course registration: tick courses from the department/level catalogue and
/// submit them for admin approval. Already-submitted courses show their
/// approval status and cannot be re-ticked.
#[component]
pub fn StudentCourses() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut selected = use_signal(HashSet::<String>::new);
    let mut busy = use_signal(|| false);

    let matching = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.matching_courses().await)
    });

    let mut submitted = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.submitted_courses().await)
    });

    let submitted_ids: HashSet<String> = match &*submitted.read() {
        Some(Some(Ok(entries))) => entries
            .iter()
            .filter_map(|e| e.course.as_ref().map(|c| c.id.clone()))
            .collect(),
        _ => HashSet::new(),
    };

    let submit = move |_| {
        if busy() {
            return;
        }
        let course_ids: Vec<String> = selected().iter().cloned().collect();
        if course_ids.is_empty() {
            push_toast(&mut toasts, ToastLevel::Warning, "Select at least one course");
            return;
        }

        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Student) else {
                busy.set(false);
                return;
            };
            match client.submit_courses(&course_ids).await {
                Ok(()) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Courses submitted for approval",
                    );
                    selected.write().clear();
                    submitted.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Student, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Course Registration" }

            h3 { "Available courses" }
            match &*matching.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(courses))) => {
                    if courses.is_empty() {
                        rsx! { p { class: "section-empty", "No courses match your department and level yet." } }
                    } else {
                        // Recomputed every render from the ticked set; never stored.
                        let selected_units: u32 = courses
                            .iter()
                            .filter(|c| selected.read().contains(&c.id))
                            .filter_map(|c| c.unit)
                            .sum();
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "" }
                                        th { "Code" }
                                        th { "Title" }
                                        th { "Unit" }
                                        th { "Semester" }
                                    }
                                }
                                tbody {
                                    for course in courses.iter().cloned() {
                                        {
                                            let id = course.id.clone();
                                            let already = submitted_ids.contains(&id);
                                            let ticked = already || selected.read().contains(&id);
                                            rsx! {
                                                tr {
                                                    key: "{course.id}",
                                                    td {
                                                        input {
                                                            r#type: "checkbox",
                                                            checked: ticked,
                                                            disabled: already,
                                                            onchange: move |evt| {
                                                                let mut set = selected.write();
                                                                if evt.checked() {
                                                                    set.insert(id.clone());
                                                                } else {
                                                                    set.remove(&id);
                                                                }
                                                            },
                                                        }
                                                    }
                                                    td { {course.code.as_deref().unwrap_or("-")} }
                                                    td { "{course.display_title()}" }
                                                    td { {course.unit.map(|u| u.to_string()).unwrap_or_else(|| "-".into())} }
                                                    td { {course.semester.as_deref().unwrap_or("-")} }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            if !selected.read().is_empty() {
                                p { class: "auth-hint", "Total units selected: {selected_units}" }
                            }
                            button {
                                class: "btn btn-primary",
                                disabled: busy() || selected.read().is_empty(),
                                onclick: submit,
                                if busy() { "Submitting..." } else { "Submit selected courses" }
                            }
                        }
                    }
                }
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }

            h3 { "Submitted courses" }
            match &*submitted.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(entries))) => {
                    if entries.is_empty() {
                        rsx! { p { class: "section-empty", "Nothing submitted yet." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Code" }
                                        th { "Title" }
                                        th { "Status" }
                                    }
                                }
                                tbody {
                                    for entry in entries.iter() {
                                        tr {
                                            td {
                                                {entry.course.as_ref().and_then(|c| c.code.as_deref()).unwrap_or("-")}
                                            }
                                            td {
                                                {entry.course.as_ref().map(|c| c.display_title()).unwrap_or("-")}
                                            }
                                            td {
                                                span {
                                                    class: "status status--{entry.status()}",
                                                    "{entry.status()}"
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
