use dioxus::prelude::*;

use api::AssignmentDraft;
use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, required, use_session, use_toasts, FieldErrors,
    LoadingSpinner, ToastLevel,
};

/// Assignment management: create and delete per-course assignments, browse
/// each assignment's submissions and enter grades.
#[component]
pub fn TeacherAssignments() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut selected_course = use_signal(|| None::<String>);
    let mut selected_assignment = use_signal(|| None::<String>);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut deadline = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);
    let mut grade_drafts = use_signal(std::collections::HashMap::<String, String>::new);

    let courses = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.teacher_courses().await)
    });

    let course_id = selected_course();
    let mut assignments = use_resource(use_reactive!(|course_id| async move {
        let id = course_id?;
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.course_assignments(&id).await)
    }));

    let assignment_id = selected_assignment();
    let mut submissions = use_resource(use_reactive!(|assignment_id| async move {
        let id = assignment_id?;
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.assignment_submissions(&id).await)
    }));

    let create = move |_| {
        if busy() {
            return;
        }
        let Some(course_id) = selected_course() else {
            push_toast(&mut toasts, ToastLevel::Warning, "Pick a course first");
            return;
        };
        let title_value = title().trim().to_string();
        {
            let mut errs = errors.write();
            errs.check("title", required(&title_value, "Title"));
            if !errs.is_empty() {
                return;
            }
        }

        let draft = AssignmentDraft {
            course_id,
            title: title_value,
            description: non_empty(&description()),
            deadline: non_empty(&deadline()),
        };

        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Teacher) else {
                busy.set(false);
                return;
            };
            match client.create_assignment(&draft).await {
                Ok(_) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Assignment created");
                    title.set(String::new());
                    description.set(String::new());
                    deadline.set(String::new());
                    assignments.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
            busy.set(false);
        });
    };

    let mut delete = move |id: String| {
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Teacher) else {
                return;
            };
            match client.delete_assignment(&id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Assignment deleted");
                    assignments.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
        });
    };

    let mut grade = move |submission_id: String| {
        let raw = grade_drafts
            .read()
            .get(&submission_id)
            .cloned()
            .unwrap_or_default();
        let Ok(value) = raw.trim().parse::<f64>() else {
            push_toast(&mut toasts, ToastLevel::Error, "Enter a numeric grade");
            return;
        };
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Teacher) else {
                return;
            };
            match client.grade_submission(&submission_id, value).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Grade saved");
                    submissions.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Assignments" }

            match &*courses.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(list))) => rsx! {
                    div {
                        class: "course-tabs",
                        for course in list.iter().cloned() {
                            {
                                let is_active = selected_course.read().as_deref() == Some(course.id.as_str());
                                let label = course
                                    .code
                                    .clone()
                                    .unwrap_or_else(|| course.display_title().to_string());
                                rsx! {
                                    button {
                                        key: "{course.id}",
                                        class: if is_active { "course-tab course-tab--active" } else { "course-tab" },
                                        onclick: move |_| {
                                            selected_assignment.set(None);
                                            selected_course.set(Some(course.id.clone()));
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }

            if selected_course.read().is_some() {
                form {
                    class: "assignment-form",
                    onsubmit: create,

                    h3 { "New assignment" }
                    label {
                        class: "auth-field",
                        span { "Title" }
                        input {
                            value: title(),
                            oninput: move |evt| {
                                title.set(evt.value());
                                errors.write().clear("title");
                            },
                        }
                        if let Some(msg) = errors.read().get("title") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                    label {
                        class: "auth-field",
                        span { "Description" }
                        textarea {
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    label {
                        class: "auth-field",
                        span { "Deadline" }
                        input {
                            r#type: "date",
                            value: deadline(),
                            oninput: move |evt| deadline.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Creating..." } else { "Create assignment" }
                    }
                }

                match &*assignments.read() {
                    None => rsx! { LoadingSpinner {} },
                    Some(Some(Ok(list))) => {
                        if list.is_empty() {
                            rsx! { p { class: "section-empty", "No assignments in this course yet." } }
                        } else {
                            rsx! {
                                ul {
                                    class: "plain-list",
                                    for assignment in list.iter().cloned() {
                                        {
                                            let is_open = selected_assignment.read().as_deref()
                                                == Some(assignment.id.as_str());
                                            let toggle_id = assignment.id.clone();
                                            let delete_id = assignment.id.clone();
                                            rsx! {
                                                li {
                                                    key: "{assignment.id}",
                                                    strong { {assignment.title.as_deref().unwrap_or("Untitled")} }
                                                    if let Some(deadline) = assignment.deadline.as_ref() {
                                                        span { class: "deadline", " due {deadline}" }
                                                    }
                                                    button {
                                                        class: "btn btn-secondary btn-small",
                                                        onclick: move |_| {
                                                            let next = if is_open { None } else { Some(toggle_id.clone()) };
                                                            selected_assignment.set(next);
                                                        },
                                                        if is_open { "Hide submissions" } else { "View submissions" }
                                                    }
                                                    button {
                                                        class: "btn btn-danger btn-small",
                                                        onclick: move |_| delete(delete_id.clone()),
                                                        "Delete"
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

                if selected_assignment.read().is_some() {
                    h3 { "Submissions" }
                    match &*submissions.read() {
                        None => rsx! { LoadingSpinner {} },
                        Some(Some(Ok(subs))) => {
                            if subs.is_empty() {
                                rsx! { p { class: "section-empty", "No submissions yet." } }
                            } else {
                                rsx! {
                                    div {
                                        class: "submission-list",
                                        for sub in subs.iter().cloned() {
                                            {
                                                let id = sub.id.clone();
                                                let draft_id = id.clone();
                                                let current = grade_drafts
                                                    .read()
                                                    .get(&id)
                                                    .cloned()
                                                    .unwrap_or_else(|| {
                                                        sub.score.map(|g| format!("{g}")).unwrap_or_default()
                                                    });
                                                let name = sub
                                                    .student_name()
                                                    .unwrap_or_else(|| "Unknown".to_string());
                                                let level = sub
                                                    .student_detail()
                                                    .and_then(|s| s.level.clone());
                                                let department = sub
                                                    .student_detail()
                                                    .and_then(|s| s.department.clone());
                                                rsx! {
                                                    div {
                                                        key: "{sub.id}",
                                                        class: "submission-card",
                                                        p {
                                                            strong { "Student: " }
                                                            "{name}"
                                                        }
                                                        p {
                                                            strong { "Level: " }
                                                            {level.as_deref().unwrap_or("-")}
                                                            strong { "  Department: " }
                                                            {department.as_deref().unwrap_or("-")}
                                                        }
                                                        if let Some(message) = sub.message.as_ref() {
                                                            p {
                                                                strong { "Message: " }
                                                                "{message}"
                                                            }
                                                        }
                                                        p {
                                                            strong { "Submitted: " }
                                                            {sub.submitted_at.as_deref().unwrap_or("-")}
                                                        }
                                                        for url in sub.file_urls.iter() {
                                                            a { href: "{url}", target: "_blank", "View / download file" }
                                                        }
                                                        div {
                                                            class: "grade-entry",
                                                            label { "Score:" }
                                                            input {
                                                                class: "score-input",
                                                                inputmode: "decimal",
                                                                value: current,
                                                                oninput: move |evt| {
                                                                    grade_drafts.write().insert(draft_id.clone(), evt.value());
                                                                },
                                                            }
                                                            span { "/100" }
                                                            button {
                                                                class: "btn btn-secondary btn-small",
                                                                onclick: move |_| grade(id.clone()),
                                                                if sub.score.is_some() { "Update" } else { "Save" }
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
                }
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
