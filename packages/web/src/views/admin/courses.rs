use dioxus::prelude::*;

use api::CourseDraft;
use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, required, use_session, use_toasts, FieldErrors,
    LoadingSpinner, ToastLevel,
};

/// The course catalogue: create, edit and delete. Selecting a row loads it
/// into the form; saving with a selection is an edit, without one a create.
#[component]
pub fn AdminCourses() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut editing = use_signal(|| None::<String>);
    let mut code = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut unit = use_signal(String::new);
    let mut level = use_signal(String::new);
    let mut semester = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    let mut catalogue = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.admin_courses().await)
    });

    let mut clear_form = move || {
        editing.set(None);
        code.set(String::new());
        title.set(String::new());
        unit.set(String::new());
        level.set(String::new());
        semester.set(String::new());
        department.set(String::new());
        errors.set(FieldErrors::new());
    };

    let save = move |_| {
        if busy() {
            return;
        }
        let code_value = code().trim().to_string();
        let title_value = title().trim().to_string();
        let unit_raw = unit().trim().to_string();
        {
            let mut errs = errors.write();
            errs.check("code", required(&code_value, "Course code"));
            errs.check("title", required(&title_value, "Title"));
            let unit_err = if unit_raw.is_empty() {
                Some("Unit is required".to_string())
            } else if unit_raw.parse::<u32>().is_err() {
                Some("Unit must be a number".to_string())
            } else {
                None
            };
            errs.check("unit", unit_err);
            if !errs.is_empty() {
                return;
            }
        }

        let draft = CourseDraft {
            code: code_value,
            title: title_value,
            unit: unit_raw.parse().unwrap_or(0),
            level: non_empty(&level()),
            semester: non_empty(&semester()),
            department: non_empty(&department()),
        };
        let target = editing();

        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            let outcome = match &target {
                Some(id) => client.update_course(id, &draft).await.map(|()| None),
                None => client.create_course(&draft).await.map(|ack| ack.message),
            };
            match outcome {
                Ok(message) => {
                    let text = message.unwrap_or_else(|| {
                        if target.is_some() { "Course updated" } else { "Course created" }.to_string()
                    });
                    push_toast(&mut toasts, ToastLevel::Success, &text);
                    clear_form();
                    catalogue.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    let mut remove = move |course_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.delete_course(&course_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Course deleted");
                    catalogue.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Courses" }

            form {
                class: "assignment-form",
                onsubmit: save,

                h3 {
                    if editing.read().is_some() { "Edit course" } else { "New course" }
                }

                div {
                    class: "auth-row",
                    label {
                        class: "auth-field",
                        span { "Code" }
                        input {
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
                    label {
                        class: "auth-field",
                        span { "Unit" }
                        input {
                            inputmode: "numeric",
                            value: unit(),
                            oninput: move |evt| {
                                unit.set(evt.value());
                                errors.write().clear("unit");
                            },
                        }
                        if let Some(msg) = errors.read().get("unit") {
                            span { class: "field-error", "{msg}" }
                        }
                    }
                }
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
                div {
                    class: "auth-row",
                    label {
                        class: "auth-field",
                        span { "Level" }
                        input {
                            placeholder: "e.g. 200",
                            value: level(),
                            oninput: move |evt| level.set(evt.value()),
                        }
                    }
                    label {
                        class: "auth-field",
                        span { "Semester" }
                        select {
                            value: semester(),
                            onchange: move |evt| semester.set(evt.value()),
                            option { value: "", "" }
                            option { value: "First", "First" }
                            option { value: "Second", "Second" }
                        }
                    }
                    label {
                        class: "auth-field",
                        span { "Department" }
                        input {
                            value: department(),
                            oninput: move |evt| department.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "row-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() {
                            "Saving..."
                        } else if editing.read().is_some() {
                            "Save changes"
                        } else {
                            "Create course"
                        }
                    }
                    if editing.read().is_some() {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| clear_form(),
                            "Cancel edit"
                        }
                    }
                }
            }

            match &*catalogue.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(courses))) => {
                    if courses.is_empty() {
                        rsx! { p { class: "section-empty", "The catalogue is empty." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Code" }
                                        th { "Title" }
                                        th { "Unit" }
                                        th { "Level" }
                                        th { "Semester" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for course in courses.iter().cloned() {
                                        {
                                            let edit_course = course.clone();
                                            let delete_id = course.id.clone();
                                            rsx! {
                                                tr {
                                                    key: "{course.id}",
                                                    td { {course.code.as_deref().unwrap_or("-")} }
                                                    td { "{course.display_title()}" }
                                                    td { {course.unit.map(|u| u.to_string()).unwrap_or_else(|| "-".into())} }
                                                    td { {course.level.as_deref().unwrap_or("-")} }
                                                    td { {course.semester.as_deref().unwrap_or("-")} }
                                                    td {
                                                        class: "row-actions",
                                                        button {
                                                            class: "btn btn-secondary btn-small",
                                                            onclick: move |_| {
                                                                editing.set(Some(edit_course.id.clone()));
                                                                code.set(edit_course.code.clone().unwrap_or_default());
                                                                title.set(edit_course.display_title().to_string());
                                                                unit.set(edit_course.unit.map(|u| u.to_string()).unwrap_or_default());
                                                                level.set(edit_course.level.clone().unwrap_or_default());
                                                                semester.set(edit_course.semester.clone().unwrap_or_default());
                                                                department.set(edit_course.department.clone().unwrap_or_default());
                                                            },
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-danger btn-small",
                                                            disabled: busy(),
                                                            onclick: move |_| remove(delete_id.clone()),
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
                    }
                }
                Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                Some(None) => rsx! {},
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
