use dioxus::prelude::*;

use api::models::{Course, StudentSummary};
use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

/// Student administration: the roster, course-registration approvals (whole
/// registration or one course at a time), result review and release, and
/// account removal.
#[component]
pub fn AdminStudents() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut selected = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let mut students = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.list_students(Role::Admin).await)
    });

    // Registrations embed course ids; the catalogue supplies the titles.
    let catalogue = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.admin_courses().await)
    });

    let selected_id = selected();
    let mut results = use_resource(use_reactive!(|selected_id| async move {
        let id = selected_id?;
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.student_results(&id).await)
    }));

    let selected_student: Option<StudentSummary> = match &*students.read() {
        Some(Some(Ok(roster))) => selected
            .read()
            .as_ref()
            .and_then(|id| roster.iter().find(|s| &s.id == id).cloned()),
        _ => None,
    };
    let catalogue_list: Vec<Course> = match &*catalogue.read() {
        Some(Some(Ok(list))) => list.clone(),
        _ => Vec::new(),
    };

    let mut approve_courses = move |student_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.approve_all_courses(&student_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Course registration approved");
                    students.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    let mut approve_results = move |student_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.approve_results(&student_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Results approved and released");
                    results.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    let mut approve_one = move |student_id: String, course_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.approve_course(&student_id, &course_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Course approved");
                    students.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    let mut reject_one = move |student_id: String, course_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.reject_course(&student_id, &course_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Course rejected");
                    students.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    let mut remove = move |student_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.delete_student(&student_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Student removed");
                    selected.set(None);
                    students.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Students" }

            match &*students.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(roster))) => {
                    if roster.is_empty() {
                        rsx! { p { class: "section-empty", "No students registered yet." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Student ID" }
                                        th { "Department" }
                                        th { "Level" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for student in roster.iter().cloned() {
                                        {
                                            let approve_id = student.id.clone();
                                            let results_id = student.id.clone();
                                            let delete_id = student.id.clone();
                                            rsx! {
                                                tr {
                                                    key: "{student.id}",
                                                    td { "{student.full_name()}" }
                                                    td { {student.student_id.as_deref().unwrap_or("-")} }
                                                    td { {student.department.as_deref().unwrap_or("-")} }
                                                    td { {student.level.as_deref().unwrap_or("-")} }
                                                    td {
                                                        class: "row-actions",
                                                        button {
                                                            class: "btn btn-secondary btn-small",
                                                            disabled: busy(),
                                                            onclick: move |_| approve_courses(approve_id.clone()),
                                                            "Approve courses"
                                                        }
                                                        button {
                                                            class: "btn btn-secondary btn-small",
                                                            onclick: move |_| selected.set(Some(results_id.clone())),
                                                            "Details"
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

            if let Some(student_id) = selected() {
                if let Some(student) = selected_student.as_ref() {
                    h3 { "Submitted courses" }
                    if student.courses.is_empty() {
                        p { class: "section-empty", "No courses submitted yet." }
                    } else {
                        ul {
                            class: "plain-list",
                            for registration in student.courses.iter().cloned() {
                                {
                                    let course_id = registration.course.clone().unwrap_or_default();
                                    let label = course_label(&catalogue_list, &course_id);
                                    let status = registration.status().to_string();
                                    let approve_sid = student.id.clone();
                                    let approve_cid = course_id.clone();
                                    let reject_sid = student.id.clone();
                                    let reject_cid = course_id.clone();
                                    rsx! {
                                        li {
                                            key: "{course_id}",
                                            span { "{label}" }
                                            span {
                                                class: "status status--{status}",
                                                "{status}"
                                            }
                                            if registration.is_pending() {
                                                button {
                                                    class: "btn btn-secondary btn-small",
                                                    disabled: busy(),
                                                    onclick: move |_| approve_one(approve_sid.clone(), approve_cid.clone()),
                                                    "Approve"
                                                }
                                                button {
                                                    class: "btn btn-danger btn-small",
                                                    disabled: busy(),
                                                    onclick: move |_| reject_one(reject_sid.clone(), reject_cid.clone()),
                                                    "Reject"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                h3 { "Submitted results" }
                match &*results.read() {
                    None => rsx! { LoadingSpinner {} },
                    Some(Some(Ok(entries))) => {
                        if entries.is_empty() {
                            rsx! { p { class: "section-empty", "This student has no submitted results." } }
                        } else {
                            rsx! {
                                table {
                                    class: "data-table",
                                    thead {
                                        tr {
                                            th { "Course" }
                                            th { "Score" }
                                            th { "Grade" }
                                            th { "Point" }
                                            th { "Semester" }
                                        }
                                    }
                                    tbody {
                                        for entry in entries.iter() {
                                            tr {
                                                td { {entry.code.as_deref().unwrap_or("-")} }
                                                td { {entry.score.map(|s| format!("{s}")).unwrap_or_else(|| "-".into())} }
                                                td { {entry.grade.as_deref().unwrap_or("-")} }
                                                td { {entry.point.map(|p| format!("{p}")).unwrap_or_else(|| "-".into())} }
                                                td { {entry.semester.as_deref().unwrap_or("-")} }
                                            }
                                        }
                                    }
                                }
                                button {
                                    class: "btn btn-primary",
                                    disabled: busy(),
                                    onclick: move |_| approve_results(student_id.clone()),
                                    "Approve and release results"
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

/// Human label for a registered course id, from the admin catalogue. Falls
/// back to the raw id when the catalogue has no such course.
fn course_label(catalogue: &[Course], course_id: &str) -> String {
    match catalogue.iter().find(|c| c.id == course_id) {
        Some(course) => match course.code.as_deref() {
            Some(code) => format!("{code} - {}", course.display_title()),
            None => course.display_title().to_string(),
        },
        None => course_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<Course> {
        serde_json::from_str(
            r#"[
                { "_id": "c1", "code": "CSC301", "title": "Compilers" },
                { "_id": "c2", "title": "Thermodynamics" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn course_label_joins_code_and_title() {
        assert_eq!(course_label(&catalogue(), "c1"), "CSC301 - Compilers");
        assert_eq!(course_label(&catalogue(), "c2"), "Thermodynamics");
    }

    #[test]
    fn unknown_course_falls_back_to_the_raw_id() {
        assert_eq!(course_label(&catalogue(), "c9"), "c9");
    }
}
