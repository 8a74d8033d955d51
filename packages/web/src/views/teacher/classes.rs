use dioxus::prelude::*;

use api::models::Course;
use store::Role;
use ui::{
    client_for, grades::GradeSheet, handle_api_error, push_toast, use_session, use_toasts,
    LoadingSpinner, ToastLevel,
};

/// Class grading. Scores typed into the table derive their grade and point
/// immediately; the submit button stays disabled until every listed student
/// has a score, grade, point and semester.
#[component]
pub fn TeacherClasses() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut selected = use_signal(|| None::<Course>);
    let mut sheet = use_signal(GradeSheet::new);
    let mut busy = use_signal(|| false);

    let courses = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.teacher_courses().await)
    });

    let course_id = selected.read().as_ref().map(|c| c.id.clone());

    let roster = use_resource(use_reactive!(|course_id| async move {
        let id = course_id?;
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.course_students(&id).await)
    }));

    let existing_id = selected.read().as_ref().map(|c| c.id.clone());
    let mut existing = use_resource(use_reactive!(|existing_id| async move {
        let id = existing_id?;
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.submitted_results(&id).await)
    }));

    // When previously submitted results arrive, preload the sheet so edits
    // go up with mode "edit".
    use_effect(move || {
        if let Some(Some(Ok(results))) = &*existing.read() {
            sheet.write().load_existing(results);
        }
    });

    let student_ids: Vec<String> = match &*roster.read() {
        Some(Some(Ok(students))) => students.iter().map(|s| s.id.clone()).collect(),
        _ => Vec::new(),
    };
    let complete = sheet.read().is_complete(&student_ids);

    let submit = move |_| {
        if busy() {
            return;
        }
        let Some(course) = selected() else {
            return;
        };
        let records = sheet.read().to_records(course.unit, course.code.as_deref());
        if records.is_empty() {
            push_toast(&mut toasts, ToastLevel::Warning, "Nothing to submit yet");
            return;
        }

        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Teacher) else {
                busy.set(false);
                return;
            };
            match client.submit_results(&course.id, &records).await {
                Ok(ack) => {
                    let message = ack
                        .message
                        .unwrap_or_else(|| "Results submitted for approval".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    existing.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "My Classes" }

            match &*courses.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(list))) => {
                    if list.is_empty() {
                        rsx! { p { class: "section-empty", "No classes assigned to you yet." } }
                    } else {
                        rsx! {
                            div {
                                class: "course-tabs",
                                for course in list.iter().cloned() {
                                    {
                                        let is_active = selected.read().as_ref().map(|c| c.id.as_str())
                                            == Some(course.id.as_str());
                                        let label = course
                                            .code
                                            .clone()
                                            .unwrap_or_else(|| course.display_title().to_string());
                                        rsx! {
                                            button {
                                                key: "{course.id}",
                                                class: if is_active { "course-tab course-tab--active" } else { "course-tab" },
                                                onclick: move |_| {
                                                    sheet.set(GradeSheet::new());
                                                    selected.set(Some(course.clone()));
                                                },
                                                "{label}"
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

            if selected.read().is_some() {
                match &*roster.read() {
                    None => rsx! { LoadingSpinner {} },
                    Some(Some(Ok(students))) => {
                        if students.is_empty() {
                            rsx! { p { class: "section-empty", "No students registered for this course." } }
                        } else {
                            rsx! {
                                table {
                                    class: "data-table grade-table",
                                    thead {
                                        tr {
                                            th { "Student" }
                                            th { "Student ID" }
                                            th { "Score" }
                                            th { "Grade" }
                                            th { "Point" }
                                            th { "Semester" }
                                        }
                                    }
                                    tbody {
                                        for student in students.iter().cloned() {
                                            {
                                                let id = student.id.clone();
                                                let row = sheet.read().row(&id);
                                                let score_id = id.clone();
                                                let semester_id = id.clone();
                                                rsx! {
                                                    tr {
                                                        key: "{student.id}",
                                                        td { "{student.full_name()}" }
                                                        td { {student.student_id.as_deref().unwrap_or("-")} }
                                                        td {
                                                            input {
                                                                class: "score-input",
                                                                inputmode: "decimal",
                                                                value: row.score.clone(),
                                                                oninput: move |evt| {
                                                                    sheet.write().set_score(&score_id, &evt.value());
                                                                },
                                                            }
                                                        }
                                                        td { class: "derived-cell", "{row.grade}" }
                                                        td { class: "derived-cell", "{row.point}" }
                                                        td {
                                                            select {
                                                                value: row.semester.clone(),
                                                                onchange: move |evt| {
                                                                    sheet.write().set_semester(&semester_id, &evt.value());
                                                                },
                                                                option { value: "", "" }
                                                                option { value: "First", "First" }
                                                                option { value: "Second", "Second" }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }

                                button {
                                    class: "btn btn-primary",
                                    disabled: busy() || !complete,
                                    onclick: submit,
                                    if busy() { "Submitting..." } else { "Submit results" }
                                }
                                if !complete {
                                    p { class: "auth-hint", "Every student needs a score and a semester before submitting." }
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
