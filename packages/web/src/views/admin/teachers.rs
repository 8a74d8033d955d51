use dioxus::prelude::*;

use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

#[component]
pub fn AdminTeachers() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let mut teachers = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.list_teachers(Role::Admin).await)
    });

    let mut remove = move |teacher_id: String| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.delete_teacher(&teacher_id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Teacher removed");
                    teachers.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Teachers" }

            match &*teachers.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(list))) => {
                    if list.is_empty() {
                        rsx! { p { class: "section-empty", "No teachers registered yet." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Department" }
                                        th { "Email" }
                                        th { "Status" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for teacher in list.iter().cloned() {
                                        {
                                            let delete_id = teacher.id.clone();
                                            rsx! {
                                                tr {
                                                    key: "{teacher.id}",
                                                    td { "{teacher.full_name()}" }
                                                    td { {teacher.department.as_deref().unwrap_or("-")} }
                                                    td { {teacher.email.as_deref().unwrap_or("-")} }
                                                    td {
                                                        {
                                                            let status = teacher.status.as_deref().unwrap_or("pending");
                                                            rsx! { span { class: "status status--{status}", "{status}" } }
                                                        }
                                                    }
                                                    td {
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
