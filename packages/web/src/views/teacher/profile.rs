use dioxus::prelude::*;

use api::models::ProfileUpdate;
use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

use crate::views::files::first_file;

#[component]
pub fn TeacherProfileView() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut photo_busy = use_signal(|| false);

    let mut profile = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.teacher_profile().await)
    });

    use_effect(move || {
        if let Some(Some(Ok(p))) = &*profile.read() {
            title.set(p.title.clone().unwrap_or_default());
            first_name.set(p.first_name.clone().unwrap_or_default());
            last_name.set(p.last_name.clone().unwrap_or_default());
            department.set(p.department.clone().unwrap_or_default());
        }
    });

    let save = move |_| {
        if busy() {
            return;
        }
        let update = ProfileUpdate {
            title: non_empty(&title()),
            first_name: non_empty(&first_name()),
            last_name: non_empty(&last_name()),
            department: non_empty(&department()),
            ..Default::default()
        };

        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Teacher) else {
                busy.set(false);
                return;
            };
            match client.update_profile(Role::Teacher, &update).await {
                Ok(ack) => {
                    let message = ack.message.unwrap_or_else(|| "Profile updated".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    profile.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
            busy.set(false);
        });
    };

    let upload_photo = move |evt: FormEvent| {
        spawn(async move {
            let Some((name, mime, bytes)) = first_file(&evt).await else {
                return;
            };
            if !mime.starts_with("image/") {
                push_toast(&mut toasts, ToastLevel::Error, "Profile photos must be images");
                return;
            }
            photo_busy.set(true);
            let Some(client) = client_for(&session.read(), Role::Teacher) else {
                photo_busy.set(false);
                return;
            };
            match client
                .upload_profile_photo(Role::Teacher, &name, &mime, bytes)
                .await
            {
                Ok(_) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Photo updated");
                    profile.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
            photo_busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Profile" }

            match &*profile.read() {
                None => rsx! { LoadingSpinner {} },
                Some(Some(Ok(_))) => rsx! {
                    label {
                        class: "btn btn-secondary",
                        if photo_busy() { "Uploading..." } else { "Change photo" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "visually-hidden",
                            onchange: upload_photo,
                        }
                    }

                    form {
                        class: "profile-form",
                        onsubmit: save,

                        label {
                            class: "auth-field",
                            span { "Title" }
                            input {
                                placeholder: "e.g. Dr.",
                                value: title(),
                                oninput: move |evt| title.set(evt.value()),
                            }
                        }
                        div {
                            class: "auth-row",
                            label {
                                class: "auth-field",
                                span { "First name" }
                                input {
                                    value: first_name(),
                                    oninput: move |evt| first_name.set(evt.value()),
                                }
                            }
                            label {
                                class: "auth-field",
                                span { "Last name" }
                                input {
                                    value: last_name(),
                                    oninput: move |evt| last_name.set(evt.value()),
                                }
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

                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Saving..." } else { "Save changes" }
                        }
                    }
                },
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
