use dioxus::prelude::*;

use api::models::ProfileUpdate;
use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

use crate::views::files::first_file;

#[component]
pub fn AdminProfileView() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut photo_busy = use_signal(|| false);

    let mut profile = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.admin_profile().await)
    });

    use_effect(move || {
        if let Some(Some(Ok(info))) = &*profile.read() {
            full_name.set(info.full_name.clone().unwrap_or_default());
            email.set(info.email.clone().unwrap_or_default());
        }
    });

    let save = move |_| {
        if busy() {
            return;
        }
        let update = ProfileUpdate {
            full_name: non_empty(&full_name()),
            email: non_empty(&email()),
            ..Default::default()
        };

        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.update_profile(Role::Admin, &update).await {
                Ok(ack) => {
                    let message = ack.message.unwrap_or_else(|| "Profile updated".to_string());
                    push_toast(&mut toasts, ToastLevel::Success, &message);
                    profile.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
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
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                photo_busy.set(false);
                return;
            };
            match client
                .upload_profile_photo(Role::Admin, &name, &mime, bytes)
                .await
            {
                Ok(_) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Photo updated");
                    profile.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
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
                Some(Some(Ok(info))) => rsx! {
                    div {
                        class: "profile-summary",
                        if let Some(pic) = info.profilepic.as_ref() {
                            img { class: "avatar", src: "{pic}", alt: "Profile photo" }
                        }
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
                    }

                    form {
                        class: "profile-form",
                        onsubmit: save,

                        label {
                            class: "auth-field",
                            span { "Full name" }
                            input {
                                value: full_name(),
                                oninput: move |evt| full_name.set(evt.value()),
                            }
                        }
                        label {
                            class: "auth-field",
                            span { "Email" }
                            input {
                                r#type: "email",
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
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
