use dioxus::prelude::*;

use api::Peer;
use store::Role;
use ui::{client_for, use_session, LoadingSpinner};

use crate::views::chat_common::ConversationView;

/// Teacher messaging: one thread per student plus the admin thread.
#[component]
pub fn TeacherChat() -> Element {
    let session = use_session();
    let mut selected = use_signal(|| None::<(Peer, String)>);

    let students = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.list_students(Role::Teacher).await)
    });

    let unread = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Teacher)?;
        Some(client.unread_counts(Role::Teacher).await)
    });

    let counts = match &*unread.read() {
        Some(Some(Ok(counts))) => Some(counts.clone()),
        _ => None,
    };
    let admin_unread = counts.as_ref().map(|c| c.admin).unwrap_or(0);

    rsx! {
        div {
            class: "section chat-section",
            h2 { "Messages" }

            div {
                class: "chat-layout",
                div {
                    class: "chat-contacts",
                    button {
                        class: "chat-contact",
                        onclick: move |_| selected.set(Some((Peer::Admin, "Admin".to_string()))),
                        "Admin"
                        if admin_unread > 0 {
                            span { class: "bell-badge", "{admin_unread}" }
                        }
                    }

                    match &*students.read() {
                        None => rsx! { LoadingSpinner {} },
                        Some(Some(Ok(list))) => rsx! {
                            for student in list.iter().cloned() {
                                {
                                    let name = student.full_name();
                                    let count = counts.as_ref().map(|c| c.for_student(&student.id)).unwrap_or(0);
                                    rsx! {
                                        button {
                                            key: "{student.id}",
                                            class: "chat-contact",
                                            onclick: move |_| {
                                                selected.set(Some((Peer::Student(student.id.clone()), student.full_name())));
                                            },
                                            "{name}"
                                            if count > 0 {
                                                span { class: "bell-badge", "{count}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Some(Err(err))) => rsx! { p { class: "section-error", "{err}" } },
                        Some(None) => rsx! {},
                    }
                }

                div {
                    class: "chat-main",
                    if let Some((peer, label)) = selected() {
                        ConversationView { role: Role::Teacher, peer, label }
                    } else {
                        p { class: "section-empty", "Pick a conversation." }
                    }
                }
            }
        }
    }
}
