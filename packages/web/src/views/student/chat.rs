use std::collections::BTreeMap;

use dioxus::prelude::*;

use api::Peer;
use store::Role;
use ui::{client_for, use_session, LoadingSpinner};

use crate::views::chat_common::ConversationView;

/// Student messaging: one thread per teacher plus the admin inbox. Unread
/// counts come from the backend, not from local bookkeeping.
#[component]
pub fn StudentChat() -> Element {
    let session = use_session();
    let mut selected = use_signal(|| None::<(Peer, String)>);

    let teachers = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.list_teachers(Role::Student).await)
    });

    let unread = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Student)?;
        Some(client.unread_counts(Role::Student).await)
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

                    match &*teachers.read() {
                        None => rsx! { LoadingSpinner {} },
                        Some(Some(Ok(list))) => {
                            // Contacts grouped by department, alphabetical.
                            let mut groups: BTreeMap<String, Vec<_>> = BTreeMap::new();
                            for teacher in list.iter().cloned() {
                                let dept = teacher
                                    .department
                                    .clone()
                                    .unwrap_or_else(|| "General".to_string());
                                groups.entry(dept).or_default().push(teacher);
                            }
                            rsx! {
                                for (dept, members) in groups {
                                    div {
                                        key: "{dept}",
                                        class: "chat-contact-group",
                                        h4 { class: "chat-contact-dept", "{dept}" }
                                        for teacher in members {
                                            {
                                                let name = teacher.full_name();
                                                let count = counts.as_ref().map(|c| c.for_teacher(&teacher.id)).unwrap_or(0);
                                                rsx! {
                                                    button {
                                                        key: "{teacher.id}",
                                                        class: "chat-contact",
                                                        onclick: move |_| {
                                                            selected.set(Some((Peer::Teacher(teacher.id.clone()), teacher.full_name())));
                                                        },
                                                        "{name}"
                                                        if count > 0 {
                                                            span { class: "bell-badge", "{count}" }
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

                div {
                    class: "chat-main",
                    if let Some((peer, label)) = selected() {
                        ConversationView { role: Role::Student, peer, label }
                    } else {
                        p { class: "section-empty", "Pick a conversation." }
                    }
                }
            }
        }
    }
}
