use dioxus::prelude::*;

use crate::icons::{FaPaperPlane, FaPen, FaTrashCan};
use crate::thread::{ChatThread, Delivery, MessageKey};
use crate::Icon;

const CHAT_CSS: Asset = asset!("/assets/styling/chat.css");

/// A single conversation view: message bubbles, an edit-in-place affordance
/// on the viewer's own confirmed messages, and a composer at the bottom.
///
/// The panel owns no network logic. Sends, edits and deletes are raised as
/// events; the parent talks to the server and pushes refreshed state back
/// through the `thread` signal.
#[component]
pub fn ChatPanel(
    thread: Signal<ChatThread>,
    /// Heading above the message list, usually the other party's name.
    peer_label: String,
    on_send: EventHandler<String>,
    /// `(message id, new text)` for a confirmed message.
    on_edit: EventHandler<(String, String)>,
    /// Message id of a confirmed message.
    on_delete: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(String::new);
    // Message id being edited, plus the edit buffer.
    let mut editing = use_signal(|| None::<(String, String)>);

    let submit_draft = move |_| {
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        draft.set(String::new());
        on_send.call(text);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CHAT_CSS }
        div {
            class: "chat-panel",

            div {
                class: "chat-header",
                h3 { "{peer_label}" }
            }

            div {
                class: "chat-messages",
                if thread.read().is_empty() {
                    p { class: "chat-empty", "No messages yet. Say hello!" }
                }
                for msg in thread.read().messages().iter().cloned() {
                    {
                        let bubble = if msg.mine { "chat-bubble chat-bubble--mine" } else { "chat-bubble" };
                        let editable = msg.mine && msg.delivery == Delivery::Confirmed;
                        let server_id = match &msg.key {
                            MessageKey::Server(id) => Some(id.clone()),
                            MessageKey::Local(_) => None,
                        };
                        let being_edited = server_id
                            .as_ref()
                            .is_some_and(|id| editing.read().as_ref().is_some_and(|(e, _)| e == id));

                        rsx! {
                            div {
                                class: "{bubble}",
                                if being_edited {
                                    input {
                                        class: "chat-edit-input",
                                        value: editing.read().as_ref().map(|(_, t)| t.clone()).unwrap_or_default(),
                                        oninput: move |evt| {
                                            if let Some((_, text)) = editing.write().as_mut() {
                                                *text = evt.value();
                                            }
                                        },
                                        onkeydown: move |evt| {
                                            match evt.key() {
                                                Key::Enter => {
                                                    if let Some((id, text)) = editing.take() {
                                                        let text = text.trim().to_string();
                                                        if !text.is_empty() {
                                                            on_edit.call((id, text));
                                                        }
                                                    }
                                                }
                                                Key::Escape => editing.set(None),
                                                _ => {}
                                            }
                                        },
                                    }
                                } else {
                                    p { class: "chat-text", "{msg.text}" }
                                }

                                div {
                                    class: "chat-meta",
                                    match msg.delivery {
                                        Delivery::Pending => rsx! {
                                            span { class: "chat-status chat-status--pending", "Sending..." }
                                        },
                                        Delivery::Failed => rsx! {
                                            span { class: "chat-status chat-status--failed", "Not delivered" }
                                        },
                                        Delivery::Confirmed => rsx! {
                                            if let Some(time) = msg.timestamp.as_ref() {
                                                span { class: "chat-time", "{time}" }
                                            }
                                        },
                                    }
                                    if editable && !being_edited {
                                        if let Some(id) = server_id.clone() {
                                            button {
                                                class: "chat-action",
                                                title: "Edit",
                                                onclick: {
                                                    let id = id.clone();
                                                    let text = msg.text.clone();
                                                    move |_| editing.set(Some((id.clone(), text.clone())))
                                                },
                                                Icon { icon: FaPen, width: 12, height: 12 }
                                            }
                                            button {
                                                class: "chat-action chat-action--danger",
                                                title: "Delete",
                                                onclick: move |_| on_delete.call(id.clone()),
                                                Icon { icon: FaTrashCan, width: 12, height: 12 }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            form {
                class: "chat-composer",
                onsubmit: submit_draft,
                input {
                    class: "chat-input",
                    placeholder: "Type a message",
                    value: draft(),
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "chat-send",
                    r#type: "submit",
                    Icon { icon: FaPaperPlane, width: 16, height: 16 }
                }
            }
        }
    }
}
