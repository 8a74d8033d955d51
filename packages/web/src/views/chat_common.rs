//! The wiring between [`ui::ChatPanel`] and the messaging endpoints, shared
//! by all three role dashboards. Sends are optimistic: the placeholder
//! appears synchronously, the request goes out, and on success the whole
//! thread is refetched; on failure the placeholder is marked failed and
//! stays put.

use dioxus::prelude::*;

use api::Peer;
use store::Role;
use ui::{client_for, handle_api_error, use_session, use_toasts, ChatPanel, ChatThread};

#[component]
pub fn ConversationView(role: Role, peer: Peer, label: String) -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut thread = use_signal(ChatThread::new);

    // Refetch whenever the peer selection changes; the thread is cleared
    // first so a slow response never shows the previous conversation.
    {
        let peer = peer.clone();
        use_effect(use_reactive!(|peer| {
            thread.write().clear();
            let peer = peer.clone();
            spawn(async move {
                let Some(client) = client_for(&session.read(), role) else {
                    return;
                };
                match client.thread(role, &peer).await {
                    Ok(messages) => thread.write().replace_with(messages, role),
                    Err(err) => handle_api_error(&mut session, &mut toasts, role, &err),
                }
            });
        }));
    }

    let on_send = {
        let peer = peer.clone();
        move |text: String| {
            let peer = peer.clone();
            let local_id = thread.write().begin_send(&text);
            spawn(async move {
                let Some(client) = client_for(&session.read(), role) else {
                    thread.write().fail_send(local_id);
                    return;
                };
                match client.send_message(role, &peer, &text).await {
                    Ok(()) => match client.thread(role, &peer).await {
                        Ok(messages) => thread.write().replace_with(messages, role),
                        Err(err) => {
                            handle_api_error(&mut session, &mut toasts, role, &err);
                        }
                    },
                    Err(err) => {
                        thread.write().fail_send(local_id);
                        handle_api_error(&mut session, &mut toasts, role, &err);
                    }
                }
            });
        }
    };

    let on_edit = {
        let peer = peer.clone();
        move |(id, new_text): (String, String)| {
            let peer = peer.clone();
            spawn(async move {
                let Some(client) = client_for(&session.read(), role) else {
                    return;
                };
                match client.edit_message(role, &id, &new_text).await {
                    Ok(()) => {
                        if let Ok(messages) = client.thread(role, &peer).await {
                            thread.write().replace_with(messages, role);
                        }
                    }
                    Err(err) => handle_api_error(&mut session, &mut toasts, role, &err),
                }
            });
        }
    };

    let on_delete = {
        let peer = peer.clone();
        move |id: String| {
            let peer = peer.clone();
            spawn(async move {
                let Some(client) = client_for(&session.read(), role) else {
                    return;
                };
                match client.delete_message(role, &id).await {
                    Ok(()) => {
                        if let Ok(messages) = client.thread(role, &peer).await {
                            thread.write().replace_with(messages, role);
                        }
                    }
                    Err(err) => handle_api_error(&mut session, &mut toasts, role, &err),
                }
            });
        }
    };

    rsx! {
        ChatPanel {
            thread,
            peer_label: label,
            on_send,
            on_edit,
            on_delete,
        }
    }
}
