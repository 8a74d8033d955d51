use dioxus::prelude::*;

use api::models::Notification;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");

/// Dropdown inbox opened from the dashboard bell. Opening it is what marks
/// the inbox read; the parent calls the mark-read endpoint and refetches.
#[component]
pub fn NotificationPanel(
    notifications: Vec<Notification>,
    on_mark_read: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let any_unread = notifications.iter().any(|n| !n.read);

    rsx! {
        document::Link { rel: "stylesheet", href: NOTIFICATIONS_CSS }
        div {
            class: "notif-panel",

            div {
                class: "notif-header",
                h4 { "Notifications" }
                div {
                    class: "notif-header-actions",
                    if any_unread {
                        button {
                            class: "notif-mark-read",
                            onclick: move |_| on_mark_read.call(()),
                            "Mark all read"
                        }
                    }
                    button {
                        class: "notif-close",
                        onclick: move |_| on_close.call(()),
                        "x"
                    }
                }
            }

            if notifications.is_empty() {
                p { class: "notif-empty", "Nothing here yet." }
            } else {
                ul {
                    class: "notif-list",
                    for n in notifications {
                        li {
                            key: "{n.id}",
                            class: if n.read { "notif-item" } else { "notif-item notif-item--unread" },
                            p {
                                class: "notif-message",
                                {n.message.as_deref().unwrap_or("(no message)")}
                            }
                            if let Some(time) = n.time.as_ref() {
                                span { class: "notif-time", "{time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
