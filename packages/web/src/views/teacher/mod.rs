//! Teacher dashboard shell.

use dioxus::prelude::*;

use store::Role;
use ui::{
    handle_api_error, use_session, use_toasts, NotificationPanel, Sidebar, SidebarItem,
};

mod overview;
mod classes;
mod assignments;
mod chat;
mod profile;

use assignments::TeacherAssignments;
use chat::TeacherChat;
use classes::TeacherClasses;
use overview::TeacherOverview;
use profile::TeacherProfileView;

#[component]
pub fn TeacherDashboard() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut active = use_signal(|| "overview");
    let mut show_notifications = use_signal(|| false);

    let mut inbox = use_resource(move || async move {
        let client = ui::client_for(&session.read(), Role::Teacher)?;
        Some(client.notifications(Role::Teacher).await)
    });

    if !session.read().is_logged_in(Role::Teacher) {
        nav.replace(Role::Teacher.login_route());
        return rsx! {};
    }

    let notifications = match &*inbox.read() {
        Some(Some(Ok(list))) => list.clone(),
        _ => Vec::new(),
    };
    let unread = notifications.iter().filter(|n| !n.read).count();

    let user_name = session.read().display_name(Role::Teacher).map(str::to_string);

    let items = vec![
        SidebarItem::new("overview", "Overview"),
        SidebarItem::new("classes", "My Classes"),
        SidebarItem::new("assignments", "Assignments"),
        SidebarItem::new("chat", "Messages"),
        SidebarItem::new("profile", "Profile"),
    ];

    let mark_read = move |_| {
        spawn(async move {
            let Some(client) = ui::client_for(&session.read(), Role::Teacher) else {
                return;
            };
            match client.mark_notifications_read(Role::Teacher).await {
                Ok(()) => inbox.restart(),
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Teacher, &err),
            }
        });
    };

    rsx! {
        div {
            class: "dashboard",
            Sidebar {
                title: "Teacher Portal".to_string(),
                user_name,
                items,
                active: active().to_string(),
                on_select: move |id| active.set(id),
                on_logout: move |_| {
                    session.write().logout(Role::Teacher);
                    nav.push("/login-teacher");
                },
            }

            main {
                class: "dashboard-main",
                header {
                    class: "dashboard-topbar",
                    button {
                        class: "bell",
                        onclick: move |_| {
                            let open = show_notifications();
                            show_notifications.set(!open);
                        },
                        "Notifications"
                        if unread > 0 {
                            span { class: "bell-badge", "{unread}" }
                        }
                    }
                }

                if show_notifications() {
                    NotificationPanel {
                        notifications: notifications.clone(),
                        on_mark_read: mark_read,
                        on_close: move |_| show_notifications.set(false),
                    }
                }

                section {
                    class: "dashboard-content",
                    match active() {
                        "classes" => rsx! { TeacherClasses {} },
                        "assignments" => rsx! { TeacherAssignments {} },
                        "chat" => rsx! { TeacherChat {} },
                        "profile" => rsx! { TeacherProfileView {} },
                        _ => rsx! { TeacherOverview {} },
                    }
                }
            }
        }
    }
}
