//! Admin dashboard shell.

use dioxus::prelude::*;

use store::Role;
use ui::{
    handle_api_error, use_session, use_toasts, NotificationPanel, Sidebar, SidebarItem,
};

mod overview;
mod students;
mod teachers;
mod courses;
mod billing;
mod chat;
mod profile;

use billing::AdminBilling;
use chat::AdminChat;
use courses::AdminCourses;
use overview::AdminOverview;
use profile::AdminProfileView;
use students::AdminStudents;
use teachers::AdminTeachers;

#[component]
pub fn AdminDashboard() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut active = use_signal(|| "overview");
    let mut show_notifications = use_signal(|| false);

    let mut inbox = use_resource(move || async move {
        let client = ui::client_for(&session.read(), Role::Admin)?;
        Some(client.notifications(Role::Admin).await)
    });

    if !session.read().is_logged_in(Role::Admin) {
        nav.replace(Role::Admin.login_route());
        return rsx! {};
    }

    let notifications = match &*inbox.read() {
        Some(Some(Ok(list))) => list.clone(),
        _ => Vec::new(),
    };
    let unread = notifications.iter().filter(|n| !n.read).count();

    let user_name = session.read().display_name(Role::Admin).map(str::to_string);

    let items = vec![
        SidebarItem::new("overview", "Overview"),
        SidebarItem::new("students", "Students"),
        SidebarItem::new("teachers", "Teachers"),
        SidebarItem::new("courses", "Courses"),
        SidebarItem::new("billing", "Billing"),
        SidebarItem::new("chat", "Messages"),
        SidebarItem::new("profile", "Profile"),
    ];

    let mark_read = move |_| {
        spawn(async move {
            let Some(client) = ui::client_for(&session.read(), Role::Admin) else {
                return;
            };
            match client.mark_notifications_read(Role::Admin).await {
                Ok(()) => inbox.restart(),
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
        });
    };

    rsx! {
        div {
            class: "dashboard",
            Sidebar {
                title: "Admin Portal".to_string(),
                user_name,
                items,
                active: active().to_string(),
                on_select: move |id| active.set(id),
                on_logout: move |_| {
                    session.write().logout(Role::Admin);
                    nav.push("/login-superadmin");
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
                        "students" => rsx! { AdminStudents {} },
                        "teachers" => rsx! { AdminTeachers {} },
                        "courses" => rsx! { AdminCourses {} },
                        "billing" => rsx! { AdminBilling {} },
                        "chat" => rsx! { AdminChat {} },
                        "profile" => rsx! { AdminProfileView {} },
                        _ => rsx! { AdminOverview {} },
                    }
                }
            }
        }
    }
}
