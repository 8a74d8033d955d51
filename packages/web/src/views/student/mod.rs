//! Student dashboard: a sidebar shell that swaps sections in-page.

use dioxus::prelude::*;

use store::Role;
use ui::{
    handle_api_error, use_session, use_toasts, NotificationPanel, Sidebar, SidebarItem,
};

mod overview;
mod courses;
mod results;
mod assignments;
mod payments;
mod chat;
mod profile;

use assignments::StudentAssignments;
use chat::StudentChat;
use courses::StudentCourses;
use overview::StudentOverview;
use payments::StudentPayments;
use profile::StudentProfile;
use results::StudentResults;

#[component]
pub fn StudentDashboard() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut active = use_signal(|| "overview");
    let mut show_notifications = use_signal(|| false);

    let mut inbox = use_resource(move || async move {
        let client = ui::client_for(&session.read(), Role::Student)?;
        Some(client.notifications(Role::Student).await)
    });

    if !session.read().is_logged_in(Role::Student) {
        nav.replace(Role::Student.login_route());
        return rsx! {};
    }

    let notifications = match &*inbox.read() {
        Some(Some(Ok(list))) => list.clone(),
        _ => Vec::new(),
    };
    let unread = notifications.iter().filter(|n| !n.read).count();

    let user_name = session.read().display_name(Role::Student).map(str::to_string);

    let items = vec![
        SidebarItem::new("overview", "Overview"),
        SidebarItem::new("courses", "Course Registration"),
        SidebarItem::new("results", "Results"),
        SidebarItem::new("assignments", "Assignments"),
        SidebarItem::new("payments", "Payments"),
        SidebarItem::new("chat", "Messages"),
        SidebarItem::new("profile", "Profile"),
    ];

    let mark_read = move |_| {
        spawn(async move {
            let Some(client) = ui::client_for(&session.read(), Role::Student) else {
                return;
            };
            match client.mark_notifications_read(Role::Student).await {
                Ok(()) => inbox.restart(),
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Student, &err),
            }
        });
    };

    rsx! {
        div {
            class: "dashboard",
            Sidebar {
                title: "Student Portal".to_string(),
                user_name,
                items,
                active: active().to_string(),
                on_select: move |id| active.set(id),
                on_logout: move |_| {
                    session.write().logout(Role::Student);
                    nav.push("/login-student");
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
                        "courses" => rsx! { StudentCourses {} },
                        "results" => rsx! { StudentResults {} },
                        "assignments" => rsx! { StudentAssignments {} },
                        "payments" => rsx! { StudentPayments {} },
                        "chat" => rsx! { StudentChat {} },
                        "profile" => rsx! { StudentProfile {} },
                        _ => rsx! { StudentOverview {} },
                    }
                }
            }
        }
    }
}
