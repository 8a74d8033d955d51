use dioxus::prelude::*;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// One entry in the dashboard sidebar.
#[derive(Clone, PartialEq)]
pub struct SidebarItem {
    /// Stable key the dashboard switches sections on.
    pub id: &'static str,
    pub label: &'static str,
}

impl SidebarItem {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Dashboard navigation rail shared by all three roles. Section switching is
/// in-page; only logout leaves the dashboard.
#[component]
pub fn Sidebar(
    title: String,
    /// Signed-in user's display name, when already loaded.
    user_name: Option<String>,
    items: Vec<SidebarItem>,
    active: String,
    on_select: EventHandler<&'static str>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        nav {
            class: "sidebar",

            div {
                class: "sidebar-user",
                span { class: "sidebar-title", "{title}" }
                if let Some(name) = user_name {
                    span { class: "sidebar-user-name", "{name}" }
                }
            }

            ul {
                class: "sidebar-items",
                for item in items {
                    li {
                        key: "{item.id}",
                        button {
                            class: if active == item.id { "sidebar-link sidebar-link--active" } else { "sidebar-link" },
                            onclick: move |_| on_select.call(item.id),
                            "{item.label}"
                        }
                    }
                }
            }

            button {
                class: "sidebar-logout",
                onclick: move |_| on_logout.call(()),
                "Logout"
            }
        }
    }
}
