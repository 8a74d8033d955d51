use dioxus::prelude::*;

/// Public landing page: one card per portal.
#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "landing",
            header {
                class: "landing-hero",
                h1 { "Campus Portal" }
                p { "Courses, results, assignments and fees in one place." }
            }

            div {
                class: "landing-cards",
                div {
                    class: "landing-card",
                    h2 { "Students" }
                    p { "Register courses, check results, submit assignments and pay fees." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/login-student"); },
                        "Student login"
                    }
                }
                div {
                    class: "landing-card",
                    h2 { "Teachers" }
                    p { "Manage your classes, enter grades and set assignments." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/login-teacher"); },
                        "Teacher login"
                    }
                }
                div {
                    class: "landing-card",
                    h2 { "Administrators" }
                    p { "Approve registrations, publish results and oversee the school." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push("/login-superadmin"); },
                        "Admin login"
                    }
                }
            }
        }
    }
}
