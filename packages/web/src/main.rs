use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider, ToastTray};
use views::{
    AdminDashboard, ForgotPassword, Landing, LoginAdmin, LoginStudent, LoginTeacher,
    PaymentSuccess, ResetPassword, SignupAdmin, SignupStudent, SignupTeacher, StudentDashboard,
    TeacherDashboard,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login-student")]
    LoginStudent {},
    #[route("/signup-student")]
    SignupStudent {},
    #[route("/login-teacher")]
    LoginTeacher {},
    #[route("/signup-teacher")]
    SignupTeacher {},
    #[route("/login-superadmin")]
    LoginAdmin {},
    #[route("/signup-superadmin")]
    SignupAdmin {},
    #[route("/:role/forgot-password")]
    ForgotPassword { role: String },
    #[route("/:role/reset-password")]
    ResetPassword { role: String },
    #[route("/student-dashboard")]
    StudentDashboard {},
    #[route("/teacher-dashboard")]
    TeacherDashboard {},
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[route("/payment-success")]
    PaymentSuccess {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            SessionProvider {
                ToastTray {}
                Router::<Route> {}
            }
        }
    }
}
