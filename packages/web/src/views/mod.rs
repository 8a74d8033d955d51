mod chat_common;
mod files;

mod landing;
pub use landing::Landing;

mod login;
pub use login::{LoginAdmin, LoginStudent, LoginTeacher};

mod signup;
pub use signup::{SignupAdmin, SignupStudent, SignupTeacher};

mod reset;
pub use reset::{ForgotPassword, ResetPassword};

mod payment_success;
pub use payment_success::PaymentSuccess;

mod student;
pub use student::StudentDashboard;

mod teacher;
pub use teacher::TeacherDashboard;

mod admin;
pub use admin::AdminDashboard;

/// Route params carry the role as its path segment (`student`, `teacher`,
/// `superadmin`); anything else falls back to the student flow.
pub(crate) fn role_from_segment(segment: &str) -> store::Role {
    match segment {
        "teacher" => store::Role::Teacher,
        "superadmin" | "admin" => store::Role::Admin,
        _ => store::Role::Student,
    }
}
