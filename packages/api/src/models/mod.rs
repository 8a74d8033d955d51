//! # Response schemas
//!
//! Every payload the backend sends has an explicit schema here. Unknown
//! fields are ignored (serde's default), optional fields are `Option` or
//! `#[serde(default)]`, and a structurally wrong payload fails at the client
//! boundary as [`crate::ApiError::Decode`] instead of defaulting silently in
//! a view.

mod assignment;
mod course;
mod message;
mod notification;
mod payment;
mod stats;
mod user;

pub use assignment::{Assignment, AssignmentList, Submission, SubmissionList, SubmissionOwner};
pub use course::{
    ApprovedResults, Course, CourseList, GradeRecord, ResultEntry, StudentRef, SubmittedCourse,
    SubmittedCourseList,
};
pub use message::{Message, UnreadCounts};
pub use notification::{Notification, NotificationId, NotificationList};
pub use payment::{FeeConfig, Payment, PaymentInit, PaymentList, PaymentVerification};
pub use stats::{AdminStats, StudentStats, TeacherStats};
pub use user::{
    AdminInfo, CourseRegistration, LoginResponse, PersonName, ProfileUpdate, StudentInfo,
    StudentSummary, TeacherProfile,
};

use serde::{Deserialize, Serialize};

/// The backend's generic `{ "message": ... }` envelope, used both for error
/// bodies and for acknowledgements with nothing else to say.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}
