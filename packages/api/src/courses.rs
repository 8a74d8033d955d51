//! Course and grade workflows: the student registration funnel, the
//! teacher's grading endpoints, and the admin's catalogue and approvals.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    ApprovedResults, Course, CourseList, GradeRecord, ResultEntry, ServerMessage, StudentSummary,
    SubmittedCourse, SubmittedCourseList,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitCoursesBody<'a> {
    course_ids: &'a [String],
}

#[derive(Serialize)]
struct SubmitResultsBody<'a> {
    results: &'a [GradeRecord],
}

/// Fields for creating or editing a course in the admin catalogue.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CourseDraft {
    pub code: String,
    pub title: String,
    pub unit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl ApiClient {
    // --- student ---

    /// Courses matching the student's department and level.
    pub async fn matching_courses(&self) -> Result<Vec<Course>, ApiError> {
        let list: CourseList = self.get_json("student/courses/matching").await?;
        Ok(list.courses)
    }

    /// Courses the student already submitted, with approval status.
    pub async fn submitted_courses(&self) -> Result<Vec<SubmittedCourse>, ApiError> {
        let list: SubmittedCourseList = self.get_json("student/courses/submitted").await?;
        Ok(list.courses)
    }

    /// `POST student/courses/submit` — send the selection for approval.
    pub async fn submit_courses(&self, course_ids: &[String]) -> Result<(), ApiError> {
        self.post_unit("student/courses/submit", &SubmitCoursesBody { course_ids })
            .await
    }

    /// `GET student/approved-results` — result rows, CGPA, carry-overs.
    pub async fn approved_results(&self) -> Result<ApprovedResults, ApiError> {
        self.get_json("student/approved-results").await
    }

    // --- teacher ---

    /// Courses this teacher takes.
    pub async fn teacher_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("teacher/courses").await
    }

    /// Students enrolled in one of the teacher's courses.
    pub async fn course_students(&self, course_id: &str) -> Result<Vec<StudentSummary>, ApiError> {
        self.get_json(&format!("teacher/course/{course_id}/students"))
            .await
    }

    /// Result rows this teacher already submitted for a course.
    pub async fn submitted_results(&self, course_id: &str) -> Result<Vec<ResultEntry>, ApiError> {
        self.get_json(&format!("teacher/course/{course_id}/submitted-results"))
            .await
    }

    /// `POST teacher/course/:id/submit-results` — one row per student,
    /// grades derived client-side and revalidated by the backend.
    pub async fn submit_results(
        &self,
        course_id: &str,
        results: &[GradeRecord],
    ) -> Result<ServerMessage, ApiError> {
        self.post_json(
            &format!("teacher/course/{course_id}/submit-results"),
            &SubmitResultsBody { results },
        )
        .await
    }

    // --- admin ---

    pub async fn admin_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_json("admin/courses").await
    }

    pub async fn create_course(&self, draft: &CourseDraft) -> Result<ServerMessage, ApiError> {
        self.post_json("admin/courses", draft).await
    }

    pub async fn update_course(&self, id: &str, draft: &CourseDraft) -> Result<(), ApiError> {
        self.patch_unit(&format!("admin/courses/{id}"), draft).await
    }

    pub async fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("admin/courses/{id}")).await
    }

    /// Approve every pending course submission for one student.
    pub async fn approve_all_courses(&self, student_id: &str) -> Result<(), ApiError> {
        self.patch_unit(&format!("admin/students/{student_id}/approve-courses"), &())
            .await
    }

    /// Approve a single course submission.
    pub async fn approve_course(&self, student_id: &str, course_id: &str) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("admin/students/{student_id}/courses/{course_id}/approve"),
            &(),
        )
        .await
    }

    /// Reject a single course submission.
    pub async fn reject_course(&self, student_id: &str, course_id: &str) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("admin/students/{student_id}/courses/{course_id}/reject"),
            &(),
        )
        .await
    }

    /// Approve a student's submitted result rows for release.
    pub async fn approve_results(&self, student_id: &str) -> Result<(), ApiError> {
        self.patch_unit(&format!("admin/students/{student_id}/results/approve"), &())
            .await
    }

    /// Result rows for one student, as the admin reviews them.
    pub async fn student_results(&self, student_id: &str) -> Result<Vec<ResultEntry>, ApiError> {
        self.get_json(&format!("admin/students/{student_id}/results"))
            .await
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("admin/students/{id}")).await
    }

    pub async fn delete_teacher(&self, id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("admin/teachers/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_courses_body_shape() {
        let ids = vec!["c1".to_string(), "c2".to_string()];
        let json = serde_json::to_string(&SubmitCoursesBody { course_ids: &ids }).unwrap();
        assert_eq!(json, r#"{"courseIds":["c1","c2"]}"#);
    }

    #[test]
    fn submit_results_wraps_rows_in_results() {
        let rows = vec![GradeRecord {
            student_id: "s1".into(),
            score: 72.0,
            grade: "A".into(),
            point: 5,
            semester: "First".into(),
            unit: Some(3),
            code: Some("CSC301".into()),
            mode: "new".into(),
        }];
        let json = serde_json::to_string(&SubmitResultsBody { results: &rows }).unwrap();
        assert!(json.starts_with(r#"{"results":[{"studentId":"s1""#));
    }
}
