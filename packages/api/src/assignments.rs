//! Assignment endpoints: listing, student submission, teacher grading.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Assignment, AssignmentList, ServerMessage, Submission, SubmissionList};

/// Fields for a teacher creating an assignment.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub course_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

#[derive(Serialize)]
struct GradeBody {
    grade: f64,
}

impl ApiClient {
    /// `GET student/assignments`.
    pub async fn student_assignments(&self) -> Result<Vec<Assignment>, ApiError> {
        let list: AssignmentList = self.get_json("student/assignments").await?;
        Ok(list.assignments)
    }

    /// `GET student/submissions` — the student's own submissions.
    pub async fn student_submissions(&self) -> Result<Vec<Submission>, ApiError> {
        let list: SubmissionList = self.get_json("student/submissions").await?;
        Ok(list.submissions)
    }

    /// `POST student/submissions` — multipart, one file per upload.
    pub async fn submit_assignment(
        &self,
        assignment_id: &str,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ServerMessage, ApiError> {
        self.post_file(
            &format!("student/submissions?assignmentId={assignment_id}"),
            "file",
            filename,
            content_type,
            bytes,
        )
        .await
    }

    /// `GET teacher/course/:id/assignments`.
    pub async fn course_assignments(&self, course_id: &str) -> Result<Vec<Assignment>, ApiError> {
        let list: AssignmentList = self
            .get_json(&format!("teacher/course/{course_id}/assignments"))
            .await?;
        Ok(list.assignments)
    }

    /// `POST teacher/assignments`.
    pub async fn create_assignment(&self, draft: &AssignmentDraft) -> Result<ServerMessage, ApiError> {
        self.post_json("teacher/assignments", draft).await
    }

    /// `DELETE teacher/assignments/:id`.
    pub async fn delete_assignment(&self, id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("teacher/assignments/{id}")).await
    }

    /// `GET teacher/assignments/:id/submissions`.
    pub async fn assignment_submissions(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<Submission>, ApiError> {
        let list: SubmissionList = self
            .get_json(&format!("teacher/assignments/{assignment_id}/submissions"))
            .await?;
        Ok(list.submissions)
    }

    /// `PATCH teacher/assignments/submission/:id/grade`.
    pub async fn grade_submission(&self, submission_id: &str, grade: f64) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("teacher/assignments/submission/{submission_id}/grade"),
            &GradeBody { grade },
        )
        .await
    }
}
