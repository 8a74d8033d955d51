use serde::{Deserialize, Serialize};

use super::user::StudentSummary;

/// An assignment as listed for students and teachers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub pdf: Option<String>,
    #[serde(default)]
    pub file_urls: Vec<String>,
}

/// `{ "assignments": [...] }` envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentList {
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// A student's submission against an assignment.
///
/// `studentId` is a bare id on the student's own listing and a populated
/// student object on the teacher's per-assignment listing; both decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub assignment_id: Option<String>,
    #[serde(default, rename = "studentId")]
    pub student: Option<SubmissionOwner>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file_urls: Vec<String>,
    #[serde(default, alias = "grade")]
    pub score: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

impl Submission {
    pub fn student_name(&self) -> Option<String> {
        match &self.student {
            Some(SubmissionOwner::Populated(student)) => Some(student.full_name()),
            _ => None,
        }
    }

    pub fn student_detail(&self) -> Option<&StudentSummary> {
        match &self.student {
            Some(SubmissionOwner::Populated(student)) => Some(student),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionOwner {
    Populated(StudentSummary),
    Id(String),
}

/// `{ "submissions": [...] }` envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionList {
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_decodes_with_optional_files() {
        let json = r#"{
            "_id": "a1",
            "title": "Parsing exercise",
            "deadline": "2026-03-01",
            "fileUrls": ["https://cdn.example/a1.pdf"]
        }"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.file_urls.len(), 1);
        assert!(assignment.description.is_none());
    }

    #[test]
    fn ungraded_submission_has_no_score() {
        let json = r#"{ "_id": "s1", "assignmentId": "a1", "status": "submitted" }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert!(submission.score.is_none());
        assert!(submission.student_name().is_none());
    }

    #[test]
    fn teacher_listing_populates_the_submitting_student() {
        let json = r#"{
            "_id": "s1",
            "studentId": {
                "_id": "st9",
                "firstname": "Ada",
                "lastname": "Okafor",
                "level": "300",
                "department": "Computer Engineering"
            },
            "message": "My attempt",
            "score": 84,
            "submittedAt": "2026-03-02T11:00:00.000Z"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.student_name().as_deref(), Some("Ada Okafor"));
        assert_eq!(
            submission.student_detail().and_then(|s| s.level.as_deref()),
            Some("300")
        );
        assert_eq!(submission.score, Some(84.0));
    }

    #[test]
    fn student_listing_keeps_the_bare_owner_id() {
        let json = r#"{ "_id": "s1", "studentId": "st9", "grade": 70 }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert!(matches!(
            submission.student,
            Some(SubmissionOwner::Id(ref id)) if id == "st9"
        ));
        // Older rows spell the mark "grade"
        assert_eq!(submission.score, Some(70.0));
    }
}
