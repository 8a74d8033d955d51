use serde::{Deserialize, Serialize};

use super::user::StudentInfo;

/// A course record. The backend uses `title` for student-facing catalogues
/// and `name` in older admin records, so both are carried.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<u32>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl Course {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled")
    }
}

/// One entry of `GET student/courses/submitted`: a course plus its approval
/// status (`pending` / `approved` / `failed`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedCourse {
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SubmittedCourse {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }
}

/// `{ "courses": [...] }` envelope used by the course list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedCourseList {
    #[serde(default)]
    pub courses: Vec<SubmittedCourse>,
}

/// A graded result row, as returned by the teacher's submitted-results list
/// and the student's approved-results view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student: Option<StudentRef>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub point: Option<f64>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub unit: Option<u32>,
    #[serde(default)]
    pub level: Option<String>,
}

impl ResultEntry {
    /// The student this row belongs to, from whichever field the backend set.
    pub fn owner_id(&self) -> Option<&str> {
        self.student
            .as_ref()
            .map(|s| s.id.as_str())
            .or(self.student_id.as_deref())
    }
}

/// Embedded student reference inside a result row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRef {
    #[serde(rename = "_id")]
    pub id: String,
}

/// `GET student/approved-results` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedResults {
    #[serde(default)]
    pub student: Option<StudentInfo>,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub outstanding_courses: Vec<Course>,
}

/// One row of a grade submission. The grade and point are the client-side
/// derivation from the score; the backend revalidates on its side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub student_id: String,
    pub score: f64,
    pub grade: String,
    pub point: u8,
    pub semester: String,
    #[serde(default)]
    pub unit: Option<u32>,
    #[serde(default)]
    pub code: Option<String>,
    /// `"new"` for a first submission, `"edit"` when overwriting.
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_course_carries_status() {
        let json = r#"{
            "course": { "_id": "c1", "code": "CSC301", "title": "Compilers", "unit": 3 },
            "status": "approved",
            "createdAt": "2026-01-05T10:00:00.000Z"
        }"#;
        let submitted: SubmittedCourse = serde_json::from_str(json).unwrap();
        assert_eq!(submitted.status(), "approved");
        assert_eq!(
            submitted.course.as_ref().unwrap().display_title(),
            "Compilers"
        );
    }

    #[test]
    fn course_list_envelope_defaults_to_empty() {
        let list: CourseList = serde_json::from_str("{}").unwrap();
        assert!(list.courses.is_empty());
    }

    #[test]
    fn result_entry_owner_prefers_embedded_student() {
        let json = r#"{ "student": { "_id": "s9" }, "studentId": "legacy", "score": 71 }"#;
        let entry: ResultEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.owner_id(), Some("s9"));

        let json = r#"{ "studentId": "s4", "score": 55 }"#;
        let entry: ResultEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.owner_id(), Some("s4"));
    }

    #[test]
    fn approved_results_decodes_full_payload() {
        let json = r#"{
            "student": { "fullName": "Ada Okafor" },
            "results": [ { "code": "CSC301", "score": 74, "grade": "A", "point": 5 } ],
            "cgpa": 4.5,
            "outstandingCourses": []
        }"#;
        let approved: ApprovedResults = serde_json::from_str(json).unwrap();
        assert_eq!(approved.results.len(), 1);
        assert_eq!(approved.cgpa, Some(4.5));
    }
}
