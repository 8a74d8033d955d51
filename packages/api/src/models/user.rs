use serde::{Deserialize, Serialize};

/// Minimal name object nested inside a login response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
}

/// Successful `POST {role}/login` response. Exactly one of the role objects
/// is populated, matching the role that logged in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub student: Option<PersonName>,
    #[serde(default)]
    pub teacher: Option<PersonName>,
    #[serde(default)]
    pub admin: Option<PersonName>,
}

impl LoginResponse {
    /// First name to greet the user with, whichever role object carried it.
    pub fn display_name(&self) -> Option<&str> {
        [&self.student, &self.teacher, &self.admin]
            .into_iter()
            .flatten()
            .find_map(|p| p.firstname.as_deref())
    }
}

/// `GET student/info` — the header card on the student dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profilepic: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<String>,
}

/// A teacher as listed for chat contacts and admin management.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TeacherProfile {
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title.as_str());
        }
        if let Some(first) = &self.first_name {
            parts.push(first.as_str());
        }
        if let Some(last) = &self.last_name {
            parts.push(last.as_str());
        }
        if parts.is_empty() {
            "Unknown teacher".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// A student as listed for teacher grading tables and admin management.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Submitted course registrations, embedded in the admin listing.
    #[serde(default)]
    pub courses: Vec<CourseRegistration>,
}

/// One `{ course, status }` pair on an admin student record. `course` is the
/// catalogue id; titles come from the admin course list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRegistration {
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CourseRegistration {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }

    pub fn is_pending(&self) -> bool {
        self.status() == "pending"
    }
}

impl StudentSummary {
    /// Whether any submitted course still awaits an approval verdict.
    pub fn has_pending_courses(&self) -> bool {
        self.courses.iter().any(CourseRegistration::is_pending)
    }

    pub fn full_name(&self) -> String {
        match (&self.firstname, &self.lastname) {
            (Some(f), Some(l)) => format!("{f} {l}"),
            (Some(f), None) => f.clone(),
            (None, Some(l)) => l.clone(),
            (None, None) => self.student_id.clone().unwrap_or_else(|| "Unknown".into()),
        }
    }
}

/// `GET admin/info`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profilepic: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `PATCH {role}/profile` body. Only the fields actually being changed are
/// serialized; the backend treats absent fields as untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_decodes_and_names() {
        let json = r#"{
            "token": "jwt-abc",
            "message": "Login successful",
            "student": { "firstname": "Ada", "lastname": "Okafor" }
        }"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.token, "jwt-abc");
        assert_eq!(login.display_name(), Some("Ada"));
    }

    #[test]
    fn login_without_token_is_a_decode_failure() {
        let json = r#"{ "message": "ok" }"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }

    #[test]
    fn student_info_tolerates_absent_optionals() {
        let json = r#"{ "fullName": "Ada Okafor", "studentId": "CSC/21/014" }"#;
        let info: StudentInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.full_name.as_deref(), Some("Ada Okafor"));
        assert!(info.cgpa.is_none());
        assert!(info.payment_status.is_none());
    }

    #[test]
    fn student_info_rejects_wrong_type() {
        // cgpa must be numeric, not an object
        let json = r#"{ "cgpa": { "value": 4.2 } }"#;
        assert!(serde_json::from_str::<StudentInfo>(json).is_err());
    }

    #[test]
    fn teacher_full_name_joins_present_parts() {
        let json = r#"{ "_id": "t1", "title": "Dr.", "firstName": "Bola", "lastName": "Ade" }"#;
        let teacher: TeacherProfile = serde_json::from_str(json).unwrap();
        assert_eq!(teacher.full_name(), "Dr. Bola Ade");
    }

    #[test]
    fn student_summary_embeds_course_registrations() {
        let json = r#"{
            "_id": "s1",
            "firstname": "Ada",
            "lastname": "Okafor",
            "semester": "First Semester",
            "courses": [
                { "course": "c1", "status": "pending" },
                { "course": "c2", "status": "approved" },
                { "course": "c3" }
            ]
        }"#;
        let student: StudentSummary = serde_json::from_str(json).unwrap();
        assert_eq!(student.courses.len(), 3);
        assert!(student.has_pending_courses());
        // A registration with no status reads as pending
        assert!(student.courses[2].is_pending());
    }

    #[test]
    fn student_without_courses_has_none_pending() {
        let student: StudentSummary = serde_json::from_str(r#"{ "_id": "s1" }"#).unwrap();
        assert!(student.courses.is_empty());
        assert!(!student.has_pending_courses());
    }

    #[test]
    fn profile_update_skips_untouched_fields() {
        let update = ProfileUpdate {
            level: Some("300".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"level":"300"}"#);
    }
}
