use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One chat message as stored by the backend.
///
/// `sender` is a role tag like `"Student …"`, `"Teacher …"` or `"Admin"`;
/// the UI only inspects its role prefix to decide bubble alignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub sender: Option<String>,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, rename = "isRead")]
    pub is_read: bool,
}

impl Message {
    /// Whether the message was sent by the given role.
    pub fn sent_by(&self, role_prefix: &str) -> bool {
        self.sender
            .as_deref()
            .map(|s| s.to_ascii_lowercase().starts_with(role_prefix))
            .unwrap_or(false)
    }
}

/// `GET {role}/messages/unread-counts` (and the teacher's `unread-counts`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnreadCounts {
    #[serde(default)]
    pub admin: u32,
    #[serde(default)]
    pub teachers: HashMap<String, u32>,
    #[serde(default)]
    pub students: HashMap<String, u32>,
}

impl UnreadCounts {
    pub fn for_teacher(&self, teacher_id: &str) -> u32 {
        self.teachers.get(teacher_id).copied().unwrap_or(0)
    }

    pub fn for_student(&self, student_id: &str) -> u32 {
        self.students.get(student_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_decodes_backend_shape() {
        let json = r#"{
            "_id": "m1",
            "sender": "Student Ada",
            "text": "Good morning",
            "timestamp": "2026-02-11T08:30:00.000Z",
            "isRead": true
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.is_read);
        assert!(msg.sent_by("student"));
        assert!(!msg.sent_by("admin"));
    }

    #[test]
    fn unread_counts_default_to_zero() {
        let counts: UnreadCounts = serde_json::from_str("{}").unwrap();
        assert_eq!(counts.admin, 0);
        assert_eq!(counts.for_teacher("t1"), 0);

        let counts: UnreadCounts =
            serde_json::from_str(r#"{ "admin": 2, "teachers": { "t1": 5 } }"#).unwrap();
        assert_eq!(counts.admin, 2);
        assert_eq!(counts.for_teacher("t1"), 5);
        assert_eq!(counts.for_student("s1"), 0);
    }
}
