//! Chat endpoints. Every conversation is addressed as (own role, peer); the
//! role-and-peer pair picks the backend path, which is irregular for
//! historical reasons and lives in exactly one place here.

use serde::Serialize;
use store::Role;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Message, StudentSummary, TeacherProfile, UnreadCounts};

/// The other side of a conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Peer {
    /// The admin inbox (no id; there is one admin thread per user).
    Admin,
    Teacher(String),
    Student(String),
}

fn thread_path(role: Role, peer: &Peer) -> Result<String, ApiError> {
    let path = match (role, peer) {
        (Role::Student, Peer::Teacher(id)) => {
            format!("student/messages/teacher?teacherId={id}")
        }
        (Role::Student, Peer::Admin) => "student/messages/admin".to_string(),
        (Role::Teacher, Peer::Student(id)) => {
            format!("teacher/messages/student?studentId={id}")
        }
        (Role::Teacher, Peer::Admin) => "teacher/messages/admin-thread".to_string(),
        (Role::Admin, Peer::Teacher(id)) => format!("admin/messages?teacherId={id}"),
        (Role::Admin, Peer::Student(id)) => format!("admin/messages?studentId={id}"),
        _ => return Err(unsupported(role, peer)),
    };
    Ok(path)
}

fn send_path(role: Role, peer: &Peer) -> Result<String, ApiError> {
    let path = match (role, peer) {
        (Role::Student, Peer::Teacher(_)) => "student/messages/teacher",
        (Role::Student, Peer::Admin) => "student/messages/admin",
        (Role::Teacher, Peer::Student(_)) => "teacher/messages/send",
        (Role::Teacher, Peer::Admin) => "teacher/messages/send-admin",
        (Role::Admin, Peer::Teacher(_)) => "admin/messages/send",
        (Role::Admin, Peer::Student(_)) => "admin/messages/send-to-student",
        _ => return Err(unsupported(role, peer)),
    };
    Ok(path.to_string())
}

fn unsupported(role: Role, peer: &Peer) -> ApiError {
    ApiError::Server {
        status: 400,
        message: Some(format!("no {} conversation with {peer:?}", role.prefix())),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendBody<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    teacher_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    student_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditBody<'a> {
    new_text: &'a str,
}

impl ApiClient {
    /// Fetch a full conversation, server order.
    pub async fn thread(&self, role: Role, peer: &Peer) -> Result<Vec<Message>, ApiError> {
        self.get_json(&thread_path(role, peer)?).await
    }

    /// `POST` one message into a conversation.
    pub async fn send_message(&self, role: Role, peer: &Peer, text: &str) -> Result<(), ApiError> {
        let body = SendBody {
            text,
            teacher_id: match peer {
                Peer::Teacher(id) => Some(id.as_str()),
                _ => None,
            },
            student_id: match peer {
                Peer::Student(id) => Some(id.as_str()),
                _ => None,
            },
        };
        self.post_unit(&send_path(role, peer)?, &body).await
    }

    /// `PUT {role}/editMessage/:id`.
    pub async fn edit_message(&self, role: Role, id: &str, new_text: &str) -> Result<(), ApiError> {
        self.put_unit(
            &format!("{}/editMessage/{id}", role.prefix()),
            &EditBody { new_text },
        )
        .await
    }

    /// `DELETE {role}/deleteMessage/:id`.
    pub async fn delete_message(&self, role: Role, id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("{}/deleteMessage/{id}", role.prefix()))
            .await
    }

    /// Unread-counter badges for the chat sidebar.
    pub async fn unread_counts(&self, role: Role) -> Result<UnreadCounts, ApiError> {
        let path = match role {
            Role::Student => "student/messages/unread-counts",
            Role::Teacher => "teacher/unread-counts",
            Role::Admin => "admin/messages/unread-counts",
        };
        self.get_json(path).await
    }

    /// Teacher contact list for the student chat (`GET student/teachers`),
    /// also the admin's management listing (`GET admin/teachers`).
    pub async fn list_teachers(&self, role: Role) -> Result<Vec<TeacherProfile>, ApiError> {
        self.get_json(&format!("{}/teachers", role.prefix())).await
    }

    /// Student listing for teacher chat/grading and admin management.
    pub async fn list_students(&self, role: Role) -> Result<Vec<StudentSummary>, ApiError> {
        self.get_json(&format!("{}/students", role.prefix())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_paths_per_role_and_peer() {
        let cases = [
            (
                Role::Student,
                Peer::Teacher("t1".into()),
                "student/messages/teacher?teacherId=t1",
            ),
            (Role::Student, Peer::Admin, "student/messages/admin"),
            (
                Role::Teacher,
                Peer::Student("s1".into()),
                "teacher/messages/student?studentId=s1",
            ),
            (Role::Teacher, Peer::Admin, "teacher/messages/admin-thread"),
            (
                Role::Admin,
                Peer::Teacher("t1".into()),
                "admin/messages?teacherId=t1",
            ),
            (
                Role::Admin,
                Peer::Student("s1".into()),
                "admin/messages?studentId=s1",
            ),
        ];
        for (role, peer, expected) in cases {
            assert_eq!(thread_path(role, &peer).unwrap(), expected);
        }
    }

    #[test]
    fn send_paths_are_irregular_but_fixed() {
        assert_eq!(
            send_path(Role::Teacher, &Peer::Admin).unwrap(),
            "teacher/messages/send-admin"
        );
        assert_eq!(
            send_path(Role::Admin, &Peer::Student("s1".into())).unwrap(),
            "admin/messages/send-to-student"
        );
    }

    #[test]
    fn student_to_student_is_rejected() {
        assert!(thread_path(Role::Student, &Peer::Student("s1".into())).is_err());
        assert!(send_path(Role::Admin, &Peer::Admin).is_err());
    }

    #[test]
    fn send_body_carries_only_the_relevant_peer_id() {
        let body = SendBody {
            text: "hello",
            teacher_id: Some("t1"),
            student_id: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"text":"hello","teacherId":"t1"}"#
        );
    }
}
