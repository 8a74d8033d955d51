//! Authentication: login, registration, and the three-step password reset.

use serde::Serialize;
use store::Role;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginResponse, ServerMessage};

/// Login credentials. Students authenticate with their student ID, staff and
/// admins with email.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Credentials {
    Student {
        #[serde(rename = "studentId")]
        student_id: String,
        password: String,
    },
    Email {
        email: String,
        password: String,
    },
}

/// Account-creation body. Field presence varies per role; absent fields are
/// not serialized.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyCodeBody<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordBody<'a> {
    email: &'a str,
    new_password: &'a str,
}

/// Account creation path; the admin endpoint is the odd one out.
fn signup_path(role: Role) -> &'static str {
    match role {
        Role::Student => "student/register",
        Role::Teacher => "teacher/register",
        Role::Admin => "admin/signup",
    }
}

impl ApiClient {
    /// `POST {role}/login`. On success the caller persists the token under
    /// the role's storage key.
    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post_json(&format!("{}/login", role.prefix()), credentials)
            .await
    }

    pub async fn signup(&self, role: Role, request: &SignupRequest) -> Result<ServerMessage, ApiError> {
        self.post_json(signup_path(role), request).await
    }

    /// Step 1 of the reset flow: the backend emails a 6-digit code.
    pub async fn forgot_password(&self, role: Role, email: &str) -> Result<ServerMessage, ApiError> {
        self.post_json(&format!("{}/forgot-password", role.prefix()), &EmailBody { email })
            .await
    }

    /// Step 2: check the emailed code before showing the password form.
    pub async fn verify_code(&self, role: Role, email: &str, code: &str) -> Result<ServerMessage, ApiError> {
        self.post_json(
            &format!("{}/verify-code", role.prefix()),
            &VerifyCodeBody { email, code },
        )
        .await
    }

    /// Step 3: set the new password for the verified email.
    pub async fn reset_password(
        &self,
        role: Role,
        email: &str,
        new_password: &str,
    ) -> Result<ServerMessage, ApiError> {
        self.post_json(
            &format!("{}/reset-password", role.prefix()),
            &ResetPasswordBody { email, new_password },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_credentials_serialize_with_student_id() {
        let creds = Credentials::Student {
            student_id: "CSC/21/014".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert_eq!(json, r#"{"studentId":"CSC/21/014","password":"hunter2"}"#);
    }

    #[test]
    fn staff_credentials_serialize_with_email() {
        let creds = Credentials::Email {
            email: "bola@college.edu".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert_eq!(json, r#"{"email":"bola@college.edu","password":"hunter2"}"#);
    }

    #[test]
    fn signup_paths_per_role() {
        assert_eq!(signup_path(Role::Student), "student/register");
        assert_eq!(signup_path(Role::Teacher), "teacher/register");
        assert_eq!(signup_path(Role::Admin), "admin/signup");
    }

    #[test]
    fn signup_request_omits_absent_fields() {
        let request = SignupRequest {
            email: "ada@college.edu".into(),
            password: "hunter2".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"email":"ada@college.edu","password":"hunter2"}"#);
    }
}
