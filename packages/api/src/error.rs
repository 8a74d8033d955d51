//! Error taxonomy for backend calls.
//!
//! The taxonomy is deliberately shallow, matching how the UI reacts:
//! a 401 clears the role's token and redirects to login, a 403 gets its own
//! toast wording, every other non-2xx becomes a toast carrying the backend's
//! `message` when one was sent, and transport or schema failures become a
//! generic "server error" toast. No variant is retried automatically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 — the token is missing, expired, or revoked.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// 403 — authenticated but not allowed (e.g. incomplete profile).
    #[error("{}", .message.as_deref().unwrap_or("access forbidden"))]
    Forbidden { message: Option<String> },

    /// Any other non-2xx, with the backend's `message` envelope when present.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Server { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("server error, try again later")]
    Network(#[source] reqwest::Error),

    /// The response arrived but did not match its schema.
    #[error("invalid server response")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Classify a non-2xx status with its optional `message` body.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden { message },
            _ => ApiError::Server { status, message },
        }
    }

    /// True when the caller should clear the role's token and return to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_unauthorized() {
        let err = ApiError::from_status(401, Some("token expired".into()));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn status_403_is_forbidden_with_message() {
        let err = ApiError::from_status(403, Some("complete your profile".into()));
        assert!(matches!(&err, ApiError::Forbidden { .. }));
        assert_eq!(err.to_string(), "complete your profile");
    }

    #[test]
    fn other_statuses_carry_backend_message() {
        let err = ApiError::from_status(422, Some("invalid course list".into()));
        match &err {
            ApiError::Server { status, .. } => assert_eq!(*status, 422),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.to_string(), "invalid course list");
    }

    #[test]
    fn missing_message_falls_back_to_generic_text() {
        let err = ApiError::from_status(500, None);
        assert_eq!(err.to_string(), "request failed");
        let err = ApiError::from_status(403, None);
        assert_eq!(err.to_string(), "access forbidden");
    }
}
