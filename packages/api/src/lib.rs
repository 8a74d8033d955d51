//! # API crate — typed HTTP client for the portal backend
//!
//! The entire functional surface of this application is a set of HTTP calls to
//! the remote portal backend. This crate is the only place those calls are
//! made: it owns the base URL, the bearer-token header, the response schemas,
//! and the error taxonomy. Views never touch a URL or a raw JSON value.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: request construction, auth header, status→error mapping |
//! | [`error`] | [`ApiError`]: Unauthorized / Forbidden / Server / Network / Decode |
//! | [`models`] | Explicit serde schemas for every response the backend sends |
//! | [`auth`] | login, register, forgot-password / verify-code / reset-password |
//! | [`profile`] | per-role info, profile read/update, multipart photo upload |
//! | [`messages`] | peer-addressed chat threads, send/edit/delete, unread counts |
//! | [`courses`] | course catalogues, submission, approvals, results |
//! | [`assignments`] | assignment CRUD, submissions, grading |
//! | [`payments`] | payment history, Paystack initiation/verification, receipt upload |
//! | [`notifications`] | notification inbox, mark-read |
//!
//! Responses are parsed, not inspected: a payload that does not match its
//! schema surfaces as [`ApiError::Decode`] at this boundary instead of
//! defaulting silently somewhere in a view. Nothing is retried automatically;
//! a failed call leaves the caller in its prior state.

pub mod client;
pub mod error;
pub mod models;

mod assignments;
mod auth;
mod courses;
mod messages;
mod notifications;
mod payments;
mod profile;

pub use assignments::AssignmentDraft;
pub use auth::{Credentials, SignupRequest};
pub use client::ApiClient;
pub use courses::CourseDraft;
pub use error::ApiError;
pub use messages::Peer;
pub use store::Role;
