//! Profile and dashboard-header data: per-role info, profile updates, the
//! multipart photo upload, and the dashboard stat counters.

use store::Role;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AdminInfo, AdminStats, ProfileUpdate, ServerMessage, StudentInfo, StudentStats, TeacherProfile,
    TeacherStats,
};

impl ApiClient {
    /// `GET student/info` — the dashboard header card.
    pub async fn student_info(&self) -> Result<StudentInfo, ApiError> {
        self.get_json("student/info").await
    }

    /// `GET student/profile` — the editable profile record.
    pub async fn student_profile(&self) -> Result<StudentInfo, ApiError> {
        self.get_json("student/profile").await
    }

    /// `GET teacher/profile`.
    pub async fn teacher_profile(&self) -> Result<TeacherProfile, ApiError> {
        self.get_json("teacher/profile").await
    }

    /// `GET admin/info`.
    pub async fn admin_info(&self) -> Result<AdminInfo, ApiError> {
        self.get_json("admin/info").await
    }

    /// `GET admin/profile`.
    pub async fn admin_profile(&self) -> Result<AdminInfo, ApiError> {
        self.get_json("admin/profile").await
    }

    /// `PATCH {role}/profile`. Only changed fields are sent.
    pub async fn update_profile(
        &self,
        role: Role,
        update: &ProfileUpdate,
    ) -> Result<ServerMessage, ApiError> {
        self.patch_json(&format!("{}/profile", role.prefix()), update)
            .await
    }

    /// `POST {role}/upload-profile-photo` — multipart, field name `photo`.
    pub async fn upload_profile_photo(
        &self,
        role: Role,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ServerMessage, ApiError> {
        self.post_file(
            &format!("{}/upload-profile-photo", role.prefix()),
            "photo",
            filename,
            content_type,
            bytes,
        )
        .await
    }

    /// `GET student/dashboard/stats`.
    pub async fn student_stats(&self) -> Result<StudentStats, ApiError> {
        self.get_json("student/dashboard/stats").await
    }

    /// `GET teacher/dashboard/stats`.
    pub async fn teacher_stats(&self) -> Result<TeacherStats, ApiError> {
        self.get_json("teacher/dashboard/stats").await
    }

    /// `GET admin/dashboard/stats`.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get_json("admin/dashboard/stats").await
    }
}
