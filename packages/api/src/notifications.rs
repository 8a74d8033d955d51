//! Notification inbox endpoints.

use store::Role;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Notification, NotificationList};

impl ApiClient {
    /// `GET {role}/notifications`.
    pub async fn notifications(&self, role: Role) -> Result<Vec<Notification>, ApiError> {
        let list: NotificationList = self
            .get_json(&format!("{}/notifications", role.prefix()))
            .await?;
        Ok(list.notifications)
    }

    /// `PATCH {role}/notifications/mark-read` — marks the whole inbox read.
    pub async fn mark_notifications_read(&self, role: Role) -> Result<(), ApiError> {
        self.patch_unit(&format!("{}/notifications/mark-read", role.prefix()), &())
            .await
    }
}
