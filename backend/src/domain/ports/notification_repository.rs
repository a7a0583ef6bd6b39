//! Driven port for persisting and reading in-app notifications.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::directory::StaffRole;
use crate::domain::notification::{AdminNotification, NewAdminNotification};

/// Errors surfaced while persisting or reading notifications.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationRepositoryError {
    /// The backing store could not be reached.
    #[error("notification store unavailable: {message}")]
    Connection {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The operation itself failed.
    #[error("notification store operation failed: {message}")]
    Query {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl NotificationRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the append-only notification store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist one notification, assigning its id and creation time.
    async fn create(
        &self,
        notification: &NewAdminNotification,
    ) -> Result<AdminNotification, NotificationRepositoryError>;

    /// Return a role's notifications, newest first.
    async fn list_for_role(
        &self,
        role: StaffRole,
    ) -> Result<Vec<AdminNotification>, NotificationRepositoryError>;

    /// Mark one notification read. Returns false when the id is unknown.
    async fn mark_read(&self, id: Uuid) -> Result<bool, NotificationRepositoryError>;
}

/// Fixture repository that accepts writes and reads back nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureNotificationRepository;

#[async_trait]
impl NotificationRepository for FixtureNotificationRepository {
    async fn create(
        &self,
        notification: &NewAdminNotification,
    ) -> Result<AdminNotification, NotificationRepositoryError> {
        Ok(AdminNotification {
            id: Uuid::new_v4(),
            message: notification.message.clone(),
            kind: notification.kind,
            related_booking_id: notification.related_booking_id.clone(),
            recipient_role: notification.recipient_role,
            is_read: false,
            link: notification.link.clone(),
            created_at: chrono::Utc::now(),
        })
    }

    async fn list_for_role(
        &self,
        _role: StaffRole,
    ) -> Result<Vec<AdminNotification>, NotificationRepositoryError> {
        Ok(Vec::new())
    }

    async fn mark_read(&self, _id: Uuid) -> Result<bool, NotificationRepositoryError> {
        Ok(false)
    }
}
