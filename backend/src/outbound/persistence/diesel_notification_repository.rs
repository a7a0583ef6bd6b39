//! Diesel-backed `NotificationRepository` adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::directory::StaffRole;
use crate::domain::notification::{AdminNotification, NewAdminNotification, NotificationKind};
use crate::domain::ports::{NotificationRepository, NotificationRepositoryError};
use crate::outbound::persistence::pool::DbPool;
use crate::outbound::persistence::schema::admin_notifications;

/// Append-only notification store on the `admin_notifications` table.
#[derive(Clone)]
pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    /// Create an adapter over the given pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(Insertable)]
#[diesel(table_name = admin_notifications)]
struct NewNotificationRow<'a> {
    id: Uuid,
    message: &'a str,
    kind: &'a str,
    related_booking_id: &'a str,
    recipient_role: &'a str,
    is_read: bool,
    link: Option<&'a str>,
    created_at: DateTime<Utc>,
}

#[derive(Queryable)]
struct NotificationRow {
    id: Uuid,
    message: String,
    kind: String,
    related_booking_id: String,
    recipient_role: String,
    is_read: bool,
    link: Option<String>,
    created_at: DateTime<Utc>,
}

impl NotificationRow {
    /// Map a stored row to the domain entity, or `None` (with a warning)
    /// when enum text written by an older or newer deployment is unknown.
    fn into_domain(self) -> Option<AdminNotification> {
        let kind = match self.kind.parse::<NotificationKind>() {
            Ok(kind) => kind,
            Err(err) => {
                warn!(id = %self.id, error = %err, "skipping notification row");
                return None;
            }
        };
        let recipient_role = match self.recipient_role.parse::<StaffRole>() {
            Ok(role) => role,
            Err(err) => {
                warn!(id = %self.id, error = %err, "skipping notification row");
                return None;
            }
        };
        Some(AdminNotification {
            id: self.id,
            message: self.message,
            kind,
            related_booking_id: self.related_booking_id,
            recipient_role,
            is_read: self.is_read,
            link: self.link,
            created_at: self.created_at,
        })
    }
}

fn map_pool_error(err: crate::outbound::persistence::pool::PoolError) -> NotificationRepositoryError {
    NotificationRepositoryError::connection(err.to_string())
}

fn map_query_error(err: diesel::result::Error) -> NotificationRepositoryError {
    NotificationRepositoryError::query(err.to_string())
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn create(
        &self,
        notification: &NewAdminNotification,
    ) -> Result<AdminNotification, NotificationRepositoryError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let row = NewNotificationRow {
            id,
            message: &notification.message,
            kind: notification.kind.as_str(),
            related_booking_id: &notification.related_booking_id,
            recipient_role: notification.recipient_role.as_str(),
            is_read: false,
            link: notification.link.as_deref(),
            created_at,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(admin_notifications::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;

        Ok(AdminNotification {
            id,
            message: notification.message.clone(),
            kind: notification.kind,
            related_booking_id: notification.related_booking_id.clone(),
            recipient_role: notification.recipient_role,
            is_read: false,
            link: notification.link.clone(),
            created_at,
        })
    }

    async fn list_for_role(
        &self,
        role: StaffRole,
    ) -> Result<Vec<AdminNotification>, NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<NotificationRow> = admin_notifications::table
            .filter(admin_notifications::recipient_role.eq(role.as_str()))
            .order(admin_notifications::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;

        Ok(rows.into_iter().filter_map(NotificationRow::into_domain).collect())
    }

    async fn mark_read(&self, id: Uuid) -> Result<bool, NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(admin_notifications::table.find(id))
            .set(admin_notifications::is_read.eq(true))
            .execute(&mut conn)
            .await
            .map_err(map_query_error)?;
        Ok(updated > 0)
    }
}
