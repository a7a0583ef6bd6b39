//! In-app admin notification entity.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::directory::StaffRole;

/// Event kind of a persisted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A dormitory booking was submitted.
    NewDormitoryBooking,
    /// A facility booking was submitted.
    NewFacilityBooking,
}

impl NotificationKind {
    /// Stable string form used in persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewDormitoryBooking => "new_dormitory_booking",
            Self::NewFacilityBooking => "new_facility_booking",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored kind string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification kind: {value}")]
pub struct UnknownKindError {
    /// The unrecognised kind string.
    pub value: String,
}

impl FromStr for NotificationKind {
    type Err = UnknownKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new_dormitory_booking" => Ok(Self::NewDormitoryBooking),
            "new_facility_booking" => Ok(Self::NewFacilityBooking),
            other => Err(UnknownKindError {
                value: other.to_owned(),
            }),
        }
    }
}

/// A stored in-app alert for a dashboard role.
///
/// ## Invariants
/// - Created append-only by the fan-out; the only permitted mutation is
///   flipping `is_read` to true.
/// - `link`, when present, is a relative path; the dashboard resolves it
///   against its own origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminNotification {
    /// Stable identifier.
    pub id: Uuid,
    /// Human-readable alert text.
    pub message: String,
    /// Event kind that produced the alert.
    pub kind: NotificationKind,
    /// Booking the alert refers to.
    pub related_booking_id: String,
    /// Dashboard role the alert targets.
    pub recipient_role: StaffRole,
    /// Whether the recipient has opened the alert.
    pub is_read: bool,
    /// Relative deep link into the relevant admin view.
    pub link: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a notification; ids and timestamps are assigned by
/// the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdminNotification {
    /// Human-readable alert text.
    pub message: String,
    /// Event kind that produced the alert.
    pub kind: NotificationKind,
    /// Booking the alert refers to.
    pub related_booking_id: String,
    /// Dashboard role the alert targets.
    pub recipient_role: StaffRole,
    /// Relative deep link into the relevant admin view.
    pub link: Option<String>,
}
