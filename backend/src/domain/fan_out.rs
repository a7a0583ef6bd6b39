//! Booking-event notification fan-out.
//!
//! Each domain event produces an SMS broadcast and, for new bookings, one
//! persisted in-app notification. The service is deliberately non-throwing:
//! notification delivery is best-effort and must never fail the booking
//! transaction that triggered it, so every port failure is logged and
//! reflected in the returned report instead of propagating.
//!
//! No idempotency is guaranteed. Invoking the same event twice sends twice
//! and stores twice; callers fire each handler exactly once per state
//! transition.

use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tracing::{debug, error, warn};
use url::Url;
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingCategory};
use crate::domain::directory::{StaffRole, eligible_phone_numbers};
use crate::domain::notification::{NewAdminNotification, NotificationKind};
use crate::domain::ports::{NotificationRepository, SmsGateway, SmsOutcome, UserDirectory};

/// Outcome of one per-recipient SMS attempt within a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmsDispatch {
    /// Recipient phone number as found in the directory.
    pub recipient: String,
    /// Result of the send attempt.
    pub outcome: SmsOutcome,
}

/// Outcome of the in-app notification write within a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotificationOutcome {
    /// A notification record was stored.
    Persisted {
        /// Identifier of the stored record.
        id: Uuid,
    },
    /// No write was attempted for this event.
    Skipped {
        /// Why nothing was written.
        reason: String,
    },
    /// The write was attempted and failed; the failure was absorbed.
    Failed {
        /// Failure detail from the repository.
        message: String,
    },
}

/// Per-event report of everything the fan-out did.
///
/// Total success or failure is visible here rather than only in logs; the
/// caller still never sees an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FanOutReport {
    /// One entry per eligible recipient, in directory order.
    pub sms: Vec<SmsDispatch>,
    /// What happened to the in-app notification.
    pub notification: NotificationOutcome,
}

impl FanOutReport {
    fn skipped(reason: impl Into<String>) -> Self {
        Self {
            sms: Vec::new(),
            notification: NotificationOutcome::Skipped {
                reason: reason.into(),
            },
        }
    }
}

const APPROVAL_SMS_ONLY: &str = "approval notifications are sms-only";

/// Fan-out service over the directory, SMS, and notification-store ports.
pub struct NotificationFanOut<D: ?Sized, S: ?Sized, N: ?Sized> {
    directory: Arc<D>,
    sms: Arc<S>,
    notifications: Arc<N>,
    public_base_url: Url,
}

impl<D: ?Sized, S: ?Sized, N: ?Sized> NotificationFanOut<D, S, N> {
    /// Create a service over the given port implementations.
    ///
    /// `public_base_url` is the dashboard origin embedded in SMS bodies;
    /// persisted notifications keep links relative.
    pub fn new(
        directory: Arc<D>,
        sms: Arc<S>,
        notifications: Arc<N>,
        public_base_url: Url,
    ) -> Self {
        Self {
            directory,
            sms,
            notifications,
            public_base_url,
        }
    }
}

impl<D, S, N> NotificationFanOut<D, S, N>
where
    D: UserDirectory + ?Sized,
    S: SmsGateway + ?Sized,
    N: NotificationRepository + ?Sized,
{
    /// Handle a freshly submitted booking: SMS all admins and superadmins
    /// and store one in-app notification for the admin dashboard.
    pub async fn notify_admins_of_new_booking(&self, booking: &Booking) -> FanOutReport {
        let recipients = match self
            .directory
            .entries_with_roles(&[StaffRole::Admin, StaffRole::Superadmin])
            .await
        {
            Ok(entries) => eligible_phone_numbers(&entries),
            Err(err) => {
                error!(
                    booking_id = %booking.id,
                    error = %err,
                    "directory lookup failed; skipping new-booking fan-out"
                );
                return FanOutReport::skipped(format!("directory lookup failed: {err}"));
            }
        };

        let summary = new_booking_summary(booking);
        let (kind, path) = admin_deep_link(booking);
        let sms_body = format!(
            "{summary}\n{link}",
            link = absolute_link(&self.public_base_url, &path)
        );
        let sms = self.broadcast(&recipients, &sms_body).await;

        let record = NewAdminNotification {
            message: summary,
            kind,
            related_booking_id: booking.id.clone(),
            recipient_role: StaffRole::Admin,
            link: Some(path),
        };
        let notification = match self.notifications.create(&record).await {
            Ok(stored) => NotificationOutcome::Persisted { id: stored.id },
            Err(err) => {
                error!(
                    booking_id = %booking.id,
                    error = %err,
                    "failed to store new-booking notification"
                );
                NotificationOutcome::Failed {
                    message: err.to_string(),
                }
            }
        };

        FanOutReport { sms, notification }
    }

    /// Handle a dormitory booking approval: SMS every keyholder so the key
    /// handover can be prepared. No in-app notification is written.
    pub async fn notify_keyholders_of_dormitory_approval(&self, booking: &Booking) -> FanOutReport {
        if booking.category != BookingCategory::Dormitory {
            debug!(
                booking_id = %booking.id,
                category = booking.category.as_str(),
                "approval fan-out only applies to dormitory bookings"
            );
            return FanOutReport::skipped("not a dormitory booking");
        }

        let recipients = match self
            .directory
            .entries_with_roles(&[StaffRole::Keyholder])
            .await
        {
            Ok(entries) => eligible_phone_numbers(&entries),
            Err(err) => {
                error!(
                    booking_id = %booking.id,
                    error = %err,
                    "directory lookup failed; skipping approval fan-out"
                );
                return FanOutReport::skipped(format!("directory lookup failed: {err}"));
            }
        };
        if recipients.is_empty() {
            warn!(booking_id = %booking.id, "no keyholder phone numbers on file");
            return FanOutReport::skipped(APPROVAL_SMS_ONLY);
        }

        let sms = self.broadcast(&recipients, &approval_message(booking)).await;
        FanOutReport {
            sms,
            notification: NotificationOutcome::Skipped {
                reason: APPROVAL_SMS_ONLY.to_owned(),
            },
        }
    }

    /// Dispatch one message to every recipient concurrently and wait for
    /// all attempts to settle. Individual failures are already absorbed by
    /// the gateway, so one bad number never blocks the rest.
    async fn broadcast(&self, recipients: &[String], message: &str) -> Vec<SmsDispatch> {
        let sends = recipients.iter().map(|recipient| async move {
            SmsDispatch {
                recipient: recipient.clone(),
                outcome: self.sms.send(recipient, message).await,
            }
        });
        join_all(sends).await
    }
}

fn new_booking_summary(booking: &Booking) -> String {
    format!(
        "New {category} booking from {requester}: {items}. Total {total} ETB. Ref {reference}.",
        category = booking.category.as_str(),
        requester = booking.requester,
        items = booking.item_names(),
        total = booking.total_cost_birr,
        reference = booking.short_id(),
    )
}

fn admin_deep_link(booking: &Booking) -> (NotificationKind, String) {
    match booking.category {
        BookingCategory::Dormitory => (
            NotificationKind::NewDormitoryBooking,
            format!("/admin/manage-dormitory-bookings#{}", booking.id),
        ),
        BookingCategory::Facility => (
            NotificationKind::NewFacilityBooking,
            format!("/admin/manage-facility-bookings#{}", booking.id),
        ),
    }
}

fn absolute_link(base: &Url, path: &str) -> String {
    format!("{}{path}", base.as_str().trim_end_matches('/'))
}

fn approval_message(booking: &Booking) -> String {
    let room = booking
        .room
        .clone()
        .or_else(|| booking.items.first().map(|item| item.name.clone()))
        .unwrap_or_else(|| "-".to_owned());
    format!(
        "Dormitory booking approved.\nGuest: {guest}\nRoom: {room}\nCheck-in: {check_in}\nPlease prepare the key handover.",
        guest = booking.requester,
        check_in = booking.check_in.format_long(),
    )
}
