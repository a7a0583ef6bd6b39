//! OpenAPI document for the HTTP surface.
//!
//! Served at `/api-docs/openapi.json` in debug builds for local tooling;
//! release builds keep the document out of the binary's routes.

use utoipa::OpenApi;

use crate::domain::booking::{
    ApprovalStatus, Booking, BookingCategory, BookingItem, PaymentStatus,
};
use crate::domain::directory::StaffRole;
use crate::domain::fan_out::{FanOutReport, NotificationOutcome, SmsDispatch};
use crate::domain::notification::{AdminNotification, NotificationKind};
use crate::domain::ports::{SmsOutcome, SmsSkipReason};
use crate::inbound::http::notifications::InboxPage;

/// OpenAPI document for the notification service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rental notification service API",
        description = "Booking-event fan-out webhooks, the admin notification inbox, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::events::booking_created,
        crate::inbound::http::events::booking_approved,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::mark_notification_read,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Booking,
        BookingItem,
        BookingCategory,
        ApprovalStatus,
        PaymentStatus,
        StaffRole,
        FanOutReport,
        SmsDispatch,
        NotificationOutcome,
        SmsOutcome,
        SmsSkipReason,
        AdminNotification,
        NotificationKind,
        InboxPage,
    )),
    tags(
        (name = "events", description = "Booking lifecycle webhooks"),
        (name = "notifications", description = "Admin notification inbox"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Document shape checks.

    use super::*;

    #[test]
    fn document_registers_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/events/booking-created",
            "/api/v1/events/booking-approved",
            "/api/v1/notifications",
            "/api/v1/notifications/{id}/read",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in the OpenAPI document"
            );
        }
    }

    #[test]
    fn document_registers_the_report_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["FanOutReport", "SmsOutcome", "AdminNotification", "InboxPage"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
