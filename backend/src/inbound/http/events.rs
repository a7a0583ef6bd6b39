//! Booking-event webhook handlers.
//!
//! ```text
//! POST /api/v1/events/booking-created
//! POST /api/v1/events/booking-approved
//! ```
//!
//! Both endpoints return 202 regardless of delivery outcomes: the fan-out
//! is best-effort by contract and its report carries the per-recipient
//! results for the caller to inspect.

use actix_web::{HttpResponse, post, web};

use crate::domain::booking::Booking;
use crate::domain::fan_out::FanOutReport;
use crate::inbound::http::state::HttpState;

/// Handle a freshly submitted booking.
#[utoipa::path(
    post,
    path = "/api/v1/events/booking-created",
    request_body = Booking,
    responses(
        (status = 202, description = "Fan-out executed; see report", body = FanOutReport),
        (status = 400, description = "Malformed booking payload")
    ),
    tags = ["events"],
    operation_id = "bookingCreated"
)]
#[post("/events/booking-created")]
pub async fn booking_created(
    state: web::Data<HttpState>,
    payload: web::Json<Booking>,
) -> HttpResponse {
    let report = state.fan_out.notify_admins_of_new_booking(&payload).await;
    HttpResponse::Accepted().json(report)
}

/// Handle a booking approval.
#[utoipa::path(
    post,
    path = "/api/v1/events/booking-approved",
    request_body = Booking,
    responses(
        (status = 202, description = "Fan-out executed; see report", body = FanOutReport),
        (status = 400, description = "Malformed booking payload")
    ),
    tags = ["events"],
    operation_id = "bookingApproved"
)]
#[post("/events/booking-approved")]
pub async fn booking_approved(
    state: web::Data<HttpState>,
    payload: web::Json<Booking>,
) -> HttpResponse {
    let report = state
        .fan_out
        .notify_keyholders_of_dormitory_approval(&payload)
        .await;
    HttpResponse::Accepted().json(report)
}

#[cfg(test)]
mod tests {
    //! Webhook wiring against fixture ports.

    use std::sync::Arc;

    use actix_web::{App, test};
    use serde_json::{Value, json};
    use url::Url;

    use super::*;
    use crate::domain::fan_out::NotificationFanOut;
    use crate::domain::ports::{
        FixtureNotificationRepository, FixtureSmsGateway, FixtureUserDirectory,
        NotificationRepository, SmsGateway, UserDirectory,
    };

    fn fixture_state() -> HttpState {
        let directory: Arc<dyn UserDirectory> = Arc::new(FixtureUserDirectory);
        let sms: Arc<dyn SmsGateway> = Arc::new(FixtureSmsGateway);
        let notifications: Arc<dyn NotificationRepository> =
            Arc::new(FixtureNotificationRepository);
        HttpState {
            fan_out: Arc::new(NotificationFanOut::new(
                directory,
                sms,
                Arc::clone(&notifications),
                Url::parse("https://rentals.example.et").unwrap(),
            )),
            notifications,
        }
    }

    fn booking_payload(category: &str) -> Value {
        json!({
            "id": "bk-20260912-0001",
            "category": category,
            "requester": "Abebe Kebede",
            "items": [{"name": "Room 12"}],
            "checkIn": "2026-09-12",
            "checkOut": "2026-09-19",
            "totalCostBirr": 1500,
            "approvalStatus": "pending",
            "paymentStatus": "unpaid"
        })
    }

    #[actix_web::test]
    async fn booking_created_returns_accepted_with_a_report() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_state()))
                .service(booking_created),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/events/booking-created")
            .set_json(booking_payload("dormitory"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::ACCEPTED);

        let body: Value = test::read_body_json(response).await;
        // The fixture directory is empty, so no SMS entries are reported.
        assert_eq!(body["sms"], json!([]));
        assert_eq!(body["notification"]["status"], "persisted");
    }

    #[actix_web::test]
    async fn booking_approved_skips_non_dormitory_bookings() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_state()))
                .service(booking_approved),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/events/booking-approved")
            .set_json(booking_payload("facility"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::ACCEPTED);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["notification"]["status"], "skipped");
        assert_eq!(body["notification"]["reason"], "not a dormitory booking");
    }

    #[actix_web::test]
    async fn malformed_payload_is_rejected_before_the_fan_out() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_state()))
                .service(booking_created),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/events/booking-created")
            .set_json(json!({"id": "bk-1"}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_client_error());
    }
}
