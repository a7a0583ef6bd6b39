//! Notification inbox handlers.
//!
//! ```text
//! GET  /api/v1/notifications
//! POST /api/v1/notifications/{id}/read
//! ```
//!
//! The list endpoint serves the dashboard's notification table: the full
//! role inbox is loaded newest-first and the query parameters drive an
//! in-memory [`TableView`] for search, sort, and pagination.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabular::{CellValue, SortDirection, TableView};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::directory::StaffRole;
use crate::domain::notification::AdminNotification;
use crate::domain::ports::NotificationRepositoryError;
use crate::inbound::http::state::HttpState;

/// Query parameters for the inbox table.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct InboxQuery {
    /// Dashboard role whose inbox to list. Defaults to `admin`.
    pub role: Option<String>,
    /// Case-insensitive search over message text and kind.
    pub search: Option<String>,
    /// Column to sort by: `message`, `kind`, `createdAt`, or `read`.
    pub sort: Option<String>,
    /// Sort direction, `asc` (default) or `desc`.
    pub dir: Option<String>,
    /// Zero-based page index; out-of-range values are clamped.
    pub page: Option<isize>,
    /// Page size; defaults to 10.
    pub rows: Option<usize>,
}

/// One page of a role's inbox.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxPage {
    /// Notifications on the current page, in view order.
    pub items: Vec<AdminNotification>,
    /// Zero-based page index after clamping.
    pub page: usize,
    /// Total pages for the filtered set.
    pub page_count: usize,
    /// Total notifications matching the search.
    pub total_items: usize,
}

fn repository_error_response(err: &NotificationRepositoryError) -> HttpResponse {
    error!(error = %err, "notification store request failed");
    let status = match err {
        NotificationRepositoryError::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
        NotificationRepositoryError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(json!({ "error": err.to_string() }))
}

fn inbox_view(notifications: Vec<AdminNotification>, query: &InboxQuery) -> InboxPage {
    let mut builder = TableView::builder(notifications)
        .column("message", |n: &AdminNotification| {
            CellValue::Text(n.message.clone())
        })
        .column("kind", |n: &AdminNotification| {
            CellValue::Text(n.kind.as_str().to_owned())
        })
        .column("createdAt", |n: &AdminNotification| {
            CellValue::Timestamp(n.created_at)
        })
        .column("read", |n: &AdminNotification| CellValue::Bool(n.is_read))
        .search_keys(["message", "kind"]);
    if let Some(rows) = query.rows {
        builder = builder.rows_per_page(rows);
    }
    if let Some(sort) = &query.sort {
        let direction = match query.dir.as_deref() {
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        builder = builder.initial_sort(sort.clone(), direction);
    }

    let mut view = builder.build();
    if let Some(search) = &query.search {
        view.set_search(search.clone());
    }
    view.go_to_page(query.page.unwrap_or(0));

    InboxPage {
        items: view.page_items().into_iter().cloned().collect(),
        page: view.current_page(),
        page_count: view.page_count(),
        total_items: view.total_items(),
    }
}

/// List a role's inbox as a searchable, sortable, paginated table.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(InboxQuery),
    responses(
        (status = 200, description = "One inbox page", body = InboxPage),
        (status = 400, description = "Unknown role"),
        (status = 500, description = "Notification store failure"),
        (status = 503, description = "Notification store unavailable")
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn list_notifications(
    state: web::Data<HttpState>,
    query: web::Query<InboxQuery>,
) -> HttpResponse {
    let role = match query.role.as_deref() {
        None => StaffRole::Admin,
        Some(raw) => match raw.parse::<StaffRole>() {
            Ok(role) => role,
            Err(err) => {
                return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
            }
        },
    };

    match state.notifications.list_for_role(role).await {
        Ok(notifications) => HttpResponse::Ok().json(inbox_view(notifications, &query)),
        Err(err) => repository_error_response(&err),
    }
}

/// Mark one notification as read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = Uuid, Path, description = "Notification identifier")),
    responses(
        (status = 204, description = "Notification marked read"),
        (status = 404, description = "Unknown notification id"),
        (status = 500, description = "Notification store failure"),
        (status = 503, description = "Notification store unavailable")
    ),
    tags = ["notifications"],
    operation_id = "markNotificationRead"
)]
#[post("/notifications/{id}/read")]
pub async fn mark_notification_read(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> HttpResponse {
    match state.notifications.mark_read(*id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(json!({ "error": "unknown notification" })),
        Err(err) => repository_error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    //! Inbox endpoints against a mocked store.

    use std::sync::Arc;

    use actix_web::{App, test};
    use chrono::{Duration, Utc};
    use serde_json::Value;
    use url::Url;

    use super::*;
    use crate::domain::fan_out::NotificationFanOut;
    use crate::domain::notification::NotificationKind;
    use crate::domain::ports::{
        FixtureSmsGateway, FixtureUserDirectory, MockNotificationRepository,
        NotificationRepository, SmsGateway, UserDirectory,
    };

    fn state_with(notifications: MockNotificationRepository) -> HttpState {
        let directory: Arc<dyn UserDirectory> = Arc::new(FixtureUserDirectory);
        let sms: Arc<dyn SmsGateway> = Arc::new(FixtureSmsGateway);
        let notifications: Arc<dyn NotificationRepository> = Arc::new(notifications);
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

    fn stored(index: i64, message: &str, is_read: bool) -> AdminNotification {
        AdminNotification {
            id: Uuid::new_v4(),
            message: message.to_owned(),
            kind: NotificationKind::NewDormitoryBooking,
            related_booking_id: format!("bk-{index}"),
            recipient_role: StaffRole::Admin,
            is_read,
            link: None,
            created_at: Utc::now() - Duration::minutes(index),
        }
    }

    async fn get_inbox(notifications: MockNotificationRepository, uri: &str) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(notifications)))
                .service(list_notifications),
        )
        .await;
        let request = test::TestRequest::get().uri(uri).to_request();
        test::call_and_read_body_json(&app, request).await
    }

    #[actix_web::test]
    async fn inbox_defaults_to_the_admin_role_and_first_page() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_list_for_role()
            .withf(|role| *role == StaffRole::Admin)
            .return_once(|_| Ok((0..25).map(|i| stored(i, &format!("Alert {i:02}"), false)).collect()));

        let body = get_inbox(notifications, "/notifications").await;
        assert_eq!(body["totalItems"], 25);
        assert_eq!(body["pageCount"], 3);
        assert_eq!(body["page"], 0);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["items"][0]["message"], "Alert 00");
    }

    #[actix_web::test]
    async fn search_narrows_the_inbox_by_message_text() {
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_list_for_role().return_once(|_| {
            Ok(vec![
                stored(0, "New dormitory booking from Abebe", false),
                stored(1, "New facility booking from Hawassa Trading", false),
            ])
        });

        let body = get_inbox(notifications, "/notifications?search=facility").await;
        assert_eq!(body["totalItems"], 1);
        assert_eq!(
            body["items"][0]["message"],
            "New facility booking from Hawassa Trading"
        );
    }

    #[actix_web::test]
    async fn out_of_range_page_is_clamped_to_the_last_page() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_list_for_role()
            .return_once(|_| Ok((0..25).map(|i| stored(i, &format!("Alert {i:02}"), false)).collect()));

        let body = get_inbox(notifications, "/notifications?page=99").await;
        assert_eq!(body["page"], 2);
        assert_eq!(body["items"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn descending_sort_on_read_lists_read_items_last() {
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_list_for_role().return_once(|_| {
            Ok(vec![
                stored(0, "Oldest", true),
                stored(1, "Middle", false),
                stored(2, "Newest", true),
            ])
        });

        let body = get_inbox(notifications, "/notifications?sort=read&dir=desc").await;
        let reads: Vec<bool> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["read"].as_bool().unwrap())
            .collect();
        assert_eq!(reads, vec![false, true, true]);
    }

    #[actix_web::test]
    async fn unknown_role_is_a_bad_request() {
        let notifications = MockNotificationRepository::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(notifications)))
                .service(list_notifications),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/notifications?role=janitor")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn store_outage_maps_to_service_unavailable() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_list_for_role()
            .return_once(|_| Err(NotificationRepositoryError::connection("pool exhausted")));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(notifications)))
                .service(list_notifications),
        )
        .await;
        let request = test::TestRequest::get().uri("/notifications").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn mark_read_returns_no_content_for_known_ids() {
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_mark_read().return_once(|_| Ok(true));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(notifications)))
                .service(mark_notification_read),
        )
        .await;
        let request = test::TestRequest::post()
            .uri(&format!("/notifications/{}/read", Uuid::new_v4()))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn mark_read_returns_not_found_for_unknown_ids() {
        let mut notifications = MockNotificationRepository::new();
        notifications.expect_mark_read().return_once(|_| Ok(false));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(notifications)))
                .service(mark_notification_read),
        )
        .await;
        let request = test::TestRequest::post()
            .uri(&format!("/notifications/{}/read", Uuid::new_v4()))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
