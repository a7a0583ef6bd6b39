//! Service entry point: configuration, tracing, adapter wiring, and the
//! HTTP server.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::domain::fan_out::NotificationFanOut;
use backend::domain::ports::{NotificationRepository, SmsGateway, UserDirectory};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::{HttpState, events, notifications};
use backend::outbound::persistence::{DbPool, DieselNotificationRepository, DieselUserDirectory};
use backend::outbound::sms::{SmsGatewayConfig, SmsHttpGateway};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

/// Runtime configuration, read from flags or the environment.
#[derive(Debug, Parser)]
#[command(name = "notification-service")]
struct Cli {
    /// Socket address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: String,

    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum pooled database connections.
    #[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
    db_pool_size: u32,

    /// SMS provider send endpoint.
    #[arg(
        long,
        env = "SMS_API_URL",
        default_value = "https://api.afromessage.com/api/send"
    )]
    sms_api_url: Url,

    /// SMS provider bearer token. Sending is disabled when absent.
    #[arg(long, env = "SMS_API_TOKEN")]
    sms_api_token: Option<String>,

    /// Registered SMS sender id. Sending is disabled when absent.
    #[arg(long, env = "SMS_SENDER_ID")]
    sms_sender_id: Option<String>,

    /// Timeout for each outbound SMS request, in seconds.
    #[arg(long, env = "SMS_TIMEOUT_SECONDS", default_value_t = 30)]
    sms_timeout_seconds: u64,

    /// Dashboard origin embedded in SMS deep links.
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:3000")]
    public_base_url: Url,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let pool = DbPool::connect(&cli.database_url, cli.db_pool_size)
        .await
        .map_err(std::io::Error::other)?;

    let sms_config = SmsGatewayConfig {
        endpoint: cli.sms_api_url,
        api_token: cli.sms_api_token,
        sender_id: cli.sms_sender_id,
        timeout: Duration::from_secs(cli.sms_timeout_seconds),
    };
    let sms: Arc<dyn SmsGateway> =
        Arc::new(SmsHttpGateway::new(sms_config).map_err(std::io::Error::other)?);
    let directory: Arc<dyn UserDirectory> = Arc::new(DieselUserDirectory::new(pool.clone()));
    let notifications_store: Arc<dyn NotificationRepository> =
        Arc::new(DieselNotificationRepository::new(pool));

    let state = web::Data::new(HttpState {
        fan_out: Arc::new(NotificationFanOut::new(
            directory,
            sms,
            Arc::clone(&notifications_store),
            cli.public_base_url,
        )),
        notifications: notifications_store,
    });

    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let api = web::scope("/api/v1")
            .service(events::booking_created)
            .service(events::booking_approved)
            .service(notifications::list_notifications)
            .service(notifications::mark_notification_read);

        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .service(api)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.route(
            "/api-docs/openapi.json",
            web::get().to(|| async { web::Json(ApiDoc::openapi()) }),
        );

        app
    })
    .bind(&cli.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
