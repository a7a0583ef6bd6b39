//! PostgreSQL persistence adapters built on Diesel with async pooling.

mod diesel_notification_repository;
mod diesel_user_directory;
mod pool;
pub mod schema;

pub use diesel_notification_repository::DieselNotificationRepository;
pub use diesel_user_directory::DieselUserDirectory;
pub use pool::{DbPool, PoolError};
