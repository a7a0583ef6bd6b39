//! Domain ports for the hexagonal boundary.
//!
//! Each port ships a fixture implementation for wiring and, under test, a
//! mockall mock for behaviour assertions.

mod notification_repository;
mod sms_gateway;
mod user_directory;

#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
pub use notification_repository::{
    FixtureNotificationRepository, NotificationRepository, NotificationRepositoryError,
};
#[cfg(test)]
pub use sms_gateway::MockSmsGateway;
pub use sms_gateway::{FixtureSmsGateway, SmsGateway, SmsOutcome, SmsSkipReason};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
