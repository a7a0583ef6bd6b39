//! SMS provider adapter.

mod http_gateway;

pub use http_gateway::{SmsGatewayConfig, SmsHttpGateway};
