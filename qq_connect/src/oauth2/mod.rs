mod config;
mod errors;
mod main;
mod types;

pub use errors::QQConnectError;
pub use main::QQConnectApi;
pub use types::{ApiOperation, CallbackPayload, EndpointFailure, QQConnectOptions};
