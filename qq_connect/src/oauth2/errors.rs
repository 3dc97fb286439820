use thiserror::Error;

use super::types::{ApiOperation, EndpointFailure};

/// Errors surfaced by the QQ Connect adapters.
///
/// Every variant is terminal for the single operation that produced it;
/// nothing is retried or recovered locally. User-facing presentation is the
/// host framework's job.
#[derive(Debug, Error, Clone)]
pub enum QQConnectError {
    /// The endpoint answered with a non-2xx status.
    #[error("endpoint failure: {0}")]
    Transport(EndpointFailure),

    /// The request failed before a response arrived (DNS, connect, timeout).
    #[error("request error: {0}")]
    Request(String),

    /// The response body did not match the endpoint's framing, or the
    /// embedded JSON was malformed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The vendor reported a failure code inside a well-formed response.
    #[error("QQ Connect error {code}: {msg}")]
    Vendor { code: i64, msg: String },

    /// Operation the vendor exposes but this adapter deliberately leaves
    /// unimplemented.
    #[error("operation not supported: {0}")]
    Unsupported(ApiOperation),
}
