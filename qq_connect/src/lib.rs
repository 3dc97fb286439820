//! qq-connect - Tencent QQ Connect adapters for Rust web applications
//!
//! This crate provides two independent adapters a host web application can
//! plug into its own authentication pipeline:
//!
//! - the QQ Connect OAuth2 backchannel ([`QQConnectApi`]): authorization-code
//!   exchange, open-id lookup, and user-profile lookup against the
//!   graph.qq.com endpoints, including the vendor's non-standard response
//!   framings (bare `key=value` text and the legacy `callback(<json>);`
//!   envelope with ad-hoc error codes);
//! - an SMS verification helper ([`send_verification_code`]) that formats a
//!   fixed verification-code message and delegates delivery to a host-supplied
//!   [`SmsSender`] capability.
//!
//! Session management, token storage, and redirect handling stay with the
//! host framework; this crate only speaks the vendor's wire dialect.

mod oauth2;
mod sms;

pub use oauth2::{
    ApiOperation, CallbackPayload, EndpointFailure, QQConnectApi, QQConnectError, QQConnectOptions,
};

pub use sms::{SmsSender, send_verification_code};
