//! Decoding and validation of QQ Connect response bodies.
//!
//! The vendor predates standard OAuth2 JSON responses: the open-id and
//! user-info endpoints wrap a JSON object in a JSONP-style
//! `callback(<json>);` envelope, while the token endpoint answers with bare
//! `key=value` pairs on success and an envelope-wrapped error object on
//! failure. Success and failure are signalled in-band with per-endpoint
//! conventions rather than HTTP status codes.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::oauth2::errors::QQConnectError;
use crate::oauth2::types::CallbackPayload;

static CALLBACK_ENVELOPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"callback\((.*)\);").expect("invalid callback envelope pattern"));

/// Response framing used by a QQ Connect endpoint.
///
/// Selected per endpoint by the fetchers; the vendor never negotiates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ResponseFraming {
    /// `callback(<json>);` envelope, used by the open-id and user-info
    /// endpoints for both success and failure bodies.
    JsonCallback,
    /// Bare `key=value&key=value` text. The token endpoint answers in this
    /// form on success but still wraps its errors in the callback envelope,
    /// so the envelope is tried first.
    QueryString,
}

/// Success rule applied to a decoded payload.
///
/// The two rules are deliberately not unified. The token endpoint signals
/// failure with an `error` field; the other endpoints use a numeric `ret`
/// code where zero or absent both mean success. That fold of "absent" and
/// "zero" is endpoint-specific vendor behavior and is preserved as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SuccessRule {
    /// `ret` absent or zero is success; anything else fails with the
    /// vendor's `msg`.
    RetField,
    /// Absence of `error` is success; presence fails with
    /// `error_description`.
    NoErrorField,
}

/// Decode a response body under the given framing.
pub(super) fn parse_response(
    framing: ResponseFraming,
    body: &str,
) -> Result<CallbackPayload, QQConnectError> {
    match framing {
        ResponseFraming::JsonCallback => parse_callback(body),
        ResponseFraming::QueryString => {
            if CALLBACK_ENVELOPE.is_match(body) {
                parse_callback(body)
            } else {
                parse_query(body)
            }
        }
    }
}

/// Classify a decoded payload as success or vendor-reported failure.
///
/// On success the payload is returned whole, every vendor key included.
pub(super) fn validate_payload(
    rule: SuccessRule,
    payload: CallbackPayload,
) -> Result<CallbackPayload, QQConnectError> {
    match rule {
        SuccessRule::RetField => {
            let code = match payload.get("ret") {
                None => 0,
                Some(value) => numeric_code(value).ok_or_else(|| {
                    let error = format!("non-numeric ret field: {value}");
                    tracing::error!("{}", error);
                    QQConnectError::Parse(error)
                })?,
            };
            if code == 0 {
                return Ok(payload);
            }
            let msg = field_text(&payload, "msg");
            tracing::error!("QQ Connect endpoint reported failure: ret={} msg={}", code, msg);
            Err(QQConnectError::Vendor { code, msg })
        }
        SuccessRule::NoErrorField => {
            let Some(error) = payload.get("error") else {
                return Ok(payload);
            };
            let code = numeric_code(error).unwrap_or(-1);
            let msg = field_text(&payload, "error_description");
            tracing::error!("QQ Connect token endpoint reported failure: error={} description={}", code, msg);
            Err(QQConnectError::Vendor { code, msg })
        }
    }
}

fn parse_callback(body: &str) -> Result<CallbackPayload, QQConnectError> {
    let Some(captures) = CALLBACK_ENVELOPE.captures(body) else {
        let error = format!("failed on parsing the callback string: {body}");
        tracing::error!("{}", error);
        return Err(QQConnectError::Parse(error));
    };
    let json = &captures[1];
    let value: Value = serde_json::from_str(json).map_err(|e| {
        let error = format!("malformed JSON in callback envelope: {e}");
        tracing::error!("{}", error);
        QQConnectError::Parse(error)
    })?;
    match value {
        Value::Object(payload) => Ok(payload),
        other => Err(QQConnectError::Parse(format!(
            "callback envelope did not contain a JSON object: {other}"
        ))),
    }
}

fn parse_query(body: &str) -> Result<CallbackPayload, QQConnectError> {
    let mut payload = CallbackPayload::new();
    for pair in body.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            let error = format!("failed on parsing the token response: {body}");
            tracing::error!("{}", error);
            return Err(QQConnectError::Parse(error));
        };
        payload.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(payload)
}

/// Vendor codes arrive as JSON numbers or numeric strings, depending on the
/// endpoint and the error.
fn numeric_code(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn field_text(payload: &CallbackPayload, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
