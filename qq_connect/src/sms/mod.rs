//! SMS verification-code helper.
//!
//! Formats the fixed verification message and hands it to a delivery
//! capability supplied by the host application. This module knows nothing
//! about the underlying transport (HTTP gateway, queue, carrier API) and
//! never retries; the transport's verdict is returned unchanged.

use async_trait::async_trait;

/// Delivery capability supplied by the host application.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Deliver `text` to `number`, returning whether the transport accepted
    /// the message.
    async fn send_sms(&self, number: &str, text: &str) -> bool;
}

/// Send a verification code to `number` through `sender`.
///
/// The message is a fixed template carrying the code verbatim. No
/// phone-number validation happens here.
pub async fn send_verification_code(sender: &dyn SmsSender, number: &str, code: &str) -> bool {
    let text = format!("您的验证码是{code}，请在5分钟内完成验证。");
    tracing::debug!("Sending verification code to {}", number);
    sender.send_sms(number, &text).await
}
