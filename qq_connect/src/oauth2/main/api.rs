use std::time::Duration;

use url::Url;

use crate::oauth2::errors::QQConnectError;
use crate::oauth2::types::{ApiOperation, CallbackPayload, EndpointFailure, QQConnectOptions};

use super::callback::{ResponseFraming, SuccessRule, parse_response, validate_payload};

/// Backchannel client for the QQ Connect HTTP endpoints.
///
/// One instance per configured application. Each operation issues a single
/// GET with no retries; failures surface immediately as [`QQConnectError`].
/// Cancellation is cooperative: dropping a returned future aborts the
/// in-flight request, and no cleanup is needed since no state outlives the
/// call.
pub struct QQConnectApi {
    client: reqwest::Client,
    options: QQConnectOptions,
}

impl QQConnectApi {
    pub fn new(options: QQConnectOptions) -> Self {
        Self {
            client: get_client(),
            options,
        }
    }

    /// Use a host-supplied backchannel instead of the default client.
    pub fn with_client(client: reqwest::Client, options: QQConnectOptions) -> Self {
        Self { client, options }
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Success body is bare pairs
    /// (`access_token=..&expires_in=..&refresh_token=..`); failure arrives as
    /// `callback( {"error":..,"error_description":".."} );`.
    pub async fn exchange_code(&self, code: &str) -> Result<CallbackPayload, QQConnectError> {
        let body = self
            .get(
                &self.options.token_endpoint,
                &[
                    ("grant_type", "authorization_code"),
                    ("client_id", self.options.client_id.as_str()),
                    ("client_secret", self.options.client_secret.as_str()),
                    ("code", code),
                    ("redirect_uri", self.options.redirect_uri.as_str()),
                ],
            )
            .await?;
        let payload = parse_response(ResponseFraming::QueryString, &body)?;
        validate_payload(SuccessRule::NoErrorField, payload)
    }

    /// Look up the open-id bound to an access token.
    ///
    /// Success body: `callback( {"client_id":"..","openid":".."} );`
    pub async fn open_id(&self, access_token: &str) -> Result<CallbackPayload, QQConnectError> {
        let body = self
            .get(
                &self.options.openid_endpoint,
                &[("access_token", access_token)],
            )
            .await?;
        let payload = parse_response(ResponseFraming::JsonCallback, &body)?;
        validate_payload(SuccessRule::RetField, payload)
    }

    /// Fetch the nickname, avatar URLs, and the rest of the public profile
    /// (`get_user_info`).
    pub async fn user_info(
        &self,
        access_token: &str,
        openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        let body = self
            .get(
                &self.options.userinfo_endpoint,
                &[
                    ("access_token", access_token),
                    ("oauth_consumer_key", self.options.client_id.as_str()),
                    ("openid", openid),
                ],
            )
            .await?;
        let payload = parse_response(ResponseFraming::JsonCallback, &body)?;
        validate_payload(SuccessRule::RetField, payload)
    }

    /// Refresh an expired access token. Not implemented by this adapter.
    pub async fn refresh_token(
        &self,
        _refresh_token: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::RefreshToken))
    }

    /// Check whether an access token is still valid. Not implemented.
    pub async fn validate_token(
        &self,
        _access_token: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::ValidateToken))
    }

    /// QQ membership basics (`get_vip_info`). Not implemented.
    pub async fn user_vip_info(
        &self,
        _access_token: &str,
        _openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::UserVipInfo))
    }

    /// QQ membership details (`get_vip_rich_info`). Not implemented.
    pub async fn user_vip_rich_info(
        &self,
        _access_token: &str,
        _openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::UserVipRichInfo))
    }

    /// Qzone album listing (`list_album`). Not implemented.
    pub async fn list_album(
        &self,
        _access_token: &str,
        _openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::ListAlbum))
    }

    /// Qzone photo upload (`upload_pic`). Not implemented.
    pub async fn upload_picture(
        &self,
        _access_token: &str,
        _openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::UploadPicture))
    }

    /// Qzone album creation (`add_album`). Not implemented.
    pub async fn add_album(
        &self,
        _access_token: &str,
        _openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::AddAlbum))
    }

    /// Qzone photo listing (`list_photo`). Not implemented.
    pub async fn list_photo(
        &self,
        _access_token: &str,
        _openid: &str,
    ) -> Result<CallbackPayload, QQConnectError> {
        Err(QQConnectError::Unsupported(ApiOperation::ListPhoto))
    }

    /// Issue one GET and return the body text of a 2xx response.
    ///
    /// A non-2xx status fails with the full transcript before any body
    /// parsing happens.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, QQConnectError> {
        let url = Url::parse_with_params(endpoint, params)
            .map_err(|e| QQConnectError::Request(format!("invalid endpoint URL {endpoint}: {e}")))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QQConnectError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let failure = EndpointFailure {
                status,
                headers: response.headers().clone(),
                body: response.text().await.unwrap_or_default(),
            };
            tracing::error!("QQ Connect endpoint failure: {}", failure);
            return Err(QQConnectError::Transport(failure));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QQConnectError::Request(e.to_string()))?;
        tracing::debug!("Response body: {:#?}", body);
        Ok(body)
    }
}

/// Creates a configured HTTP client for the QQ Connect backchannel:
///
/// - `timeout`: 30 seconds so a stalled vendor endpoint cannot hang the
///   host's login flow indefinitely.
/// - `pool_idle_timeout` / `pool_max_idle_per_host`: defaults suited to the
///   short bursts of requests a login produces (token, open-id, profile).
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_options() -> QQConnectOptions {
        QQConnectOptions {
            client_id: "111111".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "https://example.com/signin-qq".to_string(),
            token_endpoint: "https://graph.qq.com/oauth2.0/token".to_string(),
            openid_endpoint: "https://graph.qq.com/oauth2.0/me".to_string(),
            userinfo_endpoint: "https://graph.qq.com/user/get_user_info".to_string(),
        }
    }

    /// Every stubbed operation reports which operation was requested instead
    /// of attempting a request.
    #[tokio::test]
    async fn test_stubbed_operations_are_unsupported() {
        let api = QQConnectApi::new(test_options());

        let cases = [
            (
                api.refresh_token("tok").await,
                ApiOperation::RefreshToken,
            ),
            (
                api.validate_token("tok").await,
                ApiOperation::ValidateToken,
            ),
            (
                api.user_vip_info("tok", "oid").await,
                ApiOperation::UserVipInfo,
            ),
            (
                api.user_vip_rich_info("tok", "oid").await,
                ApiOperation::UserVipRichInfo,
            ),
            (api.list_album("tok", "oid").await, ApiOperation::ListAlbum),
            (
                api.upload_picture("tok", "oid").await,
                ApiOperation::UploadPicture,
            ),
            (api.add_album("tok", "oid").await, ApiOperation::AddAlbum),
            (api.list_photo("tok", "oid").await, ApiOperation::ListPhoto),
        ];

        for (result, operation) in cases {
            match result {
                Err(QQConnectError::Unsupported(op)) => assert_eq!(op, operation),
                other => panic!("expected Unsupported({operation}), got {other:?}"),
            }
        }
    }

    /// An endpoint string that is not a URL fails before any network I/O.
    #[tokio::test]
    async fn test_invalid_endpoint_url() {
        let mut options = test_options();
        options.openid_endpoint = "not a url".to_string();
        let api = QQConnectApi::new(options);

        let err = api.open_id("tok").await.expect_err("must fail");
        assert!(matches!(err, QQConnectError::Request(_)));
    }
}
