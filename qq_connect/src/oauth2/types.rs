use std::fmt;

use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use super::config::{
    QQCONNECT_CLIENT_ID, QQCONNECT_CLIENT_SECRET, QQCONNECT_OPENID_ENDPOINT,
    QQCONNECT_REDIRECT_URI, QQCONNECT_TOKEN_ENDPOINT, QQCONNECT_USERINFO_ENDPOINT,
};

/// Key-value payload decoded from a single vendor response.
///
/// Keys are whatever the vendor returned on that call, in the vendor's field
/// order; there is no schema enforcement. Lifetime is one request.
pub type CallbackPayload = serde_json::Map<String, serde_json::Value>;

/// Transcript of a failed HTTP exchange with a vendor endpoint.
#[derive(Debug, Clone)]
pub struct EndpointFailure {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl fmt::Display for EndpointFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Status: {}; Headers: {:?}; Body: {};",
            self.status, self.headers, self.body
        )
    }
}

/// Vendor operations addressable through [`super::QQConnectApi`].
///
/// Operations the adapter deliberately leaves unimplemented still get a
/// variant so callers see an explicit `Unsupported` error instead of a
/// runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
    ExchangeCode,
    OpenId,
    UserInfo,
    RefreshToken,
    ValidateToken,
    UserVipInfo,
    UserVipRichInfo,
    ListAlbum,
    UploadPicture,
    AddAlbum,
    ListPhoto,
}

impl ApiOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExchangeCode => "exchange_code",
            Self::OpenId => "open_id",
            Self::UserInfo => "user_info",
            Self::RefreshToken => "refresh_token",
            Self::ValidateToken => "validate_token",
            Self::UserVipInfo => "user_vip_info",
            Self::UserVipRichInfo => "user_vip_rich_info",
            Self::ListAlbum => "list_album",
            Self::UploadPicture => "upload_picture",
            Self::AddAlbum => "add_album",
            Self::ListPhoto => "list_photo",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for the QQ Connect endpoints.
#[derive(Debug, Clone)]
pub struct QQConnectOptions {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub token_endpoint: String,
    pub openid_endpoint: String,
    pub userinfo_endpoint: String,
}

impl QQConnectOptions {
    /// Build options from `QQCONNECT_*` environment variables.
    ///
    /// Panics if `QQCONNECT_CLIENT_ID`, `QQCONNECT_CLIENT_SECRET`, or
    /// `QQCONNECT_REDIRECT_URI` is missing. Endpoint URLs fall back to the
    /// production graph.qq.com endpoints unless overridden.
    pub fn from_env() -> Self {
        Self {
            client_id: QQCONNECT_CLIENT_ID.clone(),
            client_secret: QQCONNECT_CLIENT_SECRET.clone(),
            redirect_uri: QQCONNECT_REDIRECT_URI.clone(),
            token_endpoint: QQCONNECT_TOKEN_ENDPOINT.clone(),
            openid_endpoint: QQCONNECT_OPENID_ENDPOINT.clone(),
            userinfo_endpoint: QQCONNECT_USERINFO_ENDPOINT.clone(),
        }
    }
}
