use std::{env, sync::LazyLock};

// Endpoint URLs default to the production graph.qq.com endpoints and can be
// overridden per deployment (sandbox gateways, test doubles).

pub(super) static QQCONNECT_TOKEN_ENDPOINT: LazyLock<String> = LazyLock::new(|| {
    env::var("QQCONNECT_TOKEN_ENDPOINT")
        .ok()
        .unwrap_or("https://graph.qq.com/oauth2.0/token".to_string())
});

pub(super) static QQCONNECT_OPENID_ENDPOINT: LazyLock<String> = LazyLock::new(|| {
    env::var("QQCONNECT_OPENID_ENDPOINT")
        .ok()
        .unwrap_or("https://graph.qq.com/oauth2.0/me".to_string())
});

pub(super) static QQCONNECT_USERINFO_ENDPOINT: LazyLock<String> = LazyLock::new(|| {
    env::var("QQCONNECT_USERINFO_ENDPOINT")
        .ok()
        .unwrap_or("https://graph.qq.com/user/get_user_info".to_string())
});

pub(super) static QQCONNECT_CLIENT_ID: LazyLock<String> = LazyLock::new(|| {
    env::var("QQCONNECT_CLIENT_ID").expect("QQCONNECT_CLIENT_ID must be set")
});

pub(super) static QQCONNECT_CLIENT_SECRET: LazyLock<String> = LazyLock::new(|| {
    env::var("QQCONNECT_CLIENT_SECRET").expect("QQCONNECT_CLIENT_SECRET must be set")
});

pub(super) static QQCONNECT_REDIRECT_URI: LazyLock<String> = LazyLock::new(|| {
    env::var("QQCONNECT_REDIRECT_URI").expect("QQCONNECT_REDIRECT_URI must be set")
});
