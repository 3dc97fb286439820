mod api;
mod callback;

pub use api::QQConnectApi;
