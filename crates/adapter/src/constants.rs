use http::header::HeaderName;

pub const HEADER_X_OPENRTB_VERSION: HeaderName = HeaderName::from_static("x-openrtb-version");
pub const HEADER_X_FORWARDED_IP: HeaderName = HeaderName::from_static("x-forwarded-ip");

pub const CONTENT_TYPE_JSON_UTF8: &str = "application/json;charset=utf-8";
pub const ACCEPT_JSON: &str = "application/json";
pub const OPENRTB_VERSION: &str = "2.5";

/// Cookie the partner keys its own user id on.
pub const PARTNER_COOKIE_NAME: &str = "Nano";

/// OpenRTB's currency when a response leaves `cur` out.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Prefix for environment variables that override settings.
pub const ENV_PREFIX: &str = "NANO_ADAPTER";
