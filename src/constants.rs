/// Display name of the service, reported by `/` and `/api/info`
pub const APP_NAME: &str = "Nginx Demo API";

/// API version reported by the health endpoints
pub const API_VERSION: &str = "1.0.0";
