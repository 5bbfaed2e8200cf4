use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub identity_base_url: String,
    pub identity_token: String,
    pub http_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            identity_base_url: env::var("IDENTITY_BASE_URL")
                .map_err(|e| format!("IDENTITY_BASE_URL: {}", e))?,
            identity_token: env::var("IDENTITY_TOKEN")
                .map_err(|e| format!("IDENTITY_TOKEN: {}", e))?,
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        })
    }
}
