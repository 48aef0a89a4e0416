use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub quiz_service_url: String,
    pub quiz_service_timeout_secs: u64,
    pub cors_allowed_origin: String,
    pub session_idle_minutes: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            quiz_service_url: env::var("QUIZ_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            quiz_service_timeout_secs: env::var("QUIZ_SERVICE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        let url = reqwest::Url::parse(&self.quiz_service_url).map_err(|e| {
            AppError::ValidationError(format!(
                "QUIZ_SERVICE_URL '{}' is not a valid URL: {}",
                self.quiz_service_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::ValidationError(format!(
                "QUIZ_SERVICE_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.web_server_port == 0 {
            return Err(AppError::ValidationError(
                "WEB_SERVER_PORT must be greater than zero".to_string(),
            ));
        }

        if self.session_idle_minutes <= 0 {
            return Err(AppError::ValidationError(
                "SESSION_IDLE_MINUTES must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn session_idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_idle_minutes)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            quiz_service_url: "http://127.0.0.1:5000".to_string(),
            quiz_service_timeout_secs: 5,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            session_idle_minutes: 60,
        }
    }
}
