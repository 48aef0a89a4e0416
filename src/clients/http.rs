use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult, CollaboratorError},
    models::dto::response::ServiceErrorBody,
};

pub const GENERATE_QUIZ_PATH: &str = "/generate_quiz";
pub const SUBMIT_QUIZ_PATH: &str = "/submit_quiz";

/// Builds the client shared by both collaborators.
pub fn build_http_client(config: &Config) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.quiz_service_timeout_secs))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// POSTs `body` as JSON. A 2xx answer is decoded as `T`; anything else is a
/// rejection carrying the service's `error` text when it sent one.
pub async fn post_json<B, T>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<T, CollaboratorError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| CollaboratorError::Unreachable(e.to_string()))?;

    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| CollaboratorError::Unreachable(e.to_string()))?;

    if status.is_success() {
        return serde_json::from_slice(&bytes)
            .map_err(|e| CollaboratorError::InvalidResponse(e.to_string()));
    }

    let reason = serde_json::from_slice::<ServiceErrorBody>(&bytes)
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.trim().is_empty());

    Err(CollaboratorError::Rejected {
        status: status.as_u16(),
        reason,
    })
}
