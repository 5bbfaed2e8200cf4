//! Identity provider client module
//!
//! Encapsulates account creation and role lookup against the external
//! identity provider, with retry logic and error handling.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use uuid::Uuid;

use async_trait::async_trait;

use crate::core::config::AppConfig;
use crate::core::models::{Registration, Role};
use crate::errors::ServiceError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| {
            // This should not happen with default configuration, but provides a fallback
            Client::new()
        })
});

/// System of record for credentials and account identifiers. The service only
/// needs the identifier of a newly created account and the default role to
/// attach to it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_account(&self, registration: &Registration) -> Result<Uuid, ServiceError>;

    async fn default_role(&self) -> Result<Role, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct CreateAccountResponse {
    user_id: Option<Uuid>,
    error: Option<String>,
}

/// Identity provider API client with retry logic and error handling
pub struct IdentityClient {
    base_url: String,
    token: String,
    client: Client,
}

impl IdentityClient {
    pub fn new(config: &AppConfig) -> Self {
        // Clones of reqwest::Client share the same connection pool.
        let client = match config.http_timeout_secs {
            Some(secs) => Client::builder()
                .timeout(Duration::from_secs(secs))
                .build()
                .unwrap_or_else(|_| HTTP_CLIENT.clone()),
            None => HTTP_CLIENT.clone(),
        };

        Self {
            base_url: config.identity_base_url.trim_end_matches('/').to_string(),
            token: config.identity_token.clone(),
            client,
        }
    }

    // Helper function to wrap API calls with retry logic for rate limits and server errors
    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, ServiceError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, ServiceError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

        Retry::spawn(strategy, operation).await
    }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn create_account(&self, registration: &Registration) -> Result<Uuid, ServiceError> {
        self.with_retry(|| async {
            let body = json!({
                "username": registration.username,
                "email": registration.email,
                "first_name": registration.first_name,
                "last_name": registration.last_name,
                "password": registration.password,
            });

            let response = self
                .client
                .post(format!("{}/accounts", self.base_url))
                .bearer_auth(&self.token)
                .json(&body)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ServiceError::Identity(format!(
                    "account creation failed with status {}",
                    response.status()
                )));
            }

            let created: CreateAccountResponse = response.json().await?;
            if let Some(error) = created.error {
                return Err(ServiceError::Identity(error));
            }
            created
                .user_id
                .ok_or_else(|| ServiceError::Identity("no user_id in response".to_string()))
        })
        .await
    }

    async fn default_role(&self) -> Result<Role, ServiceError> {
        self.with_retry(|| async {
            let response = self
                .client
                .get(format!("{}/roles/default", self.base_url))
                .bearer_auth(&self.token)
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(ServiceError::Identity(format!(
                    "default role lookup failed with status {}",
                    response.status()
                )));
            }

            let role: Role = response.json().await?;
            Ok(role)
        })
        .await
    }
}
