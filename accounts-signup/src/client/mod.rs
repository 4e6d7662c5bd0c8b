pub mod auth;
pub mod http;

use async_trait::async_trait;
use serde::Deserialize;

use accounts_client::{AccountError, SignUpOptions, SignUpResponse};

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:9000";

/// Overrides the accounts service root, for local testing.
pub const SERVICE_URL_ENV_VAR: &str = "ACCOUNTS_SERVICE_URL";

#[derive(Debug, Clone, Deserialize)]
struct ServiceConfigResource {
    #[serde(rename = "authApiUrl")]
    pub auth_api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub auth_api_url: String,
    pub service_url: String,
}

/// Fetches the service configuration from the accounts service root,
/// which tells us where the auth API lives.
pub async fn get_service_config() -> Result<ServiceConfig, reqwest::Error> {
    let service_url =
        std::env::var(SERVICE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
    let client = reqwest::Client::new();
    let res: ServiceConfigResource = client
        .get(format!("{}/config", service_url))
        .send()
        .await?
        .json()
        .await?;
    Ok(ServiceConfig {
        auth_api_url: res.auth_api_url,
        service_url,
    })
}

/// Client side of the account-creation API.
#[async_trait]
pub trait AccountClient: std::fmt::Debug {
    /// Creates an account, or resets an existing unverified one (the
    /// response's `existing` flag tells the two apart). Errors carry
    /// the service's classified kind.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: &SignUpOptions,
    ) -> Result<SignUpResponse, AccountError>;
}
