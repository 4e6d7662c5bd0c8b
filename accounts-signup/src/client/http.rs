use async_trait::async_trait;
use reqwest::Response;

use accounts_client::{error::ErrorBody, AccountError};

#[async_trait]
pub trait ResponseExt {
    /// Turns a non-success response into a classified [`AccountError`],
    /// parsing the service's error body when there is one.
    async fn check_success(self) -> Result<Self, AccountError>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, AccountError> {
        let status = self.status();
        if !status.is_success() {
            let text = self
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response text".to_string());
            return Err(match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => body.into_account_error(status.as_u16()),
                // Not the service's error shape: a proxy or gateway
                // answered instead of the service.
                Err(_) => AccountError::unexpected(text).with_status(status.as_u16()),
            });
        }
        Ok(self)
    }
}
