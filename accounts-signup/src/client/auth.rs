use async_trait::async_trait;
use reqwest::{IntoUrl, Method, RequestBuilder};

use accounts_client::{AccountError, SignUpOptions, SignUpRequest, SignUpResponse};

use crate::client::{http::ResponseExt, AccountClient};

/// HTTP client for the accounts auth API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    url: String,
}

impl AuthClient {
    pub fn new(url: String) -> Self {
        AuthClient {
            http: reqwest::Client::new(),
            url,
        }
    }

    fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json");
        tracing::debug!("Sending http request: {:?}", req);
        req
    }
}

#[async_trait]
impl AccountClient for AuthClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        options: &SignUpOptions,
    ) -> Result<SignUpResponse, AccountError> {
        let response = self
            .request(Method::POST, format!("{}/v1/account/create", self.url))
            .json(&SignUpRequest::new(email, password, options))
            .send()
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }
}
