use crate::config;
use crate::error::ApiError;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct Client {
    http_client: HttpClient,
    config: config::SolarEdgeConfig,
    api_key: String,
}

impl Client {
    pub fn new(
        config: config::SolarEdgeConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http_client = builder.build()?;
        Ok(Self {
            http_client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Issues a GET against the monitoring API, authenticating with the
    /// access key as a query parameter.
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.config.url.trim_end_matches('/'), path);
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .http_client
            .get(&url)
            .header("user-agent", "reqwest")
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::server_error(status, body))
        }
    }

    /// Like [`Client::get`], decoding the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self.get(path, params).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::malformed_json(path, e))
    }

    // The request URL carries the access key, so it never goes into an error.
    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        match self.config.timeout_seconds {
            Some(seconds) if err.is_timeout() => ApiError::Timeout(seconds),
            _ => ApiError::Http(err.without_url()),
        }
    }
}
