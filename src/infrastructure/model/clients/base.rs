//! Base HTTP client with shared logic

use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base HTTP client with bearer authentication baked into its default headers
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub endpoint: String,
    pub http: Client,
}

impl HttpClientBase {
    /// Build the client, rejecting blank keys and keys that cannot travel in a header.
    pub fn new(
        id: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: &SecretString,
    ) -> Result<Self, ModelError> {
        let id = id.into();
        let key = api_key.expose_secret().trim();
        if key.is_empty() {
            return Err(ModelError::missing_api_key(&id));
        }

        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|err| ModelError::invalid_api_key(&id, err.to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| ModelError::client(&id, source))?;

        Ok(Self {
            id,
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON and decode the JSON reply
    pub async fn post_json<Req, Res>(&self, url: &str, body: &Req) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?
            .error_for_status()
            .map_err(|e| ModelError::network(&self.id, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ModelError::invalid_response(&self.id, e.to_string()))
    }
}
