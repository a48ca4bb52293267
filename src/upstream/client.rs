//! HTTP client for the upstream employee service.
//!
//! # Responsibilities
//! - Build collection and member URLs from configuration
//! - Issue exactly one request per call (no retries)
//! - Decode envelopes, treating an empty or `null` body as "no payload"
//! - Turn non-success statuses into `UpstreamError`

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::employee::{CreateEmployeeInput, EmployeeDetail, EmployeeList};
use crate::upstream::types::{UpstreamError, UpstreamResult};

/// Capability to reach the employee service.
///
/// `Ok(None)` means the upstream answered successfully without a payload.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET {base}`
    async fn list(&self) -> UpstreamResult<Option<EmployeeList>>;

    /// `GET {base}/{id}`
    async fn get(&self, id: &str) -> UpstreamResult<Option<EmployeeDetail>>;

    /// `POST {base}`
    async fn create(&self, input: &CreateEmployeeInput) -> UpstreamResult<Option<EmployeeDetail>>;

    /// `DELETE {base}/{id}`, response body ignored.
    async fn delete(&self, id: &str) -> UpstreamResult<()>;
}

/// `EmployeeApi` backed by a pooled reqwest client.
#[derive(Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    collection: Url,
}

impl HttpEmployeeApi {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let client = Client::builder().build()?;
        Self::with_client(client, config)
    }

    /// Create a client reusing an existing reqwest client.
    pub fn with_client(client: Client, config: &UpstreamConfig) -> UpstreamResult<Self> {
        let raw = config.collection_url();
        let collection =
            Url::parse(&raw).map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if collection.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(raw));
        }
        tracing::info!(collection = %collection, "Upstream employee client initialized");
        Ok(Self { client, collection })
    }

    /// URL of the employee collection.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// URL of one employee; `id` becomes a single escaped path segment.
    pub fn member_url(&self, id: &str) -> UpstreamResult<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.collection.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self) -> UpstreamResult<Option<EmployeeList>> {
        tracing::debug!(url = %self.collection, "GET employee list");
        let response = self.client.get(self.collection.clone()).send().await?;
        read_payload(response).await
    }

    async fn get(&self, id: &str) -> UpstreamResult<Option<EmployeeDetail>> {
        let url = self.member_url(id)?;
        tracing::debug!(url = %url, "GET employee");
        let response = self.client.get(url).send().await?;
        read_payload(response).await
    }

    async fn create(&self, input: &CreateEmployeeInput) -> UpstreamResult<Option<EmployeeDetail>> {
        tracing::debug!(url = %self.collection, "POST employee");
        let response = self
            .client
            .post(self.collection.clone())
            .json(input)
            .send()
            .await?;
        read_payload(response).await
    }

    async fn delete(&self, id: &str) -> UpstreamResult<()> {
        let url = self.member_url(id)?;
        tracing::debug!(url = %url, "DELETE employee");
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::from_status(status));
        }
        Ok(())
    }
}

async fn read_payload<T: DeserializeOwned>(response: Response) -> UpstreamResult<Option<T>> {
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::from_status(status));
    }
    let body = response.bytes().await?;
    decode_payload(&body)
}

/// Decode an envelope; blank and `null` bodies decode to `None`.
pub fn decode_payload<T: DeserializeOwned>(body: &[u8]) -> UpstreamResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<T>>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str, endpoint: &str) -> HttpEmployeeApi {
        HttpEmployeeApi::new(&UpstreamConfig {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
        })
        .unwrap()
    }

    #[test]
    fn test_member_url_appends_segment() {
        let api = api("http://localhost:8112", "/api/v1/employee");
        assert_eq!(
            api.member_url("550e8400-e29b-41d4-a716-446655440000")
                .unwrap()
                .as_str(),
            "http://localhost:8112/api/v1/employee/550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_member_url_escapes_id() {
        let api = api("http://localhost:8112/", "api/v1/employee/");
        assert_eq!(
            api.member_url("a/b c").unwrap().as_str(),
            "http://localhost:8112/api/v1/employee/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpEmployeeApi::new(&UpstreamConfig {
            base_url: "::nope".into(),
            endpoint: "/api/v1/employee".into(),
        });
        assert!(matches!(result, Err(UpstreamError::InvalidUrl(_))));
    }

    #[test]
    fn test_decode_blank_and_null() {
        assert_eq!(decode_payload::<EmployeeList>(b"").unwrap(), None);
        assert_eq!(decode_payload::<EmployeeList>(b" \n").unwrap(), None);
        assert_eq!(decode_payload::<EmployeeList>(b"null").unwrap(), None);
    }

    #[test]
    fn test_decode_envelope() {
        let list = decode_payload::<EmployeeList>(br#"{"status":"ok","data":[]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(list.status.as_deref(), Some("ok"));
        assert_eq!(list.data, Some(Vec::new()));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_payload::<EmployeeList>(b"<html>"),
            Err(UpstreamError::Decode(_))
        ));
    }
}
