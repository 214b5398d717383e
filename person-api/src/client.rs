use crate::config::{PersonApiConfig, normalize_base_url};
use crate::error::{PersonApiError, PersonApiResult};
use crate::person::{Person, decode_person};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::debug;

/// A source of person records keyed by numeric id.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn get_person(&self, id: u64) -> PersonApiResult<Person>;
}

/// Builds the request target for a person: the base URL, normalized to end
/// with `/`, with the decimal id appended.
pub fn person_url(base_url: &str, id: u64) -> PersonApiResult<Url> {
    let raw = format!("{}{id}", normalize_base_url(base_url));
    let url = Url::parse(&raw).map_err(|e| PersonApiError::InvalidEndpoint {
        url: raw.clone(),
        reason: e.to_string()
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(PersonApiError::InvalidEndpoint {
            url: raw,
            reason: format!("unsupported scheme '{scheme}'")
        })
    }
}

/// HTTP client for the SWAPI `people` resource.
pub struct SwapiClient {
    client: Client,
    config: PersonApiConfig
}

impl SwapiClient {
    pub fn new(config: PersonApiConfig) -> PersonApiResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PersonApiError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &PersonApiConfig {
        &self.config
    }

    pub fn person_url(&self, id: u64) -> PersonApiResult<Url> {
        person_url(&self.config.base_url, id)
    }
}

#[async_trait]
impl PeopleSource for SwapiClient {
    async fn get_person(&self, id: u64) -> PersonApiResult<Person> {
        let url = self.person_url(id)?;
        debug!(person_id = id, url = %url, "Making SWAPI request");

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersonApiError::Status {
                status: status.as_u16(),
                url: url.to_string()
            });
        }

        let body = response.bytes().await?;
        debug!(person_id = id, bytes = body.len(), "Received SWAPI response");
        decode_person(&body)
    }
}

pub fn create_swapi_client(config: PersonApiConfig) -> PersonApiResult<Arc<dyn PeopleSource>> {
    Ok(Arc::new(SwapiClient::new(config)?))
}
