use crate::error::LoadError;
use crate::models::{EntityRecord, PokemonListResponse, PokemonRaw};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Where creature names and details come from.
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn list_names(&self, offset: u32, limit: u32) -> Result<Vec<String>, LoadError>;

    async fn entity_by_name(&self, name: &str) -> Result<EntityRecord, LoadError>;
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl EntitySource for PokeApiClient {
    async fn list_names(&self, offset: u32, limit: u32) -> Result<Vec<String>, LoadError> {
        let url = format!(
            "{}/pokemon?offset={}&limit={}",
            self.base_url, offset, limit
        );
        let list: PokemonListResponse = self.get_json(&url).await?;
        Ok(list.into_names())
    }

    async fn entity_by_name(&self, name: &str) -> Result<EntityRecord, LoadError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let raw: PokemonRaw = self.get_json(&url).await?;
        Ok(raw.into())
    }
}
