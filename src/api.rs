//! PokeAPI client - the remote data source

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{ApiConfig, PAGE_SIZE};
use crate::error::ApiError;
use crate::state::{
    AbilityEntry, DetailRecord, ListItemSummary, ListPage, Sprites, StatValue, TypeEntry,
};

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    count: u32,
    next: Option<String>,
    previous: Option<String>,
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    sprites: serde_json::Value,
    stats: Vec<PokemonStatSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    types: Vec<PokemonTypeSlot>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u32,
    effort: u32,
    stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
    is_hidden: bool,
    slot: u32,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base: String,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base: config.api_base().to_string(),
        })
    }

    /// `GET {base}/pokemon?offset={offset}&limit=20`
    pub async fn fetch_page(&self, offset: u32) -> Result<ListPage, ApiError> {
        let url = format!("{}/pokemon", self.base);
        let request = self
            .client
            .get(&url)
            .query(&[("offset", offset), ("limit", PAGE_SIZE)]);
        let response: ListResponse = self.fetch_json(&url, request).await?;

        let items = response
            .results
            .into_iter()
            .map(|entry| ListItemSummary::new(entry.name, entry.url))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ListPage {
            total_count: response.count,
            next_page_url: response.next,
            previous_page_url: response.previous,
            items,
        })
    }

    /// `GET {base}/pokemon/{id}`
    pub async fn fetch_pokemon(&self, id: u32) -> Result<DetailRecord, ApiError> {
        let url = format!("{}/pokemon/{id}", self.base);
        let request = self.client.get(&url);
        let response: PokemonResponse = self.fetch_json(&url, request).await?;

        let stats = response
            .stats
            .into_iter()
            .map(|slot| StatValue {
                name: slot.stat.name,
                url: slot.stat.url,
                base_stat: slot.base_stat,
                effort: slot.effort,
            })
            .collect();
        let abilities = response
            .abilities
            .into_iter()
            .map(|slot| AbilityEntry {
                name: slot.ability.name,
                url: slot.ability.url,
                is_hidden: slot.is_hidden,
                slot: slot.slot,
            })
            .collect();
        let types = response
            .types
            .into_iter()
            .map(|slot| TypeEntry {
                slot: slot.slot,
                name: slot.type_info.name,
                url: slot.type_info.url,
            })
            .collect();

        Ok(DetailRecord {
            id: response.id,
            name: response.name,
            height: response.height,
            weight: response.weight,
            sprites: Sprites {
                front_default: pointer_string(&response.sprites, "/front_default"),
                official_artwork: pointer_string(
                    &response.sprites,
                    "/other/official-artwork/front_default",
                ),
            },
            stats,
            abilities,
            types,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let result = send_and_decode(request).await;
        if let Err(err) = &result {
            tracing::warn!(url, error = %err, "request failed");
        }
        result
    }
}

async fn send_and_decode<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}
