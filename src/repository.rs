use async_trait::async_trait;

use crate::api::PokeApiClient;
use crate::error::ApiError;
use crate::state::{DetailRecord, ListPage};

/// Read access to Pokemon data.
///
/// Each call resolves exactly once, with the value or with the failure that
/// produced it. Implementations do not cache, deduplicate or retry.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    async fn fetch_page(&self, offset: u32) -> Result<ListPage, ApiError>;

    async fn fetch_detail(&self, id: u32) -> Result<DetailRecord, ApiError>;
}

/// Repository backed directly by the remote API.
#[derive(Clone, Debug)]
pub struct RemoteRepository {
    api: PokeApiClient,
}

impl RemoteRepository {
    pub fn new(api: PokeApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PokemonRepository for RemoteRepository {
    async fn fetch_page(&self, offset: u32) -> Result<ListPage, ApiError> {
        self.api.fetch_page(offset).await
    }

    async fn fetch_detail(&self, id: u32) -> Result<DetailRecord, ApiError> {
        self.api.fetch_pokemon(id).await
    }
}
