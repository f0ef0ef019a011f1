use serde::{Deserialize, Serialize};

use crate::config::PREFETCH_DISTANCE;
use crate::error::ApiError;

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// One row of the paginated list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemSummary {
    pub name: String,
    pub url: String,
    pub id: u32,
}

impl ListItemSummary {
    /// Builds a summary, deriving the id from the trailing path segment of `url`.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, ApiError> {
        let url = url.into();
        let id = resource_id(&url).ok_or_else(|| ApiError::ResourceUrl(url.clone()))?;
        Ok(Self {
            name: name.into(),
            url,
            id,
        })
    }

    pub fn artwork_url(&self) -> String {
        format!("{ARTWORK_BASE}/{}.png", self.id)
    }
}

/// Parses the last non-empty path segment of a resource URL as an id.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `Some(25)`.
pub fn resource_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
}

/// One batch of list results plus its cursors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    pub total_count: u32,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
    pub items: Vec<ListItemSummary>,
}

impl ListPage {
    pub fn is_last(&self) -> bool {
        self.next_page_url.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub official_artwork: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub url: String,
    pub base_stat: u32,
    pub effort: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub name: String,
    pub url: String,
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub slot: u32,
    pub name: String,
    pub url: String,
}

/// Read-only snapshot of one Pokemon's attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub sprites: Sprites,
    pub stats: Vec<StatValue>,
    pub abilities: Vec<AbilityEntry>,
    pub types: Vec<TypeEntry>,
}

impl DetailRecord {
    pub fn preferred_image(&self) -> Option<&str> {
        self.sprites
            .official_artwork
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }
}

/// State owned by the list controller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub items: Vec<ListItemSummary>,
    pub offset: u32,
    pub is_last_page: bool,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub error: Option<String>,
    /// Store bookkeeping, not display state. Bumped by every successful
    /// refresh; page results requested under an older generation are stale.
    #[serde(skip)]
    pub generation: u64,
}

impl PaginationState {
    /// Whether a list showing rows up to `last_visible_index` should ask for more.
    pub fn should_load_more(&self, last_visible_index: usize) -> bool {
        if self.is_loading || self.is_last_page {
            return false;
        }
        last_visible_index + PREFETCH_DISTANCE >= self.items.len()
    }
}

/// State owned by the detail loader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailState {
    pub record: Option<DetailRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}
