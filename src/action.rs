//! Actions for the list and detail stores
//!
//! Intents come from the presentation layer; `*DidLoad` / `*DidError` results
//! come back from repository tasks.

use serde::{Deserialize, Serialize};

use crate::state::{DetailRecord, ListPage};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum ListAction {
    /// Intent: fetch the page at the current offset
    ListLoadNext,
    /// Intent: refetch the first page and replace the list
    ListRefresh,
    /// Intent: dismiss the current error
    ListErrorClear,

    PageDidLoad { generation: u64, page: ListPage },
    PageDidError { generation: u64, error: String },
    RefreshDidLoad(ListPage),
    RefreshDidError(String),
}

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum DetailAction {
    /// Intent: fetch the record with this id
    DetailLoad(u32),
    /// Intent: dismiss the current error
    DetailErrorClear,

    DetailDidLoad(DetailRecord),
    DetailDidError(String),
}
