//! Reducers - pure functions: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::{DetailAction, ListAction};
use crate::config::PAGE_SIZE;
use crate::effect::{DetailEffect, ListEffect};
use crate::state::{DetailState, PaginationState};

pub fn list_reducer(state: &mut PaginationState, action: ListAction) -> DispatchResult<ListEffect> {
    match action {
        ListAction::ListLoadNext => {
            if state.is_loading || state.is_last_page {
                return DispatchResult::unchanged();
            }
            state.is_loading = true;
            state.error = None;
            DispatchResult::changed_with(ListEffect::FetchPage {
                offset: state.offset,
                generation: state.generation,
            })
        }

        ListAction::ListRefresh => {
            if state.is_refreshing {
                return DispatchResult::unchanged();
            }
            state.is_refreshing = true;
            state.error = None;
            DispatchResult::changed_with(ListEffect::RefreshPage)
        }

        ListAction::ListErrorClear => {
            if state.error.is_none() {
                return DispatchResult::unchanged();
            }
            state.error = None;
            DispatchResult::changed()
        }

        ListAction::PageDidLoad { generation, page } => {
            state.is_loading = false;
            if generation != state.generation {
                return DispatchResult::changed();
            }
            state.is_last_page = page.is_last();
            state.items.extend(page.items);
            state.offset += PAGE_SIZE;
            DispatchResult::changed()
        }

        ListAction::PageDidError { generation, error } => {
            state.is_loading = false;
            if generation == state.generation {
                state.error = Some(format!("Failed to load Pokemon: {error}"));
            }
            DispatchResult::changed()
        }

        ListAction::RefreshDidLoad(page) => {
            state.is_refreshing = false;
            state.is_last_page = page.is_last();
            state.items = page.items;
            state.offset = PAGE_SIZE;
            state.generation = state.generation.wrapping_add(1);
            DispatchResult::changed()
        }

        ListAction::RefreshDidError(error) => {
            state.is_refreshing = false;
            state.error = Some(format!("Failed to refresh: {error}"));
            DispatchResult::changed()
        }
    }
}

pub fn detail_reducer(state: &mut DetailState, action: DetailAction) -> DispatchResult<DetailEffect> {
    match action {
        DetailAction::DetailLoad(id) => {
            state.is_loading = true;
            state.error = None;
            DispatchResult::changed_with(DetailEffect::FetchDetail { id })
        }

        DetailAction::DetailErrorClear => {
            if state.error.is_none() {
                return DispatchResult::unchanged();
            }
            state.error = None;
            DispatchResult::changed()
        }

        DetailAction::DetailDidLoad(record) => {
            state.record = Some(record);
            state.is_loading = false;
            DispatchResult::changed()
        }

        DetailAction::DetailDidError(error) => {
            state.error = Some(format!("Failed to load Pokemon details: {error}"));
            state.is_loading = false;
            DispatchResult::changed()
        }
    }
}
