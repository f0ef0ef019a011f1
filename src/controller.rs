//! Controllers - own a store, run its effects, publish its state
//!
//! Each controller spawns one driver task that owns an `EffectStore` and is
//! the only writer of its state. Effects become repository calls spawned on a
//! `TaskManager`; their results come back as actions on the driver's own
//! channel. Dropping the controller closes the intent channel, the driver
//! exits and drops its `TaskManager`, which aborts anything still in flight,
//! so nothing is published after disposal.
//!
//! Constructors spawn onto the ambient tokio runtime and must be called from
//! within one.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tui_dispatch::{Action, EffectStore, TaskKey, TaskManager};

use crate::action::{DetailAction, ListAction};
use crate::effect::{DetailEffect, ListEffect};
use crate::reducer::{detail_reducer, list_reducer};
use crate::repository::PokemonRepository;
use crate::state::{DetailState, PaginationState};

/// Paginated list of Pokemon summaries.
pub struct PokemonListController {
    actions: mpsc::UnboundedSender<ListAction>,
    state: watch::Receiver<PaginationState>,
}

impl PokemonListController {
    /// Creates the controller and starts loading the first page.
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        let (actions, intents) = mpsc::unbounded_channel();
        let (publish, state) = watch::channel(PaginationState::default());

        tokio::spawn(run_store(
            EffectStore::new(PaginationState::default(), list_reducer),
            intents,
            publish,
            move |effect, tasks: &mut TaskManager<ListAction>| {
                handle_list_effect(&repository, effect, tasks)
            },
        ));

        let controller = Self { actions, state };
        controller.load_next_page();
        controller
    }

    /// Fetches the page at the current offset unless a load is running or
    /// the last page has been reached.
    pub fn load_next_page(&self) {
        self.send(ListAction::ListLoadNext);
    }

    /// Refetches the first page and replaces the list with it. Ignored while
    /// a refresh is already running.
    pub fn refresh(&self) {
        self.send(ListAction::ListRefresh);
    }

    pub fn clear_error(&self) {
        self.send(ListAction::ListErrorClear);
    }

    /// Scroll hook: loads the next page once the last visible row is close
    /// enough to the end of the list.
    pub fn on_visible(&self, last_visible_index: usize) {
        if self.state.borrow().should_load_more(last_visible_index) {
            self.load_next_page();
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PaginationState> {
        self.state.clone()
    }

    pub fn state(&self) -> PaginationState {
        self.state.borrow().clone()
    }

    fn send(&self, action: ListAction) {
        if self.actions.send(action).is_err() {
            tracing::debug!("list store stopped, dropping action");
        }
    }
}

/// Loader for a single Pokemon's detail record.
pub struct PokemonDetailLoader {
    actions: mpsc::UnboundedSender<DetailAction>,
    state: watch::Receiver<DetailState>,
}

impl PokemonDetailLoader {
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        let (actions, intents) = mpsc::unbounded_channel();
        let (publish, state) = watch::channel(DetailState::default());

        tokio::spawn(run_store(
            EffectStore::new(DetailState::default(), detail_reducer),
            intents,
            publish,
            move |effect, tasks: &mut TaskManager<DetailAction>| {
                handle_detail_effect(&repository, effect, tasks)
            },
        ));

        Self { actions, state }
    }

    /// Fetches `id`. The previous record stays published until the new one
    /// arrives; loads for different ids are not coordinated.
    pub fn load(&self, id: u32) {
        self.send(DetailAction::DetailLoad(id));
    }

    pub fn clear_error(&self) {
        self.send(DetailAction::DetailErrorClear);
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.clone()
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    fn send(&self, action: DetailAction) {
        if self.actions.send(action).is_err() {
            tracing::debug!("detail store stopped, dropping action");
        }
    }
}

fn handle_list_effect(
    repository: &Arc<dyn PokemonRepository>,
    effect: ListEffect,
    tasks: &mut TaskManager<ListAction>,
) {
    let repository = Arc::clone(repository);
    match effect {
        ListEffect::FetchPage { offset, generation } => {
            tasks.spawn(TaskKey::new("page"), async move {
                match repository.fetch_page(offset).await {
                    Ok(page) => ListAction::PageDidLoad { generation, page },
                    Err(err) => ListAction::PageDidError {
                        generation,
                        error: err.to_string(),
                    },
                }
            });
        }
        ListEffect::RefreshPage => {
            tasks.spawn(TaskKey::new("refresh"), async move {
                match repository.fetch_page(0).await {
                    Ok(page) => ListAction::RefreshDidLoad(page),
                    Err(err) => ListAction::RefreshDidError(err.to_string()),
                }
            });
        }
    }
}

fn handle_detail_effect(
    repository: &Arc<dyn PokemonRepository>,
    effect: DetailEffect,
    tasks: &mut TaskManager<DetailAction>,
) {
    let repository = Arc::clone(repository);
    match effect {
        // Keyed per id: a second load of another id must not cancel this one.
        DetailEffect::FetchDetail { id } => {
            tasks.spawn(TaskKey::new(format!("detail_{id}")), async move {
                match repository.fetch_detail(id).await {
                    Ok(record) => DetailAction::DetailDidLoad(record),
                    Err(err) => DetailAction::DetailDidError(err.to_string()),
                }
            });
        }
    }
}

async fn run_store<S, A, E, H>(
    mut store: EffectStore<S, A, E>,
    mut intents: mpsc::UnboundedReceiver<A>,
    publish: watch::Sender<S>,
    mut handle_effect: H,
) where
    S: Clone + Send + Sync + 'static,
    A: Action,
    E: Send + 'static,
    H: FnMut(E, &mut TaskManager<A>) + Send + 'static,
{
    let (results_tx, mut results) = mpsc::unbounded_channel();
    let mut tasks = TaskManager::new(results_tx);
    loop {
        let action = tokio::select! {
            biased;
            intent = intents.recv() => match intent {
                Some(action) => action,
                None => break,
            },
            Some(action) = results.recv() => action,
        };

        tracing::trace!(action = action.name(), "dispatch");
        let result = store.dispatch(action);
        if result.changed {
            publish.send_replace(store.state().clone());
        }
        for effect in result.effects {
            handle_effect(effect, &mut tasks);
        }
    }
    tracing::debug!(in_flight = tasks.len(), "store stopped");
}
