// ============================================================================
// STORE CONTEXT - Shares the anecdote store between components
// ============================================================================
// The provider owns the reducer and the notification timer; components get
// a handle with read access and the two mutating callbacks.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_notification_timer::use_notification_timer;
use crate::models::{load_seed, Anecdote, NewAnecdote};
use crate::stores::ids::shared;
use crate::stores::{AnecdoteStore, RandomIds, SharedIdSource, StoreAction};
use crate::utils::constants::NOTIFICATION_TIMEOUT_MS;

/// Initial contents and id source of a store
#[derive(Clone)]
pub struct StoreInit {
    pub seed: Vec<Anecdote>,
    pub ids: SharedIdSource,
}

impl StoreInit {
    pub fn new(seed: Vec<Anecdote>, ids: SharedIdSource) -> Self {
        Self { seed, ids }
    }

    /// Embedded seed with random ids. A broken seed asset leaves the list empty.
    pub fn browser() -> Self {
        let seed = load_seed().unwrap_or_else(|e| {
            log::error!("❌ Could not load seed anecdotes: {}", e);
            Vec::new()
        });
        log::info!("📚 Seeded {} anecdotes", seed.len());
        Self::new(seed, shared(RandomIds))
    }
}

impl PartialEq for StoreInit {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed && Rc::ptr_eq(&self.ids, &other.ids)
    }
}

#[derive(Clone, PartialEq)]
pub struct AnecdoteStoreHandle {
    pub state: UseReducerHandle<AnecdoteStore>,
    pub add_anecdote: Callback<NewAnecdote>,
    pub clear_notification: Callback<()>,
}

#[hook]
pub fn use_anecdote_store_state(init: StoreInit) -> AnecdoteStoreHandle {
    let state = use_reducer(move || AnecdoteStore::new(init.seed, init.ids));
    let dispatcher = state.dispatcher();

    // Stable across renders, so an unchanged store does not wake consumers
    let add_anecdote = use_callback(dispatcher.clone(), |new: NewAnecdote, dispatcher| {
        dispatcher.dispatch(StoreAction::Add(new))
    });
    let clear_notification = use_callback(dispatcher, |_: (), dispatcher| {
        dispatcher.dispatch(StoreAction::ClearNotification)
    });

    AnecdoteStoreHandle {
        state,
        add_anecdote,
        clear_notification,
    }
}

/// Store handle from the nearest provider
#[hook]
pub fn use_anecdote_store() -> Option<AnecdoteStoreHandle> {
    use_context::<AnecdoteStoreHandle>()
}

#[derive(Properties, PartialEq)]
pub struct AnecdoteStoreProviderProps {
    pub init: StoreInit,
    /// How long a notification stays up
    #[prop_or(NOTIFICATION_TIMEOUT_MS)]
    pub notification_timeout_ms: u32,
    pub children: Children,
}

#[function_component(AnecdoteStoreProvider)]
pub fn anecdote_store_provider(props: &AnecdoteStoreProviderProps) -> Html {
    let handle = use_anecdote_store_state(props.init.clone());
    use_notification_timer(handle.state.clone(), props.notification_timeout_ms);

    html! {
        <ContextProvider<AnecdoteStoreHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AnecdoteStoreHandle>>
    }
}
