//! Drive the store without a terminal
//!
//! Effects are awaited one after another in issue order, so a headless run
//! always resolves to the outcome of the single lookup it started.

use std::collections::VecDeque;

use tui_dispatch::EffectStore;

use crate::action::Action;
use crate::api::OpenMeteoClient;
use crate::effect::{self, Effect};
use crate::reducer::reducer;
use crate::state::AppState;

/// Dispatch `initial`, then keep executing effects until none are left.
pub async fn run_to_completion(
    client: &OpenMeteoClient,
    state: AppState,
    initial: Action,
) -> AppState {
    let mut store = EffectStore::new(state, reducer);
    let mut pending: VecDeque<Effect> = store.dispatch(initial).effects.into();

    while let Some(next) = pending.pop_front() {
        let action = effect::perform(client.clone(), next).await;
        pending.extend(store.dispatch(action).effects);
    }

    store.state().clone()
}
