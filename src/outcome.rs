//! Outcome Observer
//!
//! Turns a settled request into the collection mutation it stands for.

use crate::api::{parse_created_key, parse_ingredient_map};
use crate::debounce::DebouncedFilter;
use crate::models::Ingredient;
use crate::request::{Phase, RequestContext, RequestState, RequestTag};
use crate::store::{store_dispatch, IngredientAction, IngredientStore};

/// Remembers the last settle it acted on, so each outcome is applied once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeObserver {
    last_settled: u64,
}

impl OutcomeObserver {
    pub fn observe(&mut self, state: &RequestState) -> Option<IngredientAction> {
        if state.phase != Phase::Succeeded || state.settled <= self.last_settled {
            return None;
        }
        self.last_settled = state.settled;

        let action = outcome_action(state);
        if action.is_none() {
            log::warn!(
                "[OUTCOME] Ignoring {} outcome without usable context",
                state.tag.map(RequestTag::as_str).unwrap_or("untagged")
            );
        }
        action
    }
}

/// Tracker page effect: apply a fresh add/remove outcome to the collection.
/// Returns whether the store changed.
pub fn apply_outcome(observer: &mut OutcomeObserver, state: &RequestState, store: &IngredientStore) -> bool {
    match observer.observe(state) {
        Some(action) => {
            store_dispatch(store, action);
            true
        }
        None => false,
    }
}

/// Search box effect: a finished lookup ends the debounce cycle, and a
/// successful one yields the list to show
pub fn search_outcome(
    observer: &mut OutcomeObserver,
    state: &RequestState,
    debounce: &mut DebouncedFilter,
) -> Option<Vec<Ingredient>> {
    if state.phase.is_settled() {
        debounce.settle();
    }
    match observer.observe(state)? {
        IngredientAction::ReplaceAll(list) => Some(list),
        _ => None,
    }
}

fn outcome_action(state: &RequestState) -> Option<IngredientAction> {
    match (state.tag?, state.context.as_ref()) {
        (RequestTag::AddIngredient, Some(RequestContext::Draft(draft))) => {
            let id = parse_created_key(state.payload.as_ref()?).ok()?;
            Some(IngredientAction::AddOne(draft.clone().with_id(id)))
        }
        (RequestTag::RemoveIngredient, Some(RequestContext::IngredientId(id))) => {
            Some(IngredientAction::RemoveById(id.clone()))
        }
        (RequestTag::LoadIngredients, _) => parse_ingredient_map(state.payload.as_ref()?)
            .ok()
            .map(IngredientAction::ReplaceAll),
        _ => None,
    }
}
