//! Ingredient Collection Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The collection is
//! only ever written through `store_dispatch`, which runs the pure reducer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Ingredient;

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientAction {
    /// Drop everything and show this list (lookup results)
    ReplaceAll(Vec<Ingredient>),
    /// Append; ids are not checked for duplicates
    AddOne(Ingredient),
    RemoveById(String),
}

pub fn reduce(mut ingredients: Vec<Ingredient>, action: IngredientAction) -> Vec<Ingredient> {
    match action {
        IngredientAction::ReplaceAll(list) => list,
        IngredientAction::AddOne(ingredient) => {
            ingredients.push(ingredient);
            ingredients
        }
        IngredientAction::RemoveById(id) => {
            ingredients.retain(|ingredient| ingredient.id != id);
            ingredients
        }
    }
}

/// State owned by the tracker page
#[derive(Clone, Debug, Default, Store)]
pub struct IngredientsState {
    pub ingredients: Vec<Ingredient>,
}

pub type IngredientStore = Store<IngredientsState>;

/// Apply one action to the store's collection
pub fn store_dispatch(store: &IngredientStore, action: IngredientAction) {
    let binding = store.ingredients();
    let mut ingredients = binding.write();
    let current = std::mem::take(&mut *ingredients);
    *ingredients = reduce(current, action);
    log::debug!("[STORE] {} ingredients", ingredients.len());
}
