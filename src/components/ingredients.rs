//! Ingredients Page
//!
//! Root of the tracker. Owns the collection store and the add/remove request
//! state; completed requests are mapped onto the collection by the outcome
//! observer, and failures surface as a dismissible modal.

use leptos::prelude::*;

use crate::api::IngredientApi;
use crate::components::{ErrorModal, IngredientForm, IngredientList, Search};
use crate::hooks::{use_http, ClientHandle};
use crate::models::{Ingredient, IngredientDraft};
use crate::outcome::{apply_outcome, OutcomeObserver};
use crate::store::{store_dispatch, IngredientAction, IngredientStore, IngredientsState, IngredientsStateStoreFields};

#[component]
pub fn Ingredients(
    api: StoredValue<IngredientApi>,
    client: ClientHandle,
    debounce_ms: u32,
) -> impl IntoView {
    let store = IngredientStore::new(IngredientsState::default());
    let http = use_http(client);

    // Apply each successful add/remove exactly once
    Effect::new(move |prev: Option<OutcomeObserver>| {
        let mut observer = prev.unwrap_or_default();
        http.state.with(|state| apply_outcome(&mut observer, state, &store));
        observer
    });

    let add_ingredient_handler = Callback::new(move |draft: IngredientDraft| {
        log::info!("[INGREDIENTS] Adding {:?}", draft.title);
        if let Some(request) = api.try_with_value(|api| api.add(draft)) {
            http.send_request(request);
        }
    });

    let remove_ingredient_handler = Callback::new(move |id: String| {
        log::info!("[INGREDIENTS] Removing {}", id);
        if let Some(request) = api.try_with_value(|api| api.remove(&id)) {
            http.send_request(request);
        }
    });

    let filtered_ingredients_handler = Callback::new(move |list: Vec<Ingredient>| {
        store_dispatch(&store, IngredientAction::ReplaceAll(list));
    });

    let clear_error = Callback::new(move |_: ()| http.clear());

    view! {
        <div class="App">
            {move || http.error().map(|message| view! {
                <ErrorModal on_close=clear_error>{message}</ErrorModal>
            })}
            <IngredientForm
                on_add_ingredient=add_ingredient_handler
                loading=Signal::derive(move || http.loading())
            />
            <section>
                <Search
                    api=api
                    client=client
                    debounce_ms=debounce_ms
                    on_load_ingredients=filtered_ingredients_handler
                />
                <IngredientList
                    ingredients=Signal::derive(move || store.ingredients().get())
                    on_remove_item=remove_ingredient_handler
                />
            </section>
        </div>
    }
}
