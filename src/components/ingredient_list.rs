//! Ingredient List Component
//!
//! Renders the collection; clicking an entry emits a remove intent.

use leptos::prelude::*;

use crate::models::Ingredient;

#[component]
pub fn IngredientList(
    #[prop(into)] ingredients: Signal<Vec<Ingredient>>,
    #[prop(into)] on_remove_item: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="ingredient-list">
            <h2>"Loaded Ingredients"</h2>
            <ul>
                // Ids can repeat (adds are not deduplicated), so key by position too
                <For
                    each=move || ingredients.get().into_iter().enumerate()
                    key=|(idx, ing)| (*idx, ing.id.clone())
                    children=move |(_, ing)| {
                        let id = ing.id.clone();
                        view! {
                            <li on:click=move |_| on_remove_item.run(id.clone())>
                                <span>{ing.title.clone()}</span>
                                <span>{format!("{}x", ing.amount)}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
