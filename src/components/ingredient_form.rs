//! Ingredient Form Component
//!
//! Title + amount inputs that emit an add intent.

use leptos::prelude::*;

use crate::components::{Card, LoadingIndicator};
use crate::models::IngredientDraft;

#[component]
pub fn IngredientForm(
    #[prop(into)] on_add_ingredient: Callback<IngredientDraft>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let (entered_title, set_entered_title) = signal(String::new());
    let (entered_amount, set_entered_amount) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = entered_title.get();
        if title.trim().is_empty() { return; }
        on_add_ingredient.run(IngredientDraft::new(title, entered_amount.get()));
    };

    view! {
        <section class="ingredient-form">
            <Card>
                <form on:submit=submit>
                    <div class="form-control">
                        <label for="title">"Name"</label>
                        <input
                            type="text"
                            id="title"
                            prop:value=move || entered_title.get()
                            on:input=move |ev| set_entered_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label for="amount">"Amount"</label>
                        <input
                            type="number"
                            id="amount"
                            prop:value=move || entered_amount.get()
                            on:input=move |ev| set_entered_amount.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="ingredient-form__actions">
                        <button type="submit">"Add Ingredient"</button>
                        <Show when=move || loading.get()>
                            <LoadingIndicator />
                        </Show>
                    </div>
                </form>
            </Card>
        </section>
    }
}
