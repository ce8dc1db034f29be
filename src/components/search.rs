//! Search Component
//!
//! Filter box with its own request state. Edits are debounced; a lookup only
//! goes out once the text has been stable for the quiet period, and its
//! result replaces the whole list.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::api::IngredientApi;
use crate::components::{Card, ErrorModal};
use crate::debounce::{DebouncedFilter, TimerSlot};
use crate::hooks::{use_http, ClientHandle};
use crate::models::Ingredient;
use crate::outcome::{search_outcome, OutcomeObserver};
use crate::request::PendingRequest;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// What the quiet-period timer does when it fires: the lookup to send, if
/// the pending edit is due and the box still shows it
pub fn due_search(
    debounce: &mut DebouncedFilter,
    now: u64,
    current_filter: &str,
    api: &IngredientApi,
) -> Option<PendingRequest> {
    let filter = debounce.poll(now, current_filter)?;
    log::debug!("[SEARCH] Looking up {:?}", filter);
    Some(api.search(&filter))
}

#[component]
pub fn Search(
    api: StoredValue<IngredientApi>,
    client: ClientHandle,
    debounce_ms: u32,
    #[prop(into)] on_load_ingredients: Callback<Vec<Ingredient>>,
) -> impl IntoView {
    let (entered_filter, set_entered_filter) = signal(String::new());
    let http = use_http(client);
    let debounce = StoredValue::new(DebouncedFilter::new(debounce_ms.into()));
    let timer = StoredValue::new_local(TimerSlot::<Timeout>::default());

    let schedule = move |filter: String| {
        if debounce.try_update_value(|d| d.edit(filter, now_ms())).is_none() {
            return;
        }
        let next = Timeout::new(debounce_ms, move || {
            let current = entered_filter.get_untracked();
            let request = debounce
                .try_update_value(|d| api.try_with_value(|api| due_search(d, now_ms(), &current, api)))
                .flatten()
                .flatten();
            if let Some(request) = request {
                http.send_request(request);
            }
        });
        timer.update_value(|slot| slot.replace(next));
    };

    // Initial lookup with an empty filter loads everything
    schedule(String::new());

    on_cleanup(move || {
        timer.try_update_value(|slot| slot.cancel());
    });

    Effect::new(move |prev: Option<OutcomeObserver>| {
        let mut observer = prev.unwrap_or_default();
        let loaded = http.state.with(|state| {
            debounce
                .try_update_value(|d| search_outcome(&mut observer, state, d))
                .flatten()
        });
        if let Some(list) = loaded {
            log::info!("[SEARCH] Loaded {} ingredients", list.len());
            on_load_ingredients.run(list);
        }
        observer
    });

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_entered_filter.set(value.clone());
        schedule(value);
    };

    view! {
        <section class="search">
            {move || http.error().map(|message| view! {
                <ErrorModal on_close=move |_| http.clear()>{message}</ErrorModal>
            })}
            <Card>
                <div class="search-input">
                    <label>"Filter by Title"</label>
                    <Show when=move || http.loading()>
                        <span>"Loading..."</span>
                    </Show>
                    <input
                        type="text"
                        prop:value=move || entered_filter.get()
                        on:input=on_input
                    />
                </div>
            </Card>
        </section>
    }
}
