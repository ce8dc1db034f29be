//! Ingredient Tracker App
//!
//! Builds the shared services and shows the tracker once the user logs in.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{IngredientApi, ReqwestClient};
use crate::components::{Auth, Ingredients};
use crate::config::AppConfig;
use crate::hooks::{ClientHandle, SharedClient};
use crate::session::Session;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Services are passed down explicitly rather than provided via context
    let session = Session::new();
    let api = StoredValue::new(IngredientApi::new(config.api_base_url));
    let client: ClientHandle = StoredValue::new_local(Rc::new(ReqwestClient::new()) as SharedClient);
    let debounce_ms = config.search_debounce_ms;

    view! {
        <Show
            when=move || session.is_auth()
            fallback=move || view! { <Auth session=session /> }
        >
            <Ingredients api=api client=client debounce_ms=debounce_ms />
        </Show>
    }
}
