//! Request Hook
//!
//! `use_http` binds the request lifecycle to a Leptos signal. Each call gets
//! its own state, so a component can track its requests independently.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpClient;
use crate::request::{run_request, HttpAction, PendingRequest, RequestState};

/// Transport shared by every request store in the app
pub type SharedClient = Rc<dyn HttpClient>;

/// Copyable handle to the shared transport (the client itself is not `Send`)
pub type ClientHandle = StoredValue<SharedClient, LocalStorage>;

#[derive(Clone, Copy)]
pub struct HttpHandle {
    pub state: RwSignal<RequestState>,
    client: ClientHandle,
}

pub fn use_http(client: ClientHandle) -> HttpHandle {
    HttpHandle {
        state: RwSignal::new(RequestState::default()),
        client,
    }
}

impl HttpHandle {
    /// Fire and forget. The state goes to loading right away; the outcome
    /// lands whenever the call settles, even if a newer request started.
    pub fn send_request(&self, request: PendingRequest) {
        let handle = *self;
        spawn_local(async move { handle.run(request).await });
    }

    /// Drive one request to completion against this handle's state
    pub async fn run(&self, request: PendingRequest) {
        let Some(client) = self.client.try_get_value() else {
            log::warn!("[HTTP] Client disposed, dropping {} {}", request.method, request.url);
            return;
        };
        let state = self.state;
        run_request(&*client, request, move |action| dispatch(state, action)).await;
    }

    /// Dismiss the error / loading flags. Does not retry anything.
    pub fn clear(&self) {
        dispatch(self.state, HttpAction::Clear);
    }

    pub fn loading(&self) -> bool {
        self.state.with(RequestState::is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }
}

fn dispatch(state: RwSignal<RequestState>, action: HttpAction) {
    // The owning view may be gone by the time a request settles
    if state.try_update(|s| *s = std::mem::take(s).reduce(action)).is_none() {
        log::debug!("[HTTP] Request settled after its view was disposed");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use serde_json::json;
    use tokio::sync::Notify;

    use super::*;
    use crate::api::testing::{GatedClient, ScriptedClient};
    use crate::api::IngredientApi;
    use crate::error::RequestError;
    use crate::models::IngredientDraft;
    use crate::request::{Phase, RequestContext, RequestTag};

    fn api() -> IngredientApi {
        IngredientApi::new("https://db.example.com")
    }

    fn handle_for(client: impl HttpClient + 'static) -> HttpHandle {
        use_http(StoredValue::new_local(Rc::new(client) as SharedClient))
    }

    #[tokio::test]
    async fn test_run_settles_signal_with_outcome() {
        let owner = Owner::new();
        owner.set();
        let http = handle_for(ScriptedClient::new(vec![Ok(json!({ "name": "-N1" }))]));
        let draft = IngredientDraft::new("Salt", "2");

        http.run(api().add(draft.clone())).await;

        let state = http.state.get_untracked();
        assert_eq!(state.phase, Phase::Succeeded);
        assert_eq!(state.tag, Some(RequestTag::AddIngredient));
        assert_eq!(state.context, Some(RequestContext::Draft(draft)));
        assert!(!http.loading());
    }

    #[tokio::test]
    async fn test_failure_then_clear() {
        let owner = Owner::new();
        owner.set();
        let http = handle_for(ScriptedClient::new(vec![Err(RequestError::Network("offline".to_string()))]));

        http.run(api().remove("x1")).await;
        assert_eq!(http.error().as_deref(), Some("Network error: offline"));

        http.clear();
        assert_eq!(http.error(), None);
        assert_eq!(http.state.get_untracked().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_loading_while_in_flight_and_clear_unsticks_it() {
        let owner = Owner::new();
        owner.set();
        let gate = Rc::new(Notify::new());
        let http = handle_for(GatedClient::new(gate.clone(), Ok(json!(null))));

        let request = http.run(api().remove("x1"));
        let dismiss = async {
            assert!(http.loading());
            http.clear();
            assert!(!http.loading());
            gate.notify_one();
        };
        tokio::join!(request, dismiss);

        assert_eq!(http.state.get_untracked().phase, Phase::Succeeded);
        assert!(!http.loading());
    }

    #[tokio::test]
    async fn test_settle_after_view_disposed_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let gate = Rc::new(Notify::new());
        let http = handle_for(GatedClient::new(gate.clone(), Ok(json!({ "name": "-N1" }))));

        let request = http.run(api().add(IngredientDraft::new("Salt", "2")));
        let unmount = async {
            http.state.dispose();
            gate.notify_one();
        };
        tokio::join!(request, unmount);

        assert!(http.state.try_get_untracked().is_none());
    }

    #[tokio::test]
    async fn test_run_without_client_leaves_state_idle() {
        let owner = Owner::new();
        owner.set();
        let client: ClientHandle = StoredValue::new_local(Rc::new(ScriptedClient::default()) as SharedClient);
        let http = use_http(client);
        client.dispose();

        http.run(api().search("")).await;

        assert_eq!(http.state.get_untracked().phase, Phase::Idle);
    }
}
