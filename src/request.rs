//! Request Lifecycle
//!
//! State of one asynchronous call to the remote store (idle, loading,
//! succeeded, failed) as a tagged action reducer, plus the driver that runs a
//! call and feeds its outcome back through that reducer.
//!
//! Overlapping requests are not fenced: a new `Send` overwrites the visible
//! state, and an older call that settles later still lands on top of it.

use serde_json::Value;

use crate::api::{parse_created_key, parse_ingredient_map, HttpClient, HttpMethod};
use crate::error::RequestError;
use crate::models::IngredientDraft;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_settled(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

/// Which intent a request was sent for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTag {
    AddIngredient,
    RemoveIngredient,
    LoadIngredients,
}

impl RequestTag {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestTag::AddIngredient => "ADD_INGREDIENT",
            RequestTag::RemoveIngredient => "REMOVE_INGREDIENT",
            RequestTag::LoadIngredients => "LOAD_INGREDIENTS",
        }
    }

    /// Reject replies whose shape the outcome handler for this tag can't use
    fn check_payload(self, payload: &Value) -> Result<(), RequestError> {
        match self {
            RequestTag::AddIngredient => parse_created_key(payload).map(|_| ()),
            RequestTag::LoadIngredients => parse_ingredient_map(payload).map(|_| ()),
            RequestTag::RemoveIngredient => Ok(()),
        }
    }
}

/// Caller data carried through a request untouched
#[derive(Debug, Clone, PartialEq)]
pub enum RequestContext {
    Draft(IngredientDraft),
    IngredientId(String),
}

/// Everything needed to trigger one request
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub context: Option<RequestContext>,
    pub tag: Option<RequestTag>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HttpAction {
    Send,
    Response {
        payload: Value,
        context: Option<RequestContext>,
        tag: Option<RequestTag>,
    },
    Error(String),
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    pub phase: Phase,
    pub payload: Option<Value>,
    pub error: Option<String>,
    pub context: Option<RequestContext>,
    pub tag: Option<RequestTag>,
    /// Bumped on every settle so observers can act exactly once per outcome
    pub settled: u64,
    /// `clear()` ran while a request was in flight
    dismissed: bool,
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn reduce(self, action: HttpAction) -> Self {
        match action {
            HttpAction::Send => Self {
                phase: Phase::Loading,
                settled: self.settled,
                ..Self::default()
            },
            HttpAction::Response { payload, context, tag } => Self {
                phase: Phase::Succeeded,
                payload: Some(payload),
                error: None,
                context,
                tag,
                settled: self.settled + 1,
                dismissed: false,
            },
            // A failure the user already dismissed stays dismissed
            HttpAction::Error(message) => Self {
                phase: if self.dismissed { Phase::Idle } else { Phase::Failed },
                error: (!self.dismissed).then_some(message),
                settled: self.settled + 1,
                ..Self::default()
            },
            HttpAction::Clear => Self {
                phase: Phase::Idle,
                error: None,
                dismissed: self.phase == Phase::Loading,
                ..self
            },
        }
    }
}

/// Run one request: `Send`, await the client, then `Response` or `Error`.
/// Failures never escape; they end up as a message on the state.
pub async fn run_request<C>(client: &C, request: PendingRequest, mut dispatch: impl FnMut(HttpAction))
where
    C: HttpClient + ?Sized,
{
    let PendingRequest { url, method, body, context, tag } = request;
    dispatch(HttpAction::Send);
    log::debug!(
        "[HTTP] {} {} ({})",
        method,
        url,
        tag.map(RequestTag::as_str).unwrap_or("untagged")
    );

    let outcome = client.send(method, &url, body.as_ref()).await.and_then(|payload| {
        if let Some(tag) = tag {
            tag.check_payload(&payload)?;
        }
        Ok(payload)
    });

    match outcome {
        Ok(payload) => {
            log::debug!("[HTTP] {} {} succeeded", method, url);
            dispatch(HttpAction::Response { payload, context, tag });
        }
        Err(e) => {
            log::warn!("[HTTP] {} {} failed: {}", method, url, e);
            dispatch(HttpAction::Error(e.to_string()));
        }
    }
}
