//! Ingredient Endpoints
//!
//! Request builders for the realtime-database REST paths and parsers for
//! what those paths return.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;

use super::HttpMethod;
use crate::error::RequestError;
use crate::models::{CreatedKey, Ingredient, IngredientDraft, IngredientRecord};
use crate::request::{PendingRequest, RequestContext, RequestTag};

/// Characters that may not appear raw inside a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'\\');

/// Characters that may not appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Endpoints of the `ingredients` collection under one database root
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientApi {
    base_url: String,
}

impl IngredientApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/ingredients.json", self.base_url)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/ingredients/{}.json", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }

    /// Exact-title lookup. Query values are JSON literals, so the filter is
    /// JSON-quoted before it is percent-encoded.
    pub fn filter_url(&self, filter: &str) -> String {
        if filter.is_empty() {
            return self.collection_url();
        }
        format!(
            "{}?orderBy={}&equalTo={}",
            self.collection_url(),
            encode_json_literal("title"),
            encode_json_literal(filter)
        )
    }

    /// POST the draft; the draft rides along as context so the reply can be
    /// turned back into a full ingredient.
    pub fn add(&self, draft: IngredientDraft) -> PendingRequest {
        PendingRequest {
            url: self.collection_url(),
            method: HttpMethod::Post,
            body: serde_json::to_value(&draft).ok(),
            context: Some(RequestContext::Draft(draft)),
            tag: Some(RequestTag::AddIngredient),
        }
    }

    pub fn remove(&self, id: &str) -> PendingRequest {
        PendingRequest {
            url: self.item_url(id),
            method: HttpMethod::Delete,
            body: None,
            context: Some(RequestContext::IngredientId(id.to_string())),
            tag: Some(RequestTag::RemoveIngredient),
        }
    }

    pub fn search(&self, filter: &str) -> PendingRequest {
        PendingRequest {
            url: self.filter_url(filter),
            method: HttpMethod::Get,
            body: None,
            context: None,
            tag: Some(RequestTag::LoadIngredients),
        }
    }
}

fn encode_json_literal(value: &str) -> String {
    let literal = Value::String(value.to_string()).to_string();
    utf8_percent_encode(&literal, QUERY_VALUE).to_string()
}

/// Id the store generated for a POST (`{"name": "-N..."}`)
pub fn parse_created_key(payload: &Value) -> Result<String, RequestError> {
    let key: CreatedKey = serde_json::from_value(payload.clone())?;
    Ok(key.name)
}

/// Turn an id -> record map into a list ordered by id. Push ids sort in
/// creation order; `null` means nothing matched. Records that don't look
/// like ingredients are skipped so one bad entry can't hide the rest.
pub fn parse_ingredient_map(payload: &Value) -> Result<Vec<Ingredient>, RequestError> {
    let records: Option<BTreeMap<String, Value>> = serde_json::from_value(payload.clone())?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(id, record)| match serde_json::from_value::<IngredientRecord>(record) {
            Ok(record) => Some(Ingredient {
                id,
                title: record.title,
                amount: record.amount,
            }),
            Err(e) => {
                log::warn!("[API] Skipping malformed ingredient {}: {}", id, e);
                None
            }
        })
        .collect())
}
