//! Frontend Models
//!
//! Data structures matching the records kept by the remote ingredient store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ingredient amount as stored remotely. The form posts text, but records
/// written by other clients may carry a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

/// Ingredient as shown in the list. `id` is assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub title: String,
    pub amount: Amount,
}

/// What the form submits; also the body of the create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub title: String,
    pub amount: Amount,
}

impl IngredientDraft {
    pub fn new(title: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount: Amount::Text(amount.into()),
        }
    }

    /// Attach the id the store handed back for this draft
    pub fn with_id(self, id: impl Into<String>) -> Ingredient {
        Ingredient {
            id: id.into(),
            title: self.title,
            amount: self.amount,
        }
    }
}

/// One value of the id -> record map returned by a lookup
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngredientRecord {
    pub title: String,
    pub amount: Amount,
}

/// Reply to a create request: the generated key
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedKey {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_accepts_text_and_number() {
        let text: Amount = serde_json::from_str(r#""2""#).unwrap();
        let number: Amount = serde_json::from_str("2.5").unwrap();
        assert_eq!(text, Amount::Text("2".to_string()));
        assert_eq!(number.to_string(), "2.5");
    }

    #[test]
    fn test_draft_serializes_as_flat_record() {
        let draft = IngredientDraft::new("Salt", "2");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Salt", "amount": "2" }));
    }
}
