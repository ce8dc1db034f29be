//! UI Components
//!
//! Leptos views for the ingredient tracker.

mod auth;
mod card;
mod error_modal;
mod ingredient_form;
mod ingredient_list;
mod ingredients;
mod loading_indicator;
mod search;

pub use auth::Auth;
pub use card::Card;
pub use error_modal::ErrorModal;
pub use ingredient_form::IngredientForm;
pub use ingredient_list::IngredientList;
pub use ingredients::Ingredients;
pub use loading_indicator::LoadingIndicator;
pub use search::{due_search, Search};
