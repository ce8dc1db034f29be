//! Session
//!
//! Login state, created once by `App` and handed to the views that need it.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Session {
    is_auth: RwSignal<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            is_auth: RwSignal::new(false),
        }
    }

    pub fn is_auth(&self) -> bool {
        self.is_auth.get()
    }

    pub fn login(&self) {
        log::info!("[SESSION] Logged in");
        self.is_auth.set(true);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
