//! Auth Component
//!
//! Gate shown until the session is logged in.

use leptos::prelude::*;

use crate::components::Card;
use crate::session::Session;

#[component]
pub fn Auth(session: Session) -> impl IntoView {
    view! {
        <div class="auth">
            <Card>
                <h2>"You are not authenticated!"</h2>
                <p>"Please log in to continue."</p>
                <button type="button" on:click=move |_| session.login()>
                    "Log In"
                </button>
            </Card>
        </div>
    }
}
