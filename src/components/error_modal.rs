//! Error Modal Component
//!
//! Dismissible notification for a failed request.

use leptos::prelude::*;

/// How many log lines to show under the message
const RECENT_ACTIVITY_LINES: usize = 5;

/// Modal with a backdrop. Clicking the backdrop or "Okay" calls `on_close`.
/// The last few log lines are listed under the message to help tell what
/// went wrong.
///
/// # Arguments
/// * `on_close` - Callback to dismiss the error (does not retry anything)
/// * `children` - The message body
#[component]
pub fn ErrorModal(
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let recent = rolling_logger::global()
        .map(|logger| logger.tail(RECENT_ACTIVITY_LINES))
        .unwrap_or_default();
    let activity = (!recent.is_empty()).then(|| view! {
        <details class="error-modal__activity">
            <summary>"Recent activity"</summary>
            <ul>
                {recent.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </details>
    });

    view! {
        <div class="backdrop" on:click=move |_| on_close.run(())></div>
        <div class="error-modal">
            <h2>"An Error Occurred!"</h2>
            <p>{children()}</p>
            {activity}
            <div class="error-modal__actions">
                <button type="button" on:click=move |_| on_close.run(())>
                    "Okay"
                </button>
            </div>
        </div>
    }
}
