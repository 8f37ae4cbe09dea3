//! Session title list shown in a speaker card's footer.

use leptos::prelude::*;

use crate::net::types::Session;

/// Renders one paragraph per session, in the order the server returned them.
#[component]
pub fn SessionList(sessions: Vec<Session>) -> impl IntoView {
    view! {
        <div class="session-list">
            <h4>"Sessions"</h4>
            {sessions
                .into_iter()
                .map(|session| {
                    view! {
                        <span class="session-list__item">
                            <p>{session.title}</p>
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
