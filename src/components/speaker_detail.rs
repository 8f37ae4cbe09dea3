//! Detail panel for a single speaker.

#[cfg(test)]
#[path = "speaker_detail_test.rs"]
mod speaker_detail_test;

use leptos::prelude::*;

use crate::net::types::{Session, Speaker};

/// Flatten session titles into the quoted, comma-separated footer line,
/// e.g. `"Talk A", "Talk B"`.
fn format_session_titles(sessions: &[Session]) -> String {
    sessions
        .iter()
        .map(|s| format!("\"{}\"", s.title))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Presentational panel: name, bio, and the flattened session-title line.
/// Pure function of its input; no data fetching, no mutation capability.
#[component]
pub fn SpeakerDetailPanel(speaker: Speaker) -> impl IntoView {
    let titles = format_session_titles(&speaker.sessions);

    view! {
        <div class="panel panel--speaker-detail">
            <div class="panel__heading">
                <h3 class="panel__title">{speaker.name}</h3>
            </div>
            <div class="panel__body">
                <h5>{speaker.bio}</h5>
            </div>
            <div class="panel__footer">
                <span class="panel__sessions">{titles}</span>
            </div>
        </div>
    }
}
