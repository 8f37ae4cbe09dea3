//! Speaker card with the featured-speaker mutation button.

#[cfg(test)]
#[path = "speaker_card_test.rs"]
mod speaker_card_test;

use leptos::prelude::*;

use crate::components::session_list::SessionList;
use crate::net::graphql::GraphqlClient;
use crate::state::speakers::SpeakerStore;

/// Star icon class derived from the entity's `featured` field, so the icon
/// tracks mutations applied to the store from any view.
fn star_icon_class(featured: bool) -> &'static str {
    if featured { "fa fa-star" } else { "fa fa-star-o" }
}

/// One card in the speaker list: name, bio, sessions, and the
/// featured-speaker button.
///
/// The card renders from the shared store rather than a fetch snapshot, and
/// the button is disabled while its mutation is in flight so rapid clicks
/// cannot issue duplicate requests. A mutation failure surfaces as an
/// inline message below the button.
#[component]
pub fn SpeakerCard(id: String) -> impl IntoView {
    let store = expect_context::<RwSignal<SpeakerStore>>();
    let client = expect_context::<GraphqlClient>();
    let pending = RwSignal::new(false);
    let mutation_error = RwSignal::new(None::<String>);

    let speaker = {
        let id = id.clone();
        Memo::new(move |_| store.with(|s| s.get(&id).cloned()))
    };

    let on_mark_featured = move |_| {
        if pending.get() {
            return;
        }
        pending.set(true);
        mutation_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::mark_featured(&client, &id, true).await {
                    Ok(patch) => store.update(|s| {
                        s.apply_featured(&patch);
                    }),
                    Err(e) => mutation_error.set(Some(format!("Could not mark featured: {e}"))),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &id);
            pending.set(false);
        }
    };

    view! {
        {move || {
            speaker
                .get()
                .map(|s| {
                    view! {
                        <div class="speaker-card">
                            <div class="panel">
                                <div class="panel__heading">
                                    <h3 class="panel__title">{format!("Speaker: {}", s.name)}</h3>
                                </div>
                                <div class="panel__body">
                                    <h5>{format!("Bio: {}", s.bio)}</h5>
                                </div>
                                <div class="panel__footer">
                                    <SessionList sessions=s.sessions/>
                                    <span>
                                        <button
                                            type="button"
                                            class="btn btn--featured"
                                            disabled=move || pending.get()
                                            on:click=on_mark_featured.clone()
                                        >
                                            <i class=star_icon_class(s.featured) aria-hidden="true"></i>
                                            " Featured Speaker"
                                        </button>
                                    </span>
                                    <Show when=move || mutation_error.get().is_some()>
                                        <p class="speaker-card__error">
                                            {move || mutation_error.get().unwrap_or_default()}
                                        </p>
                                    </Show>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
