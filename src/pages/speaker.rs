//! Speaker detail page — reads the `speaker_id` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::speaker_detail::SpeakerDetailPanel;
use crate::net::graphql::GraphqlClient;
use crate::state::speakers::SpeakerStore;

/// Detail page mounted at `/conference/speaker/:speaker_id`. Pure layout
/// wrapper around the detail view.
#[component]
pub fn SpeakerPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="row">
                <SpeakerDetails/>
            </div>
        </div>
    }
}

/// Fetches one speaker by the route parameter and renders the detail panel.
///
/// Reading the parameter inside the resource closure makes the fetch track
/// route changes: a new id restarts the cycle at the loading state. A null
/// server result renders "Speaker not found." instead of dereferencing a
/// missing entity.
#[component]
fn SpeakerDetails() -> impl IntoView {
    let store = expect_context::<RwSignal<SpeakerStore>>();
    let client = expect_context::<GraphqlClient>();
    let params = use_params_map();

    let detail = LocalResource::new(move || {
        let client = client.clone();
        let id = params.read().get("speaker_id").unwrap_or_default();
        async move {
            if id.is_empty() {
                return Ok(None);
            }
            match crate::net::api::fetch_speaker_by_id(&client, &id).await {
                Ok(Some(speaker)) => {
                    let id = speaker.id.clone();
                    store.update(|s| s.upsert(speaker));
                    Ok(Some(id))
                }
                Ok(None) => Ok(None),
                Err(e) => Err(e.to_string()),
            }
        }
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading speaker..."</p> }>
            {move || {
                detail
                    .get()
                    .map(|outcome| match outcome {
                        Err(_) => view! { <p>"Error loading speaker!"</p> }.into_any(),
                        Ok(None) => view! { <p>"Speaker not found."</p> }.into_any(),
                        Ok(Some(id)) => {
                            view! {
                                {move || {
                                    store
                                        .with(|s| s.get(&id).cloned())
                                        .map(|speaker| view! { <SpeakerDetailPanel speaker=speaker/> })
                                }}
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
