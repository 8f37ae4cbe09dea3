//! Conference speakers page — the speaker list route.

use leptos::prelude::*;

use crate::components::speaker_card::SpeakerCard;
use crate::net::graphql::GraphqlClient;
use crate::state::speakers::SpeakerStore;

/// Speaker list page mounted at `/conference`. Pure layout wrapper around
/// the list view.
#[component]
pub fn SpeakersPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="row">
                <SpeakerList/>
            </div>
        </div>
    }
}

/// Fetches all speakers on mount, loads them into the shared store, and
/// renders one card per speaker in server-returned order.
///
/// Tri-state contract: Suspense fallback while the query is pending, a flat
/// error line on failure (terminal until remount), cards on success.
#[component]
fn SpeakerList() -> impl IntoView {
    let store = expect_context::<RwSignal<SpeakerStore>>();
    let client = expect_context::<GraphqlClient>();

    let list = LocalResource::new(move || {
        let client = client.clone();
        async move {
            match crate::net::api::fetch_speakers(&client).await {
                Ok(speakers) => {
                    store.update(|s| s.load_list(speakers));
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        }
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading speakers..."</p> }>
            {move || {
                list.get()
                    .map(|outcome| match outcome {
                        Err(_) => view! { <p>"Error loading speakers..."</p> }.into_any(),
                        Ok(()) => {
                            view! {
                                <div class="speaker-list">
                                    {move || {
                                        store
                                            .with(|s| s.list_ids())
                                            .into_iter()
                                            .map(|id| view! { <SpeakerCard id=id/> })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
