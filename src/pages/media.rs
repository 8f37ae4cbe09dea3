//! Media page. Static content only.

use leptos::prelude::*;

#[component]
pub fn MediaPage() -> impl IntoView {
    view! {
        <div class="container page page--media">
            <h1>"Media"</h1>
            <p>"Recordings, photos, and press coverage from past events."</p>
        </div>
    }
}
