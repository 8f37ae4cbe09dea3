//! Our Story page. Static content only.

use leptos::prelude::*;

#[component]
pub fn OurStoryPage() -> impl IntoView {
    view! {
        <div class="container page page--our-story">
            <h1>"Our Story"</h1>
            <p>
                "What started as a small meetup has grown into an annual "
                "conference for engineers, researchers, and makers."
            </p>
        </div>
    }
}
