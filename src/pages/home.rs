//! Home landing page. Static content only.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container page page--home">
            <h1>"Welcome"</h1>
            <p>
                "Join us for a week of talks, workshops, and robotics demos. "
                "Browse the conference section to see this year's speakers."
            </p>
            <a class="btn btn--primary" href="/conference">
                "View Speakers"
            </a>
        </div>
    }
}
