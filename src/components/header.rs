//! Site header with top-level navigation.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Conference"
            </a>
            <nav class="site-header__nav">
                <a href="/our-story">"Our Story"</a>
                <a href="/media">"Media"</a>
                <a href="/robotics">"Robotics"</a>
                <a href="/conference">"Conference"</a>
            </nav>
        </header>
    }
}
