//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© 2026 Conference. All rights reserved."</p>
        </footer>
    }
}
