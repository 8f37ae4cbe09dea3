//! Robotics page. Static content only.

use leptos::prelude::*;

#[component]
pub fn RoboticsPage() -> impl IntoView {
    view! {
        <div class="container page page--robotics">
            <h1>"Robotics"</h1>
            <p>"Live robotics demos run all week on the exhibition floor."</p>
        </div>
    }
}
