//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::net::graphql::GraphqlClient;
use crate::pages::{
    home::HomePage, media::MediaPage, our_story::OurStoryPage, robotics::RoboticsPage,
    speaker::SpeakerPage, speakers::SpeakersPage,
};
use crate::state::speakers::SpeakerStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the GraphQL client (one endpoint, configured once at startup)
/// and the shared speaker store, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(GraphqlClient::default());
    provide_context(RwSignal::new(SpeakerStore::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/conference-client.css"/>
        <Title text="Conference"/>

        <div id="wrapper">
            <Router>
                <Header/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("media") view=MediaPage/>
                    <Route path=StaticSegment("our-story") view=OurStoryPage/>
                    <Route path=StaticSegment("robotics") view=RoboticsPage/>
                    <Route path=StaticSegment("conference") view=SpeakersPage/>
                    <Route
                        path=(
                            StaticSegment("conference"),
                            StaticSegment("speaker"),
                            ParamSegment("speaker_id"),
                        )
                        view=SpeakerPage
                    />
                </Routes>
                <Footer/>
            </Router>
        </div>
    }
}
