//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::router::{Evaluator, RouterConfig, paths};
use crate::util::credentials::{CredentialStore, LocalStorageStore};

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

/// Build the evaluator from build-time configuration, falling back to the
/// current table when the configuration is rejected.
pub fn build_evaluator(store: Arc<dyn CredentialStore>) -> Evaluator {
    let config = RouterConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("router config rejected, using defaults: {e}");
        RouterConfig::default()
    });
    match Evaluator::new(&config, store.clone()) {
        Ok(evaluator) => evaluator,
        Err(e) => {
            log::warn!("router config does not fit {:?} table, using defaults: {e}", config.profile);
            Evaluator::current(store)
        }
    }
}

/// Root application component.
///
/// Provides the route evaluator and registers every known path. Which paths
/// exist for the active profile, and which are guarded, is decided by the
/// evaluator inside `RouteGate`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(build_evaluator(Arc::new(LocalStorageStore)));

    view! {
        <Stylesheet id="leptos" href="/pkg/webui.css"/>
        <Title text="WASAText"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <RouteGate path=paths::ROOT/> }/>
                <Route path=StaticSegment("login") view=|| view! { <RouteGate path=paths::LOGIN/> }/>
                <Route path=StaticSegment("home") view=|| view! { <RouteGate path=paths::HOME/> }/>
                <Route
                    path=(StaticSegment("users"), StaticSegment("me"), StaticSegment("username"))
                    view=|| view! { <RouteGate path=paths::USERNAME/> }
                />
                <Route
                    path=(StaticSegment("users"), StaticSegment("me"), StaticSegment("photo"))
                    view=|| view! { <RouteGate path=paths::PHOTO/> }
                />
                <Route
                    path=StaticSegment("conversations")
                    view=|| view! { <RouteGate path=paths::CONVERSATIONS/> }
                />
                <Route
                    path=StaticSegment("sendMessageFirstView")
                    view=|| view! { <RouteGate path=paths::SEND_MESSAGE_FIRST/> }
                />
                <Route
                    path=StaticSegment("createGroupView")
                    view=|| view! { <RouteGate path=paths::CREATE_GROUP/> }
                />
            </Routes>
        </Router>
    }
}
