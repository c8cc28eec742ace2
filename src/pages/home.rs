//! Home page with links to the profile and messaging screens.

use leptos::prelude::*;

use crate::router::paths;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <nav class="home-page__nav">
                <a href=paths::CONVERSATIONS>"Conversations"</a>
                <a href=paths::SEND_MESSAGE_FIRST>"New message"</a>
                <a href=paths::CREATE_GROUP>"New group"</a>
                <a href=paths::USERNAME>"Change username"</a>
                <a href=paths::PHOTO>"Change photo"</a>
            </nav>
        </div>
    }
}
