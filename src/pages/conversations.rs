//! Conversation list page.

use leptos::prelude::*;

use crate::router::paths;

#[component]
pub fn ConversationsPage() -> impl IntoView {
    view! {
        <div class="conversations-page">
            <header class="conversations-page__header">
                <h1>"Conversations"</h1>
                <a href=paths::SEND_MESSAGE_FIRST class="btn btn--primary">"+ New"</a>
            </header>
        </div>
    }
}
