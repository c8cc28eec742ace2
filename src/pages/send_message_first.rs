//! First-message page for starting a conversation with a user.

use leptos::prelude::*;

#[component]
pub fn SendMessageFirstPage() -> impl IntoView {
    view! {
        <div class="compose-page">
            <h1>"New message"</h1>
        </div>
    }
}
