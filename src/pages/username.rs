//! Username settings page.

use leptos::prelude::*;

#[component]
pub fn UsernamePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"Username"</h1>
            <p>"Choose the name other users see."</p>
        </div>
    }
}
