//! Login page.

use leptos::prelude::*;

/// Login page. Signing in happens outside this crate; once a token is stored
/// the guarded pages become reachable.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WASAText"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <a href="/home" class="login-button">"Continue"</a>
            </div>
        </div>
    }
}
