use leptos::prelude::*;

#[component]
pub fn CreateGroupPage() -> impl IntoView {
    view! {
        <div class="compose-page">
            <h1>"New group"</h1>
        </div>
    }
}
