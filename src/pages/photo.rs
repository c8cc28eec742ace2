use leptos::prelude::*;

#[component]
pub fn PhotoPage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"Profile photo"</h1>
        </div>
    }
}
