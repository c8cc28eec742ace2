//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view a route entry selects. Pages never check credentials
//! themselves; `components::route_gate` decides whether they render.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod conversations;
pub mod create_group;
pub mod home;
pub mod login;
pub mod photo;
pub mod send_message_first;
pub mod username;

use leptos::prelude::*;

use crate::router::View;

use conversations::ConversationsPage;
use create_group::CreateGroupPage;
use home::HomePage;
use login::LoginPage;
use photo::PhotoPage;
use send_message_first::SendMessageFirstPage;
use username::UsernamePage;

/// Render the page component for `view`.
pub fn render_view(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Home => view! { <HomePage/> }.into_any(),
        View::Username => view! { <UsernamePage/> }.into_any(),
        View::Photo => view! { <PhotoPage/> }.into_any(),
        View::Conversations => view! { <ConversationsPage/> }.into_any(),
        View::SendMessageFirst => view! { <SendMessageFirstPage/> }.into_any(),
        View::CreateGroup => view! { <CreateGroupPage/> }.into_any(),
    }
}

/// Document title shown for `view`.
#[must_use]
pub fn view_title(view: View) -> &'static str {
    match view {
        View::Login => "Sign in",
        View::Home => "Home",
        View::Username => "Username",
        View::Photo => "Profile photo",
        View::Conversations => "Conversations",
        View::SendMessageFirst => "New message",
        View::CreateGroup => "New group",
    }
}
