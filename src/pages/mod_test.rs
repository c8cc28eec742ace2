use std::collections::HashSet;

use super::*;

#[test]
fn view_titles_are_distinct() {
    let views =
        [View::Login, View::Home, View::Username, View::Photo, View::Conversations, View::SendMessageFirst, View::CreateGroup];
    let titles: HashSet<&str> = views.into_iter().map(view_title).collect();
    assert_eq!(titles.len(), views.len());
}
