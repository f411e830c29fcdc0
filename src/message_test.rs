use super::*;

// =============================================================
// Message
// =============================================================

#[test]
fn user_message_keeps_content_verbatim() {
    let msg = Message::user("  What is Pikachu's type?  ");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "  What is Pikachu's type?  ");
    assert!(msg.sources.is_none());
}

#[test]
fn messages_get_distinct_ids() {
    let a = Message::user("a");
    let b = Message::user("a");
    assert_ne!(a.id, b.id);
}

#[test]
fn from_reply_carries_sources() {
    let reply = ChatReply { response: "Electric".to_owned(), sources: Some(vec!["bulbapedia".to_owned()]) };
    let msg = Message::from_reply(reply);
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "Electric");
    assert_eq!(msg.sources.as_deref(), Some(&["bulbapedia".to_owned()][..]));
}

#[test]
fn from_error_prefixes_user_message() {
    let err = AssistantError::Status { status: 500, detail: Some("model unavailable".to_owned()) };
    let msg = Message::from_error(&err);
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "Error: model unavailable");
    assert!(msg.sources.is_none());
}

#[test]
fn sources_line_joins_with_commas() {
    let msg = Message::assistant("x", Some(vec!["bulbapedia".to_owned(), "pokeapi".to_owned()]));
    assert_eq!(msg.sources_line().as_deref(), Some("Sources: bulbapedia, pokeapi"));
}

#[test]
fn sources_line_absent_without_sources() {
    assert!(Message::assistant("x", None).sources_line().is_none());
}

#[test]
fn sources_line_present_for_empty_list() {
    let msg = Message::assistant("x", Some(Vec::new()));
    assert_eq!(msg.sources_line().as_deref(), Some("Sources: "));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), serde_json::json!("assistant"));
    assert_eq!(Role::User.as_str(), "user");
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_preserves_insertion_order() {
    let mut t = Transcript::new();
    t.push(Message::user("one"));
    t.push(Message::assistant("two", None));
    t.push(Message::user("three"));

    let contents: Vec<&str> = t.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["one", "two", "three"]);
    assert_eq!(t.last().map(|m| m.content.as_str()), Some("three"));
}

#[test]
fn transcript_push_does_not_touch_shared_copy() {
    let mut t = Transcript::new();
    t.push(Message::user("one"));
    let published = t.clone();

    t.push(Message::assistant("two", None));

    assert_eq!(published.len(), 1);
    assert_eq!(t.len(), 2);
}
