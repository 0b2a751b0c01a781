use super::*;

#[test]
fn greeting_addresses_user_by_display_name() {
    let state = ChatState::greeting("Bintein Nicolas");
    assert_eq!(state.messages.len(), 1);
    assert!(!state.messages[0].sent);
    assert_eq!(state.messages[0].text, "Bonjour Bintein Nicolas, comment puis-je t'aider ?");
}

#[test]
fn blank_input_is_not_sent() {
    let mut state = ChatState::default();
    assert_eq!(state.push_outgoing("   "), None);
    assert!(state.messages.is_empty());
    assert!(!state.pending);
}

#[test]
fn outgoing_message_is_appended_before_reply() {
    let mut state = ChatState::default();
    assert_eq!(state.push_outgoing(" Qui a rendez-vous demain ? "), Some("Qui a rendez-vous demain ?".to_owned()));
    assert!(state.pending);
    assert_eq!(state.messages.last().map(|m| m.sent), Some(true));
}

#[test]
fn second_message_waits_for_reply() {
    let mut state = ChatState::default();
    state.push_outgoing("un");
    assert_eq!(state.push_outgoing("deux"), None);
    state.push_reply(Ok("réponse".to_owned()));
    assert_eq!(state.push_outgoing("deux"), Some("deux".to_owned()));
}

#[test]
fn failed_reply_uses_fallback_and_sets_error() {
    let mut state = ChatState::default();
    state.push_outgoing("bonjour");
    state.push_reply(Err("HTTP 500: request failed".to_owned()));
    let last = state.messages.last().unwrap();
    assert_eq!(last.text, FALLBACK_REPLY);
    assert!(!last.sent);
    assert_eq!(state.error.as_deref(), Some("Erreur : HTTP 500: request failed"));
    assert!(!state.pending);
}

#[test]
fn successful_reply_clears_previous_error() {
    let mut state = ChatState { error: Some("old".to_owned()), ..ChatState::default() };
    state.push_outgoing("q");
    state.push_reply(Ok("a".to_owned()));
    assert_eq!(state.error, None);
}

#[test]
fn history_keeps_last_ten_messages() {
    let mut state = ChatState::greeting("Admin");
    for i in 0..8 {
        state.push_outgoing(&format!("question {i}"));
        state.push_reply(Ok(format!("réponse {i}")));
    }
    assert_eq!(state.messages.len(), MAX_CHAT_MESSAGES);
    assert_eq!(state.messages.last().unwrap().text, "réponse 7");
    assert_eq!(state.messages.first().unwrap().text, "question 3");
}

#[test]
fn message_text_is_kept_verbatim() {
    let mut state = ChatState::default();
    state.push_outgoing("<b>hi</b>");
    assert_eq!(state.messages[0].text, "<b>hi</b>");
}

#[test]
fn dismissing_error_keeps_conversation() {
    let mut state = ChatState::greeting("Bintein Nicolas");
    state.push_outgoing("Bonjour");
    state.push_reply(Err("service indisponible".to_owned()));
    assert!(state.error.is_some());

    state.dismiss_error();
    assert_eq!(state.error, None);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].text, FALLBACK_REPLY);
}
