use super::*;

#[test]
fn chat_endpoint_is_relative_api_path() {
    assert_eq!(CHAT_ENDPOINT, "/api/chat");
}

#[test]
fn status_error_passes_success() {
    assert_eq!(status_error(true, 200), Ok(()));
}

#[test]
fn status_error_surfaces_status_code() {
    let err = status_error(false, 500).unwrap_err();
    assert_eq!(err, ChatError::Server(500));
    assert!(err.display_text().contains("Server 500"));
}

#[test]
fn transport_error_keeps_message() {
    assert_eq!(
        transport_error("TypeError: Failed to fetch"),
        ChatError::Transport("TypeError: Failed to fetch".to_owned())
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn post_chat_is_unavailable_outside_browser() {
    let request = ChatRequest { subject: None, message: "hello".to_owned() };
    let result = futures::executor::block_on(post_chat(&request));
    assert_eq!(result, Err(ChatError::Unavailable));
}
