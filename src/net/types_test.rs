use super::*;
use serde_json::json;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_serializes_subject_and_message() {
    let req = ChatRequest {
        subject: Some("Copper order".to_owned()),
        message: "hello".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "subject": "Copper order", "message": "hello" })
    );
}

#[test]
fn chat_request_serializes_missing_subject_as_null() {
    let req = ChatRequest { subject: None, message: "hi".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "subject": null, "message": "hi" }));
}

// =============================================================
// extract_reply
// =============================================================

#[test]
fn extract_reply_prefers_reply_field() {
    let body = json!({
        "reply": "direct",
        "choices": [{ "message": { "content": "nested" } }]
    });
    assert_eq!(extract_reply(&body), "direct");
}

#[test]
fn extract_reply_reads_openai_choice() {
    let body = json!({ "choices": [{ "message": { "role": "assistant", "content": "nested" } }] });
    assert_eq!(extract_reply(&body), "nested");
}

#[test]
fn extract_reply_ignores_non_string_reply() {
    let body = json!({ "reply": 42, "choices": [{ "message": { "content": "nested" } }] });
    assert_eq!(extract_reply(&body), "nested");
}

#[test]
fn extract_reply_dumps_unknown_shapes() {
    let body = json!({ "status": "ok" });
    assert_eq!(extract_reply(&body), r#"{"status":"ok"}"#);

    let empty_choice = json!({ "choices": [{ "message": { "content": "" } }] });
    assert_eq!(extract_reply(&empty_choice), r#"{"choices":[{"message":{"content":""}}]}"#);
}

#[test]
fn extract_reply_keeps_empty_reply_string() {
    assert_eq!(extract_reply(&json!({ "reply": "" })), "");
}

// =============================================================
// ChatError
// =============================================================

#[test]
fn server_error_embeds_status() {
    assert_eq!(ChatError::Server(500).to_string(), "Server 500");
    assert_eq!(ChatError::Server(503).display_text(), "Server 503");
}

#[test]
fn transport_error_uses_message_or_generic_text() {
    assert_eq!(ChatError::Transport("Failed to fetch".to_owned()).display_text(), "Failed to fetch");
    assert_eq!(ChatError::Transport("  ".to_owned()).display_text(), NETWORK_ERROR_TEXT);
}

#[test]
fn decode_error_mentions_invalid_response() {
    assert!(ChatError::Decode("eof".to_owned()).display_text().starts_with("invalid response"));
}
