use super::*;

fn note(id: u32, is_read: bool) -> Notification {
    Notification {
        id,
        kind: NotificationKind::Info,
        title: format!("title {id}"),
        message: "message".to_owned(),
        time: "now".to_owned(),
        icon: "i".to_owned(),
        is_read,
    }
}

// =============================================================
// seed parsing
// =============================================================

#[test]
fn bundled_seed_parses() {
    let state = NotificationsState::seeded();
    assert!(!state.items.is_empty());
    assert!(!state.open);
    assert!(state.has_unread());
}

#[test]
fn parse_seed_reads_camel_case_fields() {
    let items = parse_seed(
        r#"[{"id":7,"type":"warning","title":"T","message":"M","time":"1m","icon":"!","isRead":true}]"#,
    );
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 7);
    assert_eq!(items[0].kind, NotificationKind::Warning);
    assert!(items[0].is_read);
}

#[test]
fn parse_seed_defaults_missing_read_flag_and_unknown_kind() {
    let items = parse_seed(r#"[{"id":1,"type":"alert","title":"T","message":"M","time":"1m","icon":"?"}]"#);
    assert_eq!(items[0].kind, NotificationKind::Other);
    assert!(!items[0].is_read);
}

#[test]
fn parse_seed_tolerates_garbage() {
    assert!(parse_seed("not json").is_empty());
}

// =============================================================
// counters
// =============================================================

#[test]
fn badge_label_caps_at_nine_plus() {
    let mut state = NotificationsState::new((1..=12).map(|id| note(id, false)).collect());
    assert_eq!(state.badge_label().as_deref(), Some("9+"));

    state.items.truncate(3);
    assert_eq!(state.badge_label().as_deref(), Some("3"));

    state.mark_all_read();
    assert_eq!(state.badge_label(), None);
}

#[test]
fn unread_summary_pluralizes() {
    let mut state = NotificationsState::new(vec![note(1, false), note(2, false)]);
    assert_eq!(state.unread_summary().as_deref(), Some("2 unread notifications"));
    state.mark_read(1);
    assert_eq!(state.unread_summary().as_deref(), Some("1 unread notification"));
    state.mark_read(2);
    assert_eq!(state.unread_summary(), None);
}

// =============================================================
// actions
// =============================================================

#[test]
fn mark_read_only_touches_matching_id() {
    let mut state = NotificationsState::new(vec![note(1, false), note(2, false)]);
    state.mark_read(2);
    assert!(!state.items[0].is_read);
    assert!(state.items[1].is_read);
    state.mark_read(99);
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn delete_removes_single_entry() {
    let mut state = NotificationsState::new(vec![note(1, false), note(2, true)]);
    state.delete(1);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
    assert!(!state.has_unread());
}

#[test]
fn clear_all_empties_and_closes() {
    let mut state = NotificationsState::new(vec![note(1, false)]);
    state.toggle_open();
    assert!(state.open);
    state.clear_all();
    assert!(state.items.is_empty());
    assert!(!state.open);
}

#[test]
fn toggle_and_close() {
    let mut state = NotificationsState::default();
    state.toggle_open();
    state.toggle_open();
    assert!(!state.open);
    state.toggle_open();
    state.close();
    assert!(!state.open);
}

#[test]
fn accent_class_per_kind() {
    assert_eq!(NotificationKind::Success.accent_class(), "notification__icon--success");
    assert_eq!(NotificationKind::Other.accent_class(), "notification__icon--neutral");
}
