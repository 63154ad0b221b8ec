use super::*;

#[test]
fn small_screen_query_targets_phone_width() {
    assert_eq!(SMALL_SCREEN_QUERY, "(max-width: 640px)");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_build_reports_desktop_layout() {
    assert!(!matches_media(SMALL_SCREEN_QUERY));
    assert!(!is_small_screen());
}
