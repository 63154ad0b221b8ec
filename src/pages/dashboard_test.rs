use super::*;
use crate::util::badge::classify_change;

#[test]
fn stat_card_tones_agree_with_their_delta_text() {
    for card in STAT_CARDS {
        match card.delta {
            Some(delta) => assert_eq!(classify_change(delta).tone, card.tone, "{}", card.label),
            None => assert_eq!(card.tone, DeltaTone::Neutral),
        }
    }
}

#[test]
fn opportunity_names_are_unique_chat_subjects() {
    let mut names: Vec<_> = OPPORTUNITIES.iter().map(|o| o.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), OPPORTUNITIES.len());
}

#[test]
fn ask_ai_opens_chat_about_the_opportunity() {
    let mut ui = UiState::default();
    ui.open_chat(Some(OPPORTUNITIES[1].name.to_owned()));
    assert!(ui.chat_open);
    assert_eq!(ui.chat_subject.as_deref(), Some("HR Steel Coil Spot Order"));
}

#[test]
fn duration_metric_renders_without_arrow() {
    let (_, _, change) = INGESTION_METRICS[3];
    let badge = classify_change(change);
    assert!(badge.is_duration);
    assert!(!badge.show_arrow());
}
