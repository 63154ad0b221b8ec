//! Headline stat card with an optional delta badge.

use leptos::prelude::*;

use crate::util::badge::DeltaTone;

/// Content of a stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCardData {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: Option<&'static str>,
    pub tone: DeltaTone,
}

/// Label, value, and a colored delta badge on the right of the header row.
#[component]
pub fn StatCard(card: StatCardData) -> impl IntoView {
    view! {
        <article class="card stat-card" aria-label=format!("Stat card: {}", card.label)>
            <div class="card-header">
                <p class="stat-card-label">{card.label}</p>
                {card
                    .delta
                    .map(|delta| {
                        view! {
                            <div class=format!("badge {}", card.tone.badge_class()) title=format!("Change: {delta}")>
                                <span>{delta}</span>
                            </div>
                        }
                    })}
            </div>
            <div class="stat-value">
                <p>{card.value}</p>
            </div>
        </article>
    }
}
