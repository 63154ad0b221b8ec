//! Metric card whose badge tone is inferred from free-form change text.

use leptos::prelude::*;

use crate::util::badge::{DeltaTone, classify_change};

/// Title, value, and a change badge (`+4%`, `-2.1%`, `12 days`).
#[component]
pub fn MetricCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into, optional)] change: String,
) -> impl IntoView {
    let badge = classify_change(&change);
    let aria = format!("Metric: {title}");

    let badge_view = badge.visible().then(|| {
        let arrow = badge.show_arrow().then(|| {
            let glyph = if badge.tone == DeltaTone::Down { "↓" } else { "↑" };
            view! { <span class="badge__arrow" aria-hidden="true">{glyph}</span> }
        });
        view! {
            <div class=badge.class_list() title=badge.text.clone()>
                {arrow}
                <span>{badge.text.clone()}</span>
            </div>
        }
    });

    view! {
        <article class="card metric-card" aria-label=aria>
            <div class="card-header">
                <p class="stat-card-label">{title}</p>
                {badge_view}
            </div>
            <div class="stat-value">
                <p>{value}</p>
            </div>
        </article>
    }
}
