//! Dashboard page with the Overview and Data Ingestion tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Owns the small-screen tracking that drives the chart
//! height and hosts the chat modal opened from the opportunity list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::chart_section::ChartSection;
use crate::components::chat_modal::ChatModal;
use crate::components::header::Header;
use crate::components::message_block::MessageBlock;
use crate::components::metric_card::MetricCard;
use crate::components::stat_card::{StatCard, StatCardData};
use crate::components::tab_slider::TabSlider;
use crate::state::ingestion::sample_message;
use crate::state::ui::{DashboardTab, UiState};
use crate::util::badge::DeltaTone;
use crate::util::viewport;

const STAT_CARDS: [StatCardData; 4] = [
    StatCardData { label: "Pipeline Value", value: "$4.82M", delta: Some("+12.4%"), tone: DeltaTone::Up },
    StatCardData { label: "Open Deals", value: "38", delta: Some("+5"), tone: DeltaTone::Up },
    StatCardData { label: "Avg. Margin", value: "14.2%", delta: Some("-0.8%"), tone: DeltaTone::Down },
    StatCardData { label: "Days Sales Outstanding", value: "41", delta: None, tone: DeltaTone::Neutral },
];

/// An open deal that can be discussed in the chat modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Opportunity {
    name: &'static str,
    customer: &'static str,
    value: &'static str,
    stage: &'static str,
}

const OPPORTUNITIES: [Opportunity; 3] = [
    Opportunity { name: "Copper Cathode Q3 Supply", customer: "Nordic Cable Works", value: "$1.24M", stage: "Negotiation" },
    Opportunity { name: "HR Steel Coil Spot Order", customer: "Delta Fabrication", value: "$83.4k", stage: "Quote" },
    Opportunity { name: "Aluminium Billet Contract", customer: "Apex Extrusions", value: "$612k", stage: "Discovery" },
];

/// Metric cards on the Data Ingestion tab: `(title, value, change)`.
const INGESTION_METRICS: [(&str, &str, &str); 4] = [
    ("Messages Processed", "1,284", "+18%"),
    ("Extraction Accuracy", "97.6%", "+0.4%"),
    ("Avg. Response Time", "2.3s", "-12%"),
    ("Quote Turnaround", "3 days", "3 days"),
];

#[component]
fn OverviewTab() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="overview">
            <div class="stat-grid">
                {STAT_CARDS.into_iter().map(|card| view! { <StatCard card=card/> }).collect_view()}
            </div>
            <ChartSection/>
            <div class="card-flat opportunities">
                <h2>"Top Opportunities"</h2>
                <ul class="opportunities__list">
                    {OPPORTUNITIES
                        .into_iter()
                        .map(|opp| {
                            view! {
                                <li class="opportunity">
                                    <div class="opportunity__info">
                                        <p class="opportunity__name">{opp.name}</p>
                                        <p class="opportunity__meta">{format!("{} • {}", opp.customer, opp.stage)}</p>
                                    </div>
                                    <span class="opportunity__value">{opp.value}</span>
                                    <button
                                        class="btn-primary opportunity__ask"
                                        on:click=move |_| ui.update(|u| u.open_chat(Some(opp.name.to_owned())))
                                    >
                                        "Ask AI"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn DataIngestionTab() -> impl IntoView {
    view! {
        <div class="data-ingestion">
            <div class="metric-grid">
                {INGESTION_METRICS
                    .into_iter()
                    .map(|(title, value, change)| view! { <MetricCard title=title value=value change=change/> })
                    .collect_view()}
            </div>
            <MessageBlock message=sample_message()/>
        </div>
    }
}

/// Dashboard page: header, tab slider, active tab content, chat modal.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    ui.update(|u| u.small_screen = viewport::is_small_screen());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let small = viewport::is_small_screen();
            if ui.get_untracked().small_screen != small {
                ui.update(|u| u.small_screen = small);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let active_tab = Memo::new(move |_| ui.get().active_tab);
    let content = move || match active_tab.get() {
        DashboardTab::Overview => view! { <OverviewTab/> }.into_any(),
        DashboardTab::DataIngestion => view! { <DataIngestionTab/> }.into_any(),
    };

    view! {
        <div class="dashboard">
            <Header/>
            <main class="dashboard__main">
                <TabSlider/>
                <div class="dashboard__content">{content}</div>
            </main>
            <ChatModal/>
        </div>
    }
}
