//! Segmented control switching between dashboard tabs.

use leptos::prelude::*;

use crate::state::ui::{DashboardTab, UiState};

#[component]
pub fn TabSlider() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tab-slider" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-slider__tab"
                            class:tab-slider__tab--active=move || ui.get().active_tab == tab
                            role="tab"
                            aria-selected=move || (ui.get().active_tab == tab).to_string()
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
