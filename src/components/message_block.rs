//! Data-ingestion card: raw inbound message and AI-extracted fields.

use leptos::prelude::*;

use crate::state::ingestion::{FieldIcon, IngestedMessage};

fn icon_glyph(icon: FieldIcon) -> &'static str {
    match icon {
        FieldIcon::Cube => "📦",
        FieldIcon::Layers => "🧱",
        FieldIcon::PriceTag => "🏷",
        FieldIcon::Cash => "💵",
        FieldIcon::Stats => "📊",
        FieldIcon::Card => "💳",
        FieldIcon::Location => "📍",
        FieldIcon::Person => "👤",
        FieldIcon::Time => "⏱",
    }
}

/// Whether an action renders as the primary (filled) or secondary button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[component]
fn ActionButton(label: &'static str, #[prop(optional)] variant: ButtonVariant) -> impl IntoView {
    let class = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Secondary => "btn-secondary",
    };
    view! { <button class=class>{label}</button> }
}

#[component]
pub fn MessageBlock(message: IngestedMessage) -> impl IntoView {
    let rows = message.extracted.rows();

    view! {
        <div class="card-flat message-block">
            <div class="message-block__title">
                <h1>"Real-Time Data Ingestion"</h1>
                <p>"AI-powered parsing extracts structured insights from incoming messages"</p>
            </div>

            <div class="message-block__body">
                <div class="message-block__meta">
                    <div class="message-block__source">
                        <span class="source-badge">{message.source}</span>
                        <span class="message-block__sep">"•"</span>
                        <span class="message-block__time">{message.time}</span>
                    </div>
                    <span class="message-block__status">
                        <span class="message-block__status-dot"></span>
                        "Ingested"
                    </span>
                </div>

                <section>
                    <p class="message-block__section-label">"Raw Message"</p>
                    <div class="message-block__raw">{message.raw_message}</div>
                </section>

                <section>
                    <p class="message-block__section-label">"AI-Extracted Intelligence"</p>
                    <div class="message-block__grid">
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="field" class:field--highlight=row.highlight>
                                        <span class="field__icon" aria-hidden="true">{icon_glyph(row.icon)}</span>
                                        <div>
                                            <p class="field__label">{row.label}</p>
                                            <p class="field__value">{row.value}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <div class="message-block__actions">
                    <ActionButton label="View in CRM"/>
                    <ActionButton label="Create Deal"/>
                    <ActionButton label="Generate Quote" variant=ButtonVariant::Secondary/>
                </div>
            </div>
        </div>
    }
}
