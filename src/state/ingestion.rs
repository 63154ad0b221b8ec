//! Ingested inbound messages and their AI-extracted fields.

#[cfg(test)]
#[path = "ingestion_test.rs"]
mod ingestion_test;

use serde::{Deserialize, Serialize};

/// Structured fields pulled out of a raw message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub product: String,
    pub quantity: String,
    pub price: Option<String>,
    pub cash_flow: String,
    pub working_capital: String,
    pub payment_terms: Option<String>,
    pub location: String,
    pub customer: String,
    pub urgency: String,
}

/// Icon slot for an extracted field row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIcon {
    Cube,
    Layers,
    PriceTag,
    Cash,
    Stats,
    Card,
    Location,
    Person,
    Time,
}

/// One rendered row of the extracted-intelligence grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
    pub icon: FieldIcon,
    pub highlight: bool,
}

impl FieldRow {
    fn new(label: &'static str, value: &str, icon: FieldIcon) -> Self {
        Self { label, value: value.to_owned(), icon, highlight: false }
    }
}

impl ExtractedFields {
    /// Rows in display priority order; absent optional fields are skipped.
    pub fn rows(&self) -> Vec<FieldRow> {
        let mut rows = vec![
            FieldRow::new("Product", &self.product, FieldIcon::Cube),
            FieldRow::new("Quantity", &self.quantity, FieldIcon::Layers),
        ];
        if let Some(price) = self.price.as_deref().filter(|p| !p.is_empty()) {
            rows.push(FieldRow::new("Price", price, FieldIcon::PriceTag));
        }
        rows.push(FieldRow::new("Cash Flow Impact", &self.cash_flow, FieldIcon::Cash));
        rows.push(FieldRow::new("Working Capital", &self.working_capital, FieldIcon::Stats));
        if let Some(terms) = self.payment_terms.as_deref().filter(|t| !t.is_empty()) {
            rows.push(FieldRow::new("Payment Terms", terms, FieldIcon::Card));
        }
        rows.push(FieldRow::new("Location", &self.location, FieldIcon::Location));
        rows.push(FieldRow::new("Customer", &self.customer, FieldIcon::Person));
        rows.push(FieldRow {
            highlight: true,
            ..FieldRow::new("Urgency", &self.urgency, FieldIcon::Time)
        });
        rows
    }
}

/// A raw inbound message with its extraction result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedMessage {
    /// Channel the message arrived on ("WhatsApp", "Email", ...).
    pub source: String,
    pub time: String,
    pub raw_message: String,
    pub extracted: ExtractedFields,
}

/// Message shown on the data-ingestion tab.
pub fn sample_message() -> IngestedMessage {
    IngestedMessage {
        source: "WhatsApp".to_owned(),
        time: "04:12 PM".to_owned(),
        raw_message: "Hi, need 60 tons HR steel coil delivered to Pune plant by next Friday. \
                      Can do $1,390/t if you hold Net 45. Urgent, line is waiting. - Rakesh, Delta Fabrication"
            .to_owned(),
        extracted: ExtractedFields {
            product: "HR Steel Coil".to_owned(),
            quantity: "60 t".to_owned(),
            price: Some("$1,390 / t".to_owned()),
            cash_flow: "+$83.4k receivable".to_owned(),
            working_capital: "45-day exposure".to_owned(),
            payment_terms: Some("Net 45".to_owned()),
            location: "Pune, IN".to_owned(),
            customer: "Delta Fabrication".to_owned(),
            urgency: "High, delivery in 7 days".to_owned(),
        },
    }
}
