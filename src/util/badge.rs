//! Delta badge classification for stat and metric cards.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

/// Direction of a card's change indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaTone {
    Up,
    Down,
    #[default]
    Neutral,
}

impl DeltaTone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Up => "badge-success",
            Self::Down => "badge-danger",
            Self::Neutral => "badge-neutral",
        }
    }
}

/// How a free-form change string should be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeBadge {
    /// Trimmed change text; the badge is hidden when empty.
    pub text: String,
    pub tone: DeltaTone,
    /// Durations ("12 days") are neither good nor bad and get no arrow.
    pub is_duration: bool,
}

impl ChangeBadge {
    pub fn visible(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn show_arrow(&self) -> bool {
        !self.is_duration && self.tone != DeltaTone::Neutral
    }

    /// Full class list for the badge element.
    pub fn class_list(&self) -> String {
        if self.is_duration {
            format!("badge {} badge-duration", self.tone.badge_class())
        } else {
            format!("badge {}", self.tone.badge_class())
        }
    }
}

fn is_day_word(word: &str) -> bool {
    matches!(word, "d" | "day" | "days")
}

/// Whether `lower` mentions a day count (`12 days`, `3d`) or a bare day word.
fn looks_like_duration(lower: &str) -> bool {
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    words.iter().any(|word| {
        if is_day_word(word) {
            return true;
        }
        // "3d" / "14days" written without a space.
        let unit = word.trim_start_matches(|c: char| c.is_ascii_digit());
        unit.len() < word.len() && is_day_word(unit)
    })
}

/// Classify a metric card's change text (`+12%`, `-3 days`, `trending up`).
pub fn classify_change(raw: &str) -> ChangeBadge {
    let text = raw.trim().to_owned();
    let lower = text.to_lowercase();

    let is_duration = looks_like_duration(&lower);
    let is_positive = text.starts_with('+') || lower.contains(" up") || lower.contains('↑');
    let is_negative = text.starts_with('-') && !is_duration;

    let tone = if is_negative {
        DeltaTone::Down
    } else if is_positive {
        DeltaTone::Up
    } else {
        DeltaTone::Neutral
    };

    ChangeBadge { text, tone, is_duration }
}
