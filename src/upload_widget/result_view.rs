use crate::upload_widget::core::Outcome;

const DEFAULT_EMOJI: &str = "🐾";

const EMOJIS: [(&str, &str); 10] = [
    ("cat", "🐱"),
    ("dog", "🐶"),
    ("horse", "🐴"),
    ("sheep", "🐑"),
    ("cow", "🐄"),
    ("elephant", "🐘"),
    ("butterfly", "🦋"),
    ("chicken", "🐔"),
    ("spider", "🕷️"),
    ("squirrel", "🐿️"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub id: u64,
    pub label: String,
    pub emoji: &'static str,
    pub confidence_text: String,
    /// Where the meter currently points, `0..=100`.
    pub meter_percent: f32,
}

impl ResultView {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            id: outcome.id,
            label: outcome.prediction.label.clone(),
            emoji: label_emoji(&outcome.prediction.label),
            confidence_text: format_confidence(outcome.prediction.confidence),
            meter_percent: outcome.meter_percent,
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

pub fn label_emoji(label: &str) -> &'static str {
    let label = label.trim().to_lowercase();
    EMOJIS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_EMOJI)
}

pub fn format_confidence(confidence: Option<f32>) -> String {
    match confidence {
        Some(c) if c.fract() == 0.0 => format!("{:.0}%", c),
        Some(c) => format!("{:.1}%", c),
        None => "n/a".to_string(),
    }
}
