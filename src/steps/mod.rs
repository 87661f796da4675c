//! Thought steps: splitting model rationale into steps, classifying them,
//! and highlighting trading signals inside them.

pub mod classifier;
pub mod highlighter;
pub mod splitter;

use serde::{Deserialize, Serialize};

pub use classifier::classify_step;
pub use highlighter::highlight_signals;
pub use splitter::split_steps;

/// Rhetorical role of a thought step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Bullish,
    Bearish,
    Warning,
    Conclusion,
    Neutral,
}

impl StepType {
    pub const ALL: [StepType; 5] = [
        StepType::Bullish,
        StepType::Bearish,
        StepType::Warning,
        StepType::Conclusion,
        StepType::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Bullish => "bullish",
            StepType::Bearish => "bearish",
            StepType::Warning => "warning",
            StepType::Conclusion => "conclusion",
            StepType::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepType::Bullish => "Bullish",
            StepType::Bearish => "Bearish",
            StepType::Warning => "Warning",
            StepType::Conclusion => "Conclusion",
            StepType::Neutral => "Analysis",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StepType::Bullish => "📈",
            StepType::Bearish => "📉",
            StepType::Warning => "⚠️",
            StepType::Conclusion => "🎯",
            StepType::Neutral => "💭",
        }
    }
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified segment of rationale text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtStep {
    pub text: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
}

impl ThoughtStep {
    /// Build a step from already-split text, classifying it immediately
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let step_type = classify_step(&text);
        Self { text, step_type }
    }
}

/// Split `text` into steps and classify each one.
pub fn parse_steps(text: &str) -> Vec<ThoughtStep> {
    let steps: Vec<ThoughtStep> = split_steps(text).into_iter().map(ThoughtStep::new).collect();
    tracing::trace!(steps = steps.len(), "parsed thought steps");
    steps
}

/// Per-category counts over a step sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepTally {
    pub bullish: usize,
    pub bearish: usize,
    pub warning: usize,
    pub conclusion: usize,
    pub neutral: usize,
    pub total: usize,
}

impl StepTally {
    pub fn count(&self, step_type: StepType) -> usize {
        match step_type {
            StepType::Bullish => self.bullish,
            StepType::Bearish => self.bearish,
            StepType::Warning => self.warning,
            StepType::Conclusion => self.conclusion,
            StepType::Neutral => self.neutral,
        }
    }
}

pub fn tally(steps: &[ThoughtStep]) -> StepTally {
    let mut t = StepTally::default();
    for step in steps {
        match step.step_type {
            StepType::Bullish => t.bullish += 1,
            StepType::Bearish => t.bearish += 1,
            StepType::Warning => t.warning += 1,
            StepType::Conclusion => t.conclusion += 1,
            StepType::Neutral => t.neutral += 1,
        }
        t.total += 1;
    }
    t
}
