//! Reasoning timeline: turns model-generated trading rationale into an
//! ordered, classified sequence of thought steps.

pub mod config;
pub mod error;
pub mod steps;
pub mod timeline;

pub use steps::classifier::{Classification, explain_step};
pub use steps::{
    StepTally, StepType, ThoughtStep, classify_step, highlight_signals, parse_steps, split_steps,
    tally,
};
pub use timeline::{StepView, TimelineView, render_text};

// Load env from a simple, standardized location resolution.
// Loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
