//! Headless timeline presenter
//!
//! Holds the classified steps plus the transient view state of the reasoning
//! timeline: whether the list is expanded past `initial_visible_steps`, and
//! which long steps have been expanded past the truncation limit.

use crate::config::PresenterConfig;
use crate::steps::{StepType, ThoughtStep, highlight_signals};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Render-ready projection of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView<'a> {
    pub index: usize,
    pub step_type: StepType,
    pub body: Cow<'a, str>,
    pub truncated: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone)]
pub struct TimelineView {
    steps: Vec<ThoughtStep>,
    initial_visible_steps: usize,
    truncate_chars: usize,
    is_expanded: bool,
    expanded_steps: BTreeSet<usize>,
}

impl TimelineView {
    pub fn new(steps: Vec<ThoughtStep>, config: &PresenterConfig) -> Self {
        Self {
            steps,
            initial_visible_steps: config.initial_visible_steps.max(1),
            truncate_chars: config.truncate_chars.max(1),
            is_expanded: false,
            expanded_steps: BTreeSet::new(),
        }
    }

    pub fn steps(&self) -> &[ThoughtStep] {
        &self.steps
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// True when there are more steps than fit before the collapse control
    pub fn has_more(&self) -> bool {
        self.steps.len() > self.initial_visible_steps
    }

    /// Steps currently hidden behind the collapse control
    pub fn hidden_count(&self) -> usize {
        if self.is_expanded {
            0
        } else {
            self.steps.len().saturating_sub(self.initial_visible_steps)
        }
    }

    /// Flip collapsed/expanded and return the new state
    pub fn toggle_expanded(&mut self) -> bool {
        self.is_expanded = !self.is_expanded;
        self.is_expanded
    }

    /// Expand the list and every truncatable step
    pub fn expand_all(&mut self) {
        self.is_expanded = true;
        for (index, step) in self.steps.iter().enumerate() {
            if self.is_truncatable(step) {
                self.expanded_steps.insert(index);
            }
        }
    }

    /// Flip one long step between truncated and full. Returns false for an
    /// index out of range or a step short enough to never truncate.
    pub fn toggle_step(&mut self, index: usize) -> bool {
        let Some(step) = self.steps.get(index) else {
            return false;
        };
        if !self.is_truncatable(step) {
            return false;
        }
        if !self.expanded_steps.remove(&index) {
            self.expanded_steps.insert(index);
        }
        true
    }

    pub fn is_step_expanded(&self, index: usize) -> bool {
        self.expanded_steps.contains(&index)
    }

    pub fn visible_steps(&self) -> Vec<StepView<'_>> {
        let limit = if self.is_expanded {
            self.steps.len()
        } else {
            self.initial_visible_steps
        };

        self.steps
            .iter()
            .enumerate()
            .take(limit)
            .map(|(index, step)| self.project(index, step))
            .collect()
    }

    fn is_truncatable(&self, step: &ThoughtStep) -> bool {
        step.text.chars().count() > self.truncate_chars
    }

    fn project<'a>(&self, index: usize, step: &'a ThoughtStep) -> StepView<'a> {
        let expanded = self.expanded_steps.contains(&index);
        let (body, truncated) = if self.is_truncatable(step) && !expanded {
            (Cow::Owned(truncate_chars(&step.text, self.truncate_chars)), true)
        } else {
            (Cow::Borrowed(step.text.as_str()), false)
        };
        StepView {
            index,
            step_type: step.step_type,
            body,
            truncated,
            expanded,
        }
    }
}

/// Keep the first `limit` characters and append an ellipsis. Never splits a char.
fn truncate_chars(text: &str, limit: usize) -> String {
    let cut = text
        .char_indices()
        .nth(limit)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len());
    let mut out = text[..cut].trim_end().to_string();
    out.push_str("...");
    out
}

/// Plain-text rendering of the visible part of a timeline
pub fn render_text(view: &TimelineView, highlight: bool) -> String {
    let mut out = String::new();

    if view.steps().is_empty() {
        out.push_str("No reasoning steps.\n");
        return out;
    }

    for step in view.visible_steps() {
        let _ = writeln!(
            out,
            "{} {}. {}",
            step.step_type.icon(),
            step.index + 1,
            step.step_type.label()
        );
        let body = if highlight {
            Cow::Owned(highlight_signals(&step.body))
        } else {
            step.body
        };
        for line in body.lines() {
            let _ = writeln!(out, "   {}", line);
        }
        if step.truncated {
            out.push_str("   (truncated)\n");
        }
        out.push('\n');
    }

    let hidden = view.hidden_count();
    if hidden > 0 {
        let noun = if hidden == 1 { "step" } else { "steps" };
        let _ = writeln!(out, "+ {} more {}", hidden, noun);
    }

    out
}
