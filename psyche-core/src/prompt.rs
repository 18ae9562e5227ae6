//! Prompt Context Builder — text handed to an external generator.
//!
//! The block is assembled from the persona preamble, the current summary,
//! recent memories and the persona's scalars:
//!
//! ```text
//! <preamble>
//!
//! ## Emotional state
//! <summary rendering>
//!
//! ## Recent memories
//! - (importance 55) User: ... Me: ...
//!
//! ## Consciousness
//! awareness: 80 | focus: 70 | ...
//!
//! ## Traits
//! openness: 85 | conscientiousness: 45 | ...
//! ```

use std::fmt::Write as _;

use crate::mood::EmotionalSummary;
use crate::personality::{ConsciousnessState, PersonalityMemory, PersonalityPreset, PersonalityTraits};

/// Replaces `{key}` with the corresponding value.
#[must_use]
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{key}}}"), value);
    }
    result
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_string(),
    }
}

fn join_scalars(scalars: &[(&str, f32)]) -> String {
    scalars
        .iter()
        .map(|(label, value)| format!("{label}: {value:.0}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Everything the builder reads.
#[derive(Debug, Clone, Copy)]
pub struct PromptInputs<'a> {
    /// Active persona.
    pub preset: &'a PersonalityPreset,
    /// Current summary.
    pub summary: &'a EmotionalSummary,
    /// Memories to list, newest first.
    pub memories: &'a [&'a PersonalityMemory],
    /// Current traits.
    pub traits: &'a PersonalityTraits,
    /// Current consciousness.
    pub consciousness: &'a ConsciousnessState,
    /// Per-memory character limit.
    pub snippet_chars: usize,
}

/// Assemble the prompt context block.
#[must_use]
pub fn build_context(inputs: &PromptInputs<'_>) -> String {
    let mut out = render_template(
        inputs.preset.preamble,
        &[
            ("name", inputs.preset.name),
            ("mood", inputs.summary.mood.as_str()),
        ],
    );

    let _ = write!(out, "\n\n## Emotional state\n{}\n", inputs.summary.render());

    out.push_str("\n## Recent memories\n");
    if inputs.memories.is_empty() {
        out.push_str("- none yet\n");
    }
    for memory in inputs.memories {
        let flat = memory.content.replace('\n', " ");
        let _ = writeln!(
            out,
            "- (importance {:.0}) {}",
            memory.importance,
            truncate_chars(&flat, inputs.snippet_chars)
        );
    }

    let _ = write!(
        out,
        "\n## Consciousness\n{}\n\n## Traits\n{}",
        join_scalars(&inputs.consciousness.scalars()),
        join_scalars(&inputs.traits.scalars())
    );
    out
}
