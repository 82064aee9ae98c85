//! Pure text refinement for generated messages.
//!
//! Generation backends habitually prepend chat filler ("Sure, here's...",
//! "As an AI...") and wrap output in markdown fences. This module strips
//! that boilerplate and normalizes paragraph breaks before the message
//! reaches deduplication and publishing. It is deliberately outside the
//! pipeline's control flow: a plain function over strings.

use regex::Regex;
use std::sync::OnceLock;

static BOILERPLATE: OnceLock<Vec<Regex>> = OnceLock::new();
static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();

fn boilerplate_patterns() -> &'static Vec<Regex> {
    BOILERPLATE.get_or_init(|| {
        [
            // Chat lead-ins the generation backends like to prepend.
            r"(?i)^(sure|certainly|of course|absolutely)[,!.]?\s+(here('|’)s|here is)[^:\n]*[:.]\s*",
            r"(?i)^here('|’)s (a|an|the|your)[^:\n]*[:.]\s*",
            r"(?i)^as an ai( language model)?[^.\n]*\.\s*",
            r"(?i)^i('|’)d be happy to[^.\n]*\.\s*",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid boilerplate regex"))
        .collect()
    })
}

fn blank_runs() -> &'static Regex {
    BLANK_RUNS.get_or_init(|| Regex::new(r"\n{3,}").expect("valid blank-run regex"))
}

/// Strip generation boilerplate and normalize whitespace.
///
/// - removes surrounding markdown code fences and quote marks
/// - drops known chat lead-ins from the start of the message
/// - collapses runs of three or more newlines to a single paragraph break
/// - trims leading and trailing whitespace
///
/// The transform is idempotent: refining an already-refined message is a
/// no-op.
///
/// # Examples
///
/// ```
/// use griot_core::refine_message;
///
/// let raw = "Sure, here's a post: Jollof rice unites and divides West Africa.";
/// assert_eq!(
///     refine_message(raw),
///     "Jollof rice unites and divides West Africa."
/// );
/// ```
pub fn refine_message(raw: &str) -> String {
    let mut text = raw.trim();

    // Unwrap a fenced or fully-quoted message.
    if text.starts_with("```") && text.ends_with("```") && text.len() >= 6 {
        text = text[3..text.len() - 3].trim();
        // A fence may carry a language tag on its opening line.
        if let Some((first, rest)) = text.split_once('\n') {
            if !first.contains(' ') && first.len() < 16 {
                text = rest.trim();
            }
        }
    }
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text = text[1..text.len() - 1].trim();
    }

    let mut message = text.to_string();
    for pattern in boilerplate_patterns() {
        message = pattern.replace(&message, "").into_owned();
    }

    let message = blank_runs().replace_all(&message, "\n\n");
    message.trim().to_string()
}

/// Derive the image style hint from a generated message.
///
/// The hint is the first `max_chars` characters of the text, cut on a char
/// boundary, mirroring the original page bot's behavior of seeding image
/// prompts from the opening of the post.
///
/// # Examples
///
/// ```
/// use griot_core::style_hint;
///
/// assert_eq!(style_hint("short", 50), "short");
/// assert_eq!(style_hint("abcdef", 3), "abc");
/// ```
pub fn style_hint(message: &str, max_chars: usize) -> &str {
    match message.char_indices().nth(max_chars) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}
