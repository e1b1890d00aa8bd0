//! The slug pipeline: trim, case fold, whitespace substitution,
//! character substitution and truncation, always in that order.

use crate::config::{Case, Config};

/// How runs of offending characters are replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// A maximal run becomes a single symbol
    Collapse,
    /// Every offending character gets its own symbol
    Preserve,
}

impl Policy {
    pub fn for_config(config: &Config) -> Self {
        if config.preserve_length {
            Policy::Preserve
        } else {
            Policy::Collapse
        }
    }
}

/// Whether `ch` may appear in a slug: `a-z`, `0-9`, `.`, `-`, `_` or `~`
pub fn is_slug_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '.' | '-' | '_' | '~')
}

/// Whitespace class replaced by the space symbol: space, tab, LF, FF and CR
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

fn is_disallowed(ch: char) -> bool {
    !is_slug_char(ch)
}

/// Run the full pipeline over `text`
pub fn transform(text: &str, config: &Config) -> String {
    let policy = Policy::for_config(config);

    let trimmed = if config.trims() { text.trim() } else { text };
    let folded = fold_case(trimmed, config.case);
    let spaced = substitute(&folded, is_space, &config.space_symbol, policy);
    let cleaned = substitute(&spaced, is_disallowed, &config.char_symbol, policy);
    let slug = truncate(cleaned, config.max_length);

    tracing::trace!(
        input_len = text.len(),
        output_len = slug.len(),
        ?policy,
        "slug generated"
    );

    slug
}

/// Fold each char to exactly one char, so the stage never changes length.
fn fold_case(text: &str, case: Case) -> String {
    match case {
        Case::Default => text.to_string(),
        Case::Lowercase => text.chars().map(|ch| fold_char(ch, ch.to_lowercase())).collect(),
        Case::Uppercase => text.chars().map(|ch| fold_char(ch, ch.to_uppercase())).collect(),
    }
}

/// Take a single-char mapping as is. Of the multi-char mappings only `İ`
/// keeps its leading char (`i`); anything else such as `ß` stays unchanged.
fn fold_char(ch: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(folded), None) => folded,
        (Some(folded), Some(_)) if ch == '\u{130}' => folded,
        _ => ch,
    }
}

/// Replace characters matching `offending` with `symbol` in a single pass.
///
/// Under [`Policy::Collapse`] consecutive matches share one symbol; under
/// [`Policy::Preserve`] each match is replaced on its own.
pub fn substitute(
    text: &str,
    offending: impl Fn(char) -> bool,
    symbol: &str,
    policy: Policy,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if !offending(ch) {
            out.push(ch);
            in_run = false;
            continue;
        }
        if policy == Policy::Preserve || !in_run {
            out.push_str(symbol);
        }
        in_run = true;
    }

    out
}

/// Keep the first `max_length` chars of `text`; 0 means no limit.
///
/// Counts Unicode scalar values, so a multi-byte symbol is never split.
/// Once the pipeline has run this is byte length whenever the symbols are ASCII.
pub fn truncate(mut text: String, max_length: usize) -> String {
    if max_length == 0 {
        return text;
    }
    if let Some((cut, _)) = text.char_indices().nth(max_length) {
        text.truncate(cut);
    }
    text
}
