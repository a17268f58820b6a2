//! Synopsis truncation for the suggestion card.
//!
//! Lengths are counted in characters, never bytes.

pub const DEFAULT_MAX_LINES: usize = 4;
pub const DEFAULT_CHARS_PER_LINE: usize = 100;

const ELLIPSIS: &str = "...";

/// Truncate with the default 4 lines of 100 characters.
pub fn truncate_overview(text: &str) -> String {
    truncate_lines(text, DEFAULT_MAX_LINES, DEFAULT_CHARS_PER_LINE)
}

/// Fit `text` into `max_lines * chars_per_line` characters.
///
/// Prefers ending on the last sentence mark (`.`, `!`, `?`) when it sits past
/// 70% of the budget; otherwise cuts at the last space and appends `...`.
pub fn truncate_lines(text: &str, max_lines: usize, chars_per_line: usize) -> String {
    let budget = max_lines.saturating_mul(chars_per_line);
    if text.chars().count() <= budget {
        return text.to_string();
    }

    let prefix: Vec<char> = text.chars().take(budget).collect();

    if let Some(idx) = prefix.iter().rposition(|c| matches!(c, '.' | '!' | '?')) {
        // idx > 0.7 * budget, kept in integers
        if idx * 10 > budget * 7 {
            return prefix[..=idx].iter().collect();
        }
    }

    let cut = match prefix.iter().rposition(|&c| c == ' ') {
        Some(space) if space > 0 => space,
        _ => prefix.len(),
    };
    let mut out: String = prefix[..cut].iter().collect();
    out.push_str(ELLIPSIS);
    out
}
