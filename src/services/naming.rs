//! Canonical form of team names, used both as identity and for display.

/// Trim, collapse inner whitespace to single spaces and capitalize every word
/// (first letter upper case, the rest lower case).
///
/// Blank input yields an empty string; callers reject blank names beforehand.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    // Keep the letter as is when its upper case spans several chars (`ß` -> `SS`),
    // otherwise a second pass would lower-case the tail of the expansion.
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(head).chain(chars).collect()
}
