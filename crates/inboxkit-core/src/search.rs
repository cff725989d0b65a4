//! Search folding shared by every list screen.
//!
//! Matching is a plain substring test on lowercase-folded text:
//! - no tokenization, no fuzzy matching
//! - a blank query disables the search step entirely

/// Lowercase-fold text for matching.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Normalize a raw search box value into a folded needle.
///
/// Returns `None` for empty or whitespace-only input, meaning "no search
/// filter". Non-blank queries keep their inner and surrounding spaces.
///
/// # Examples
/// - "Kennedy" -> Some("kennedy")
/// - "   " -> None
/// - "" -> None
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(fold(query))
    }
}

/// Join search fields into the text a query is matched against.
pub fn searchable_text<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = fields
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    fold(&joined)
}

/// Check if already-folded text contains an already-folded needle.
pub fn text_contains_term(folded_text: &str, folded_term: &str) -> bool {
    folded_term.is_empty() || folded_text.contains(folded_term)
}
