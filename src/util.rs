//! Utility functions for class token lists.
//!
//! A resolution accumulates an ordered, possibly-redundant list of class
//! tokens. These helpers cover the three operations the accumulator needs:
//! appending a [`ClassList`] as individual tokens, removing exact-token
//! matches, and the final first-occurrence deduplicating join.

use std::collections::HashSet;

use crate::config::ClassList;

/// Appends every token of a class list to an accumulator.
///
/// Each entry of the list is split on whitespace, so a single string holding
/// several space-separated fragments contributes one token per fragment.
///
/// # Example
///
/// ```rust
/// use attire::{append_tokens, ClassList};
///
/// let mut tokens = Vec::new();
/// append_tokens(&mut tokens, &ClassList::from("btn btn-primary"));
/// append_tokens(&mut tokens, &ClassList::from(vec!["rounded", "shadow"]));
/// assert_eq!(tokens, vec!["btn", "btn-primary", "rounded", "shadow"]);
/// ```
pub fn append_tokens(out: &mut Vec<String>, list: &ClassList) {
    for token in list.tokens() {
        out.push(token.to_string());
    }
}

/// Removes every accumulated token that exactly matches a token of `list`.
///
/// Matching is whole-token equality, never substring containment, and every
/// occurrence is removed.
///
/// # Example
///
/// ```rust
/// use attire::{remove_tokens, ClassList};
///
/// let mut tokens = vec!["btn".to_string(), "shadow".to_string(), "btn".to_string()];
/// remove_tokens(&mut tokens, &ClassList::from("btn"));
/// assert_eq!(tokens, vec!["shadow"]);
/// ```
pub fn remove_tokens(out: &mut Vec<String>, list: &ClassList) {
    let targets: HashSet<&str> = list.tokens().collect();
    if targets.is_empty() {
        return;
    }
    out.retain(|token| !targets.contains(token.as_str()));
}

/// Joins tokens with single spaces, keeping only the first occurrence of
/// each distinct token.
///
/// # Example
///
/// ```rust
/// use attire::dedup_join;
///
/// let tokens: Vec<String> = ["outline", "border", "outline", "glow"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(dedup_join(&tokens), "outline border glow");
/// ```
pub fn dedup_join(tokens: &[String]) -> String {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
    let mut out = String::new();
    for token in tokens {
        if seen.insert(token.as_str()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_tokens_splits_fragments() {
        let mut tokens = Vec::new();
        append_tokens(&mut tokens, &ClassList::from("a b  c"));
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_tokens_from_list() {
        let mut tokens = Vec::new();
        append_tokens(&mut tokens, &ClassList::from(vec!["a b", "c"]));
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_tokens_trims_entries() {
        let mut tokens = Vec::new();
        append_tokens(&mut tokens, &ClassList::from("  padded  "));
        assert_eq!(tokens, vec!["padded"]);
    }

    #[test]
    fn test_remove_tokens_every_occurrence() {
        let mut tokens: Vec<String> = ["x", "y", "x", "z", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        remove_tokens(&mut tokens, &ClassList::from("x"));
        assert_eq!(tokens, vec!["y", "z"]);
    }

    #[test]
    fn test_remove_tokens_exact_match_only() {
        let mut tokens: Vec<String> = ["btn", "btn-primary"].iter().map(|s| s.to_string()).collect();
        remove_tokens(&mut tokens, &ClassList::from("btn"));
        assert_eq!(tokens, vec!["btn-primary"]);
    }

    #[test]
    fn test_remove_tokens_multiple_targets() {
        let mut tokens: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        remove_tokens(&mut tokens, &ClassList::from("a c"));
        assert_eq!(tokens, vec!["b"]);
    }

    #[test]
    fn test_dedup_join_first_occurrence_order() {
        let tokens: Vec<String> = ["outline", "border", "outline", "glow"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedup_join(&tokens), "outline border glow");
    }

    #[test]
    fn test_dedup_join_empty() {
        assert_eq!(dedup_join(&[]), "");
    }

    #[test]
    fn test_dedup_join_single() {
        assert_eq!(dedup_join(&["only".to_string()]), "only");
    }
}
