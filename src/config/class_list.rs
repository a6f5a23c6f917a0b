//! The class list value type.

use serde::{Deserialize, Serialize};

/// One or more class-name fragments contributed by a single rule.
///
/// A class list is either a single token string (itself possibly containing
/// several space-separated fragments) or an ordered sequence of such strings.
/// Fragments are opaque tokens understood by an external style sheet; this
/// crate only appends, removes, and deduplicates them.
///
/// In configuration documents a class list is written as either a string or
/// a sequence of strings.
///
/// # Example
///
/// ```rust
/// use attire::ClassList;
///
/// let single = ClassList::from("btn btn-primary");
/// let many = ClassList::from(vec!["btn", "btn-primary"]);
///
/// let a: Vec<&str> = single.tokens().collect();
/// let b: Vec<&str> = many.tokens().collect();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassList {
    /// A single token string, possibly space-separated.
    Single(String),
    /// An ordered sequence of token strings.
    Many(Vec<String>),
}

impl ClassList {
    /// An empty class list.
    pub fn empty() -> Self {
        ClassList::Single(String::new())
    }

    /// Iterates over the individual whitespace-split tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        let entries: &[String] = match self {
            ClassList::Single(s) => std::slice::from_ref(s),
            ClassList::Many(list) => list.as_slice(),
        };
        entries.iter().flat_map(|entry| entry.split_whitespace())
    }

    /// Returns true if the list contributes no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

impl Default for ClassList {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        ClassList::Single(value.to_string())
    }
}

impl From<String> for ClassList {
    fn from(value: String) -> Self {
        ClassList::Single(value)
    }
}

impl From<Vec<String>> for ClassList {
    fn from(value: Vec<String>) -> Self {
        ClassList::Many(value)
    }
}

impl From<Vec<&str>> for ClassList {
    fn from(value: Vec<&str>) -> Self {
        ClassList::Many(value.into_iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassList {
    fn from(value: [&str; N]) -> Self {
        ClassList::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_from_single() {
        let list = ClassList::from("a b c");
        let tokens: Vec<&str> = list.tokens().collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokens_from_many() {
        let list = ClassList::from(vec!["a b", "c"]);
        let tokens: Vec<&str> = list.tokens().collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty() {
        assert!(ClassList::empty().is_empty());
        assert!(ClassList::from("   ").is_empty());
        assert!(ClassList::from(Vec::<String>::new()).is_empty());
        assert!(!ClassList::from("x").is_empty());
    }

    #[test]
    fn test_from_array() {
        let list = ClassList::from(["small", "sm"]);
        let tokens: Vec<&str> = list.tokens().collect();
        assert_eq!(tokens, vec!["small", "sm"]);
    }

    #[test]
    fn test_deserialize_string() {
        let list: ClassList = serde_json::from_str(r#""btn btn-sm""#).unwrap();
        assert_eq!(list, ClassList::from("btn btn-sm"));
    }

    #[test]
    fn test_deserialize_sequence() {
        let list: ClassList = serde_json::from_str(r#"["btn", "btn-sm"]"#).unwrap();
        assert_eq!(list, ClassList::from(vec!["btn", "btn-sm"]));
    }

    #[test]
    fn test_serialize_round_trip() {
        let list = ClassList::from(vec!["a", "b"]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
        let back: ClassList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
