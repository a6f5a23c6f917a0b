//! The run-time property bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Truthiness of a property value.
///
/// Mirrors the host-language rule styling configurations were written
/// against: `false`, `null`, `0` and the empty string are falsy; every other
/// value — including the string `"0"` — is truthy.
///
/// # Example
///
/// ```rust
/// use attire::truthy;
/// use serde_json::json;
///
/// assert!(truthy(&json!("0")));
/// assert!(truthy(&json!(true)));
/// assert!(!truthy(&json!("")));
/// assert!(!truthy(&json!(0)));
/// assert!(!truthy(&json!(null)));
/// ```
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A string-keyed bag of property values supplied at resolution time.
///
/// May hold variant selections (strings matching option keys), conditional
/// flags (booleans), a passthrough `className`, and any other keys, which
/// resolution forwards untouched. Resolution never mutates the bag it is
/// given; the residual bag is a fresh copy with the style-controlling keys
/// stripped.
///
/// # Example
///
/// ```rust
/// use attire::Props;
///
/// let props = Props::new()
///     .with("size", "lg")
///     .with("outline", true)
///     .with("id", "submit-button");
///
/// assert!(props.is_truthy("outline"));
/// assert!(!props.is_truthy("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag from a JSON object value. Returns `None` for any other
    /// kind of value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Sets a key, returning the updated bag for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a key-value pair, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns true if the key is present with a truthy value.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.0.get(key).map_or(false, truthy)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Iterates over keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_table() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!("0")));
        assert!(truthy(&json!("sm")));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!(-2.5)));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));

        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!(0.0)));
        assert!(!truthy(&json!(null)));
    }

    #[test]
    fn test_with_and_get() {
        let props = Props::new().with("size", "lg").with("outline", true);
        assert_eq!(props.get("size"), Some(&json!("lg")));
        assert_eq!(props.get("outline"), Some(&json!(true)));
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn test_is_truthy_absent_key() {
        let props = Props::new().with("flag", false);
        assert!(!props.is_truthy("flag"));
        assert!(!props.is_truthy("absent"));
    }

    #[test]
    fn test_remove() {
        let mut props = Props::new().with("size", "lg");
        assert_eq!(props.remove("size"), Some(json!("lg")));
        assert_eq!(props.remove("size"), None);
        assert!(props.is_empty());
    }

    #[test]
    fn test_from_value() {
        let props = Props::from_value(json!({"size": "sm"})).unwrap();
        assert_eq!(props.get("size"), Some(&json!("sm")));
        assert!(Props::from_value(json!("not an object")).is_none());
    }

    #[test]
    fn test_from_iterator() {
        let props: Props = [("a", json!(1)), ("b", json!("x"))].into_iter().collect();
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_serialization_is_canonical() {
        // Keys serialize sorted, so insertion order cannot produce distinct
        // serializations for equal bags.
        let a = Props::new().with("b", 1).with("a", 2);
        let b = Props::new().with("a", 2).with("b", 1);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_deserialize() {
        let props: Props = serde_json::from_str(r#"{"size": "lg", "outline": true}"#).unwrap();
        assert!(props.is_truthy("outline"));
        assert_eq!(props.get("size"), Some(&json!("lg")));
    }
}
