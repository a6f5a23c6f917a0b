//! Modifier rules: variant × conditional co-occurrence.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as DeError, Visitor};
use serde::Deserialize;

use super::class_list::ClassList;

/// The variant selection a modifier targets.
///
/// This is the explicit form of the colon-joined `"variant:option"` selector
/// used in configuration documents; both forms are accepted.
///
/// # Example
///
/// ```rust
/// use attire::VariantTarget;
///
/// let parsed: VariantTarget = "size:sm".parse().unwrap();
/// assert_eq!(parsed, VariantTarget::new("size", "sm"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTarget {
    /// The variant name to inspect.
    pub variant: String,
    /// The option key the resolved selection must equal.
    pub option: String,
}

impl VariantTarget {
    /// Creates a target from a variant name and option key.
    pub fn new(variant: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            option: option.into(),
        }
    }
}

impl From<(&str, &str)> for VariantTarget {
    fn from((variant, option): (&str, &str)) -> Self {
        Self::new(variant, option)
    }
}

/// Error from parsing a colon-joined variant target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTargetParseError {
    /// The input that failed to parse.
    pub input: String,
}

impl fmt::Display for VariantTargetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 'variant:option', got '{}'", self.input)
    }
}

impl std::error::Error for VariantTargetParseError {}

impl FromStr for VariantTarget {
    type Err = VariantTargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((variant, option)) if !variant.is_empty() && !option.is_empty() => {
                Ok(Self::new(variant, option))
            }
            _ => Err(VariantTargetParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for VariantTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TargetVisitor;

        impl<'de> Visitor<'de> for TargetVisitor {
            type Value = VariantTarget;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 'variant:option' string")
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TargetVisitor)
    }
}

/// A rule that fires when a variant selection co-occurs with an active
/// conditional.
///
/// When the target variant's resolved selection equals the target option key
/// and the named conditional property is truthy, the rule's effects apply:
/// `replace` suppresses the variant's and conditional's own fragments and
/// contributes its class list in their stead; `remove` strips exact-token
/// matches from everything accumulated so far; `add` appends after removal.
/// A rule may define any combination.
///
/// # Example
///
/// ```rust
/// use attire::Modifier;
///
/// let rule = Modifier::new(("size", "sm"), "outline")
///     .replace("custom-small-outline");
/// # let _ = rule;
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Modifier {
    /// The variant selection this rule targets.
    #[serde(rename = "variant")]
    pub target: VariantTarget,
    /// The conditional property that must be truthy.
    pub prop: String,
    /// Fragments standing in for the variant's and conditional's own output.
    #[serde(default, alias = "with")]
    pub replace: Option<ClassList>,
    /// Fragments appended after removal.
    #[serde(default)]
    pub add: Option<ClassList>,
    /// Tokens stripped from the accumulated list, by exact match.
    #[serde(default)]
    pub remove: Option<ClassList>,
}

impl Modifier {
    /// Creates a rule with no effects; chain [`replace`](Self::replace),
    /// [`add`](Self::add) and [`remove`](Self::remove) to give it some.
    pub fn new(target: impl Into<VariantTarget>, prop: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            prop: prop.into(),
            replace: None,
            add: None,
            remove: None,
        }
    }

    /// Sets the replacement class list.
    pub fn replace(mut self, list: impl Into<ClassList>) -> Self {
        self.replace = Some(list.into());
        self
    }

    /// Sets the class list appended after removal.
    pub fn add(mut self, list: impl Into<ClassList>) -> Self {
        self.add = Some(list.into());
        self
    }

    /// Sets the tokens stripped from the accumulated list.
    pub fn remove(mut self, list: impl Into<ClassList>) -> Self {
        self.remove = Some(list.into());
        self
    }
}
