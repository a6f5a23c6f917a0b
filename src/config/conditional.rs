//! Boolean-driven class fragments.

use std::fmt;
use std::sync::Arc;

use serde::de::{Deserialize, Deserializer};

use super::class_list::ClassList;

/// A conditional rule: class fragments driven by a boolean property.
///
/// The static form emits its class list when the property is true and
/// nothing otherwise. The computed form receives the active flag and decides
/// both branches itself, which is how a rule emits one set of fragments when
/// active and a different set when inactive.
///
/// # Example
///
/// ```rust
/// use attire::{Conditional, ClassList};
///
/// let plain = Conditional::from("outline");
/// let branched = Conditional::computed(|active| {
///     if active {
///         ClassList::from("outline")
///     } else {
///         ClassList::from(vec!["fill", "border"])
///     }
/// });
/// # let _ = (plain, branched);
/// ```
#[derive(Clone)]
pub enum Conditional {
    /// A class list emitted only while the property is true.
    Static(ClassList),
    /// A function of the active flag, emitted on every resolution.
    Computed(Arc<dyn Fn(bool) -> ClassList + Send + Sync>),
}

impl Conditional {
    /// Wraps a function of the active flag.
    ///
    /// The closure must be `Send + Sync` so configurations stay shareable
    /// across threads.
    pub fn computed<F, C>(f: F) -> Self
    where
        F: Fn(bool) -> C + Send + Sync + 'static,
        C: Into<ClassList>,
    {
        Conditional::Computed(Arc::new(move |active| f(active).into()))
    }
}

impl fmt::Debug for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conditional::Static(list) => f.debug_tuple("Static").field(list).finish(),
            Conditional::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl PartialEq for Conditional {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Conditional::Static(a), Conditional::Static(b)) => a == b,
            (Conditional::Computed(a), Conditional::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<ClassList> for Conditional {
    fn from(value: ClassList) -> Self {
        Conditional::Static(value)
    }
}

impl From<&str> for Conditional {
    fn from(value: &str) -> Self {
        Conditional::Static(value.into())
    }
}

impl From<String> for Conditional {
    fn from(value: String) -> Self {
        Conditional::Static(value.into())
    }
}

impl From<Vec<&str>> for Conditional {
    fn from(value: Vec<&str>) -> Self {
        Conditional::Static(value.into())
    }
}

impl<const N: usize> From<[&str; N]> for Conditional {
    fn from(value: [&str; N]) -> Self {
        Conditional::Static(value.into())
    }
}

// A function cannot come from data, so documents only ever hold the static
// form.
impl<'de> Deserialize<'de> for Conditional {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ClassList::deserialize(deserializer).map(Conditional::Static)
    }
}
