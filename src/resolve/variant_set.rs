//! Pre-assembled base + configuration for repeated resolution.

use once_cell::sync::OnceCell;

use super::resolver::{resolve_with_seed, Resolution};
use crate::config::{ClassList, Config, ConfigBundle};
use crate::props::Props;
use crate::util::append_tokens;

/// A base class list and configuration bundled for repeated resolution.
///
/// Use this when one styling definition serves many call sites: the
/// configuration is assembled once and every render resolves against it.
/// The base class list is tokenized lazily on first use and reused after
/// that.
///
/// An optional name labels the set for debugging output; it has no
/// behavioral effect.
///
/// # Example
///
/// ```rust
/// use attire::{Config, Props, VariantSet};
///
/// let button = VariantSet::new(
///     "btn",
///     Config::new()
///         .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
///         .default_variant("size", "sm")
///         .conditional("outline", "btn-outline"),
/// );
///
/// assert_eq!(button.class_names(&Props::new()), "btn btn-sm");
///
/// let props = Props::new().with("size", "lg").with("outline", true);
/// assert_eq!(button.class_names(&props), "btn btn-lg btn-outline");
/// ```
#[derive(Debug, Clone)]
pub struct VariantSet {
    base: ClassList,
    config: Config,
    name: Option<String>,
    base_tokens: OnceCell<Vec<String>>,
}

impl VariantSet {
    /// Creates a variant set from a base class list and a configuration.
    pub fn new(base: impl Into<ClassList>, config: Config) -> Self {
        Self {
            base: base.into(),
            config,
            name: None,
            base_tokens: OnceCell::new(),
        }
    }

    /// Creates a variant set from a [`ConfigBundle`].
    pub fn from_bundle(bundle: ConfigBundle) -> Self {
        Self::new(bundle.base, bundle.variants)
    }

    /// Attaches a debug label, returning the updated set for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The debug label, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The base class list.
    pub fn base(&self) -> &ClassList {
        &self.base
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn base_tokens(&self) -> &[String] {
        self.base_tokens.get_or_init(|| {
            let mut tokens = Vec::new();
            append_tokens(&mut tokens, &self.base);
            tokens
        })
    }

    /// Resolves the class-name string and residual property bag.
    pub fn resolve(&self, props: &Props) -> Resolution {
        resolve_with_seed(
            self.base_tokens().to_vec(),
            props,
            &self.config.variants,
            &self.config.default_variants,
            &self.config.conditionals,
            &self.config.modifiers,
        )
    }

    /// Resolves just the class-name string.
    pub fn class_names(&self, props: &Props) -> String {
        self.resolve(props).class_name
    }
}

impl From<ConfigBundle> for VariantSet {
    fn from(bundle: ConfigBundle) -> Self {
        Self::from_bundle(bundle)
    }
}
