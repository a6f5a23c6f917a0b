//! Configuration tables and the config bundle.

use super::class_list::ClassList;
use super::conditional::Conditional;
use super::error::ConfigValidationError;
use super::modifier::Modifier;
use super::ordered::OrderedMap;

/// The option table of one variant: option key → class list.
pub type VariantOptions = OrderedMap<ClassList>;

/// Variant name → option table. At most one option emits per variant per
/// resolution.
pub type Variants = OrderedMap<VariantOptions>;

/// Variant name → option key used when no property is supplied.
pub type DefaultVariants = OrderedMap<String>;

/// Conditional name → rule.
pub type Conditionals = OrderedMap<Conditional>;

/// Modifier name → rule.
pub type Modifiers = OrderedMap<Modifier>;

/// A styling configuration: variants, default variants, conditionals and
/// modifiers.
///
/// Built once, then reused across many resolutions. Declaration order is
/// significant — fragments are emitted in the order their rules were added.
///
/// # Example
///
/// ```rust
/// use attire::{Config, Modifier};
///
/// let config = Config::new()
///     .variant("size", [("sm", "small"), ("lg", "large")])
///     .default_variant("size", "sm")
///     .conditional("outline", "outline")
///     .modifier(
///         "smOutline",
///         Modifier::new(("size", "sm"), "outline").replace("custom-small-outline"),
///     );
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Mutually exclusive choices, each mapping option keys to class lists.
    pub variants: Variants,
    /// Option keys used when no matching property is supplied.
    pub default_variants: DefaultVariants,
    /// Boolean-driven fragments.
    pub conditionals: Conditionals,
    /// Co-occurrence rules.
    pub modifiers: Modifiers,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant with its option table, returning the updated
    /// configuration for chaining.
    pub fn variant<K, C, I>(mut self, name: &str, options: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<ClassList>,
    {
        let mut table = VariantOptions::new();
        for (key, list) in options {
            table.insert(key, list.into());
        }
        self.variants.insert(name, table);
        self
    }

    /// Sets the option key a variant falls back to when no property is
    /// supplied.
    pub fn default_variant(mut self, name: &str, option: &str) -> Self {
        self.default_variants.insert(name, option.to_string());
        self
    }

    /// Adds a conditional rule. Accepts anything convertible to a class list
    /// for the static form, or [`Conditional::computed`] for the branched
    /// form.
    pub fn conditional(mut self, name: &str, value: impl Into<Conditional>) -> Self {
        self.conditionals.insert(name, value.into());
        self
    }

    /// Adds a modifier rule.
    pub fn modifier(mut self, name: &str, modifier: Modifier) -> Self {
        self.modifiers.insert(name, modifier);
        self
    }

    /// Checks every cross-reference in the configuration.
    ///
    /// Resolution degrades silently on dangling references; this is the
    /// explicit early check for callers who would rather hear about them.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (variant, option) in self.default_variants.iter() {
            match self.variants.get(variant) {
                None => {
                    return Err(ConfigValidationError::UnknownDefaultVariant {
                        variant: variant.to_string(),
                    })
                }
                Some(options) if !options.contains_key(option) => {
                    return Err(ConfigValidationError::UnknownDefaultOption {
                        variant: variant.to_string(),
                        option: option.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for (name, modifier) in self.modifiers.iter() {
            match self.variants.get(&modifier.target.variant) {
                None => {
                    return Err(ConfigValidationError::UnknownModifierVariant {
                        modifier: name.to_string(),
                        variant: modifier.target.variant.clone(),
                    })
                }
                Some(options) if !options.contains_key(&modifier.target.option) => {
                    return Err(ConfigValidationError::UnknownModifierOption {
                        modifier: name.to_string(),
                        variant: modifier.target.variant.clone(),
                        option: modifier.target.option.clone(),
                    })
                }
                Some(_) => {}
            }
            if !self.conditionals.contains_key(&modifier.prop) {
                return Err(ConfigValidationError::UnknownModifierConditional {
                    modifier: name.to_string(),
                    conditional: modifier.prop.clone(),
                });
            }
        }

        Ok(())
    }
}

/// A base class list paired with its configuration, for reuse across call
/// sites.
///
/// The configuration is kept verbatim under the `variants` field; this is
/// also the document shape config files use.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct ConfigBundle {
    /// The always-emitted base class list.
    pub base: ClassList,
    /// The configuration, untouched.
    #[serde(default)]
    pub variants: Config,
}

/// Packages a base class list and a configuration into a bundle.
///
/// Identity-like: no validation, no computation, never fails.
///
/// # Example
///
/// ```rust
/// use attire::{create_config, Config, VariantSet};
///
/// let bundle = create_config(
///     "base",
///     Config::new()
///         .variant("size", [("sm", "small"), ("lg", "large")])
///         .default_variant("size", "sm"),
/// );
///
/// let style = VariantSet::from_bundle(bundle);
/// # let _ = style;
/// ```
pub fn create_config(base: impl Into<ClassList>, config: Config) -> ConfigBundle {
    ConfigBundle {
        base: base.into(),
        variants: config,
    }
}
