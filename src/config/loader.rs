//! Configuration documents: JSON and YAML sources, file loading.
//!
//! A configuration document is a map with up to four keys — `variants`,
//! `default_variants`, `conditionals`, `modifiers` — each holding the
//! corresponding table. Two earlier generations of the document format are
//! still accepted: `defaultVariants`, and the singular `conditional` /
//! `exchange` spellings with `with` in place of a modifier's `replace`.
//! Unknown keys are ignored rather than rejected.
//!
//! Documents can only express static conditionals; the computed form wraps
//! a function, which cannot come from data.
//!
//! # Example
//!
//! ```rust
//! use attire::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     "variants": { "size": { "sm": "small", "lg": "large" } },
//!     "defaultVariants": { "size": "sm" },
//!     "conditional": { "outline": "outline" }
//! }"#).unwrap();
//!
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use super::config::{Config, ConfigBundle};

/// Recognized configuration file extensions.
pub const CONFIG_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// Failed to read the file from disk.
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Error message.
        message: String,
    },
    /// The document failed to parse.
    Parse {
        /// Error message from the parser.
        message: String,
    },
    /// The path has no recognized configuration extension.
    UnrecognizedExtension {
        /// The offending path.
        path: PathBuf,
    },
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Read { path, message } => {
                write!(f, "failed to read config \"{}\": {}", path.display(), message)
            }
            ConfigLoadError::Parse { message } => {
                write!(f, "failed to parse config: {}", message)
            }
            ConfigLoadError::UnrecognizedExtension { path } => {
                write!(
                    f,
                    "unrecognized config extension for \"{}\" (expected one of: {})",
                    path.display(),
                    CONFIG_EXTENSIONS.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ConfigLoadError {}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = Config;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a styling configuration map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = Config::default();
                while let Some(key) = access.next_key::<String>()? {
                    match key.as_str() {
                        "variants" => config.variants = access.next_value()?,
                        "default_variants" | "defaultVariants" => {
                            config.default_variants = access.next_value()?;
                        }
                        "conditionals" | "conditional" => {
                            config.conditionals = access.next_value()?;
                        }
                        "modifiers" | "exchange" => config.modifiers = access.next_value()?,
                        _ => {
                            access.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(source).map_err(|e| ConfigLoadError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a configuration from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(source).map_err(|e| ConfigLoadError::Parse {
            message: e.to_string(),
        })
    }
}

impl ConfigBundle {
    /// Parses a `{ base, variants }` bundle from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(source).map_err(|e| ConfigLoadError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a `{ base, variants }` bundle from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(source).map_err(|e| ConfigLoadError::Parse {
            message: e.to_string(),
        })
    }
}

/// Loads a `{ base, variants }` bundle from a file, selecting the parser by
/// extension.
///
/// # Errors
///
/// Returns [`ConfigLoadError::UnrecognizedExtension`] for paths outside
/// [`CONFIG_EXTENSIONS`], [`ConfigLoadError::Read`] if the file cannot be
/// read, and [`ConfigLoadError::Parse`] if the document is malformed.
///
/// # Example
///
/// ```rust,ignore
/// use attire::{load_config_bundle, VariantSet};
///
/// let bundle = load_config_bundle("styles/button.yaml")?;
/// let button = VariantSet::from_bundle(bundle);
/// ```
pub fn load_config_bundle(path: impl AsRef<Path>) -> Result<ConfigBundle, ConfigLoadError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    let is_json = path_str.ends_with(".json");
    let is_yaml = path_str.ends_with(".yaml") || path_str.ends_with(".yml");
    if !is_json && !is_yaml {
        return Err(ConfigLoadError::UnrecognizedExtension {
            path: path.to_path_buf(),
        });
    }

    let source = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if is_json {
        ConfigBundle::from_json_str(&source)
    } else {
        ConfigBundle::from_yaml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassList, Conditional, VariantTarget};

    #[test]
    fn test_json_full_document() {
        let config = Config::from_json_str(
            r#"{
                "variants": {
                    "size": { "sm": "small", "lg": "large" },
                    "color": { "blue": "blue", "red": "red" }
                },
                "default_variants": { "size": "sm" },
                "conditionals": { "outline": ["outline", "border"] },
                "modifiers": {
                    "smOutline": {
                        "variant": "size:sm",
                        "prop": "outline",
                        "replace": "custom-small-outline"
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.variants.len(), 2);
        assert_eq!(config.default_variants.get("size"), Some(&"sm".to_string()));
        assert_eq!(
            config.conditionals.get("outline"),
            Some(&Conditional::Static(ClassList::from(vec![
                "outline", "border"
            ])))
        );
        let modifier = config.modifiers.get("smOutline").unwrap();
        assert_eq!(modifier.target, VariantTarget::new("size", "sm"));
    }

    #[test]
    fn test_json_preserves_declaration_order() {
        let config = Config::from_json_str(
            r#"{"variants": {"color": {"blue": "blue"}, "size": {"sm": "small"}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = config.variants.keys().collect();
        assert_eq!(names, vec!["color", "size"]);
    }

    #[test]
    fn test_json_historical_spellings() {
        let config = Config::from_json_str(
            r#"{
                "variants": { "size": { "sm": "small" } },
                "defaultVariants": { "size": "sm" },
                "conditional": { "outline": "outline" },
                "exchange": {
                    "smOutline": {
                        "variant": "size:sm",
                        "prop": "outline",
                        "with": "custom-small-outline"
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.default_variants.get("size"), Some(&"sm".to_string()));
        assert!(config.conditionals.contains_key("outline"));
        let modifier = config.modifiers.get("smOutline").unwrap();
        assert_eq!(
            modifier.replace,
            Some(ClassList::from("custom-small-outline"))
        );
    }

    #[test]
    fn test_both_spellings_load_identically() {
        let new_style = Config::from_json_str(
            r#"{"conditionals": {"outline": "outline"},
                "modifiers": {"m": {"variant": "size:sm", "prop": "outline", "replace": "x"}}}"#,
        )
        .unwrap();
        let old_style = Config::from_json_str(
            r#"{"conditional": {"outline": "outline"},
                "exchange": {"m": {"variant": "size:sm", "prop": "outline", "with": "x"}}}"#,
        )
        .unwrap();
        assert_eq!(new_style, old_style);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::from_json_str(
            r#"{"variants": {"size": {"sm": "small"}}, "compoundVariants": []}"#,
        )
        .unwrap();
        assert!(config.variants.contains_key("size"));
    }

    #[test]
    fn test_yaml_document() {
        let config = Config::from_yaml_str(
            r#"
variants:
  size:
    sm: small
    lg: [large, lg]
default_variants:
  size: sm
conditionals:
  outline: outline
"#,
        )
        .unwrap();

        let options = config.variants.get("size").unwrap();
        assert_eq!(options.get("lg"), Some(&ClassList::from(vec!["large", "lg"])));
        assert_eq!(config.default_variants.get("size"), Some(&"sm".to_string()));
    }

    #[test]
    fn test_bundle_document() {
        let bundle = ConfigBundle::from_json_str(
            r#"{"base": ["base", "button"], "variants": {"variants": {"size": {"sm": "small"}}}}"#,
        )
        .unwrap();
        assert_eq!(bundle.base, ClassList::from(vec!["base", "button"]));
        assert!(bundle.variants.variants.contains_key("size"));
    }

    #[test]
    fn test_parse_error() {
        let result = Config::from_json_str("{not json");
        assert!(matches!(result, Err(ConfigLoadError::Parse { .. })));
    }

    #[test]
    fn test_load_unrecognized_extension() {
        let result = load_config_bundle("button.toml");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnrecognizedExtension { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_bundle("does/not/exist.json");
        assert!(matches!(result, Err(ConfigLoadError::Read { .. })));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigLoadError::UnrecognizedExtension {
            path: PathBuf::from("button.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("button.toml"));
        assert!(msg.contains(".json"));
    }
}
