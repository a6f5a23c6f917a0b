//! # Attire - Variant-Driven Class Name Composition
//!
//! Attire derives a deduplicated class-name string from a declarative
//! styling configuration and a bag of run-time property values. It targets
//! component libraries that express visual variation — size, color, state —
//! through composable class-name fragments understood by an external style
//! sheet. Attire never interprets the fragments; it only selects, orders
//! and deduplicates them.
//!
//! ## Core Concepts
//!
//! - [`ClassList`]: one or more opaque class-name fragments
//! - Variants: named, mutually exclusive choices (`size` is `sm` *or* `lg`)
//! - [`Conditional`]: boolean-driven fragments, static or computed
//! - [`Modifier`]: rules firing when a variant selection co-occurs with an
//!   active conditional; they can replace, add or remove fragments
//! - [`Props`]: the run-time property bag; resolution strips the
//!   style-controlling keys and forwards the rest untouched
//! - [`VariantSet`]: a base + [`Config`] assembled once, resolved many times
//! - [`resolve_class_names`]: the underlying pure function
//!
//! ## Quick Start
//!
//! ```rust
//! use attire::{Config, Props, VariantSet};
//!
//! let button = VariantSet::new(
//!     "btn",
//!     Config::new()
//!         .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
//!         .variant("tone", [("neutral", "btn-neutral"), ("danger", "btn-danger")])
//!         .default_variant("size", "sm")
//!         .conditional("outline", "btn-outline"),
//! );
//!
//! let props = Props::new().with("tone", "danger").with("outline", true);
//! assert_eq!(
//!     button.class_names(&props),
//!     "btn btn-sm btn-danger btn-outline"
//! );
//! ```
//!
//! ## Residual Properties
//!
//! A rendering wrapper needs the properties that are *not* styling
//! controls — event handlers, ids, ARIA attributes — to forward to the
//! underlying element. [`VariantSet::resolve`] returns both the class-name
//! string and that residual bag:
//!
//! ```rust
//! use attire::{Config, Props, VariantSet};
//!
//! let field = VariantSet::new("field", Config::new().conditional("invalid", "field-invalid"));
//!
//! let props = Props::new().with("invalid", true).with("id", "email");
//! let resolution = field.resolve(&props);
//!
//! assert_eq!(resolution.class_name, "field field-invalid");
//! assert!(resolution.props.contains_key("id"));
//! assert!(!resolution.props.contains_key("invalid"));
//! ```
//!
//! A `className` property folds into the output string (last, after every
//! rule) and is stripped from the residual bag.
//!
//! ## Modifiers
//!
//! A modifier replaces, extends or trims the output when a specific variant
//! selection meets an active conditional:
//!
//! ```rust
//! use attire::{Config, Modifier, Props, VariantSet};
//!
//! let badge = VariantSet::new(
//!     "badge",
//!     Config::new()
//!         .variant("size", [("sm", "badge-sm"), ("lg", "badge-lg")])
//!         .default_variant("size", "sm")
//!         .conditional("outline", "badge-outline")
//!         .modifier(
//!             "smOutline",
//!             Modifier::new(("size", "sm"), "outline").replace("badge-sm-outline"),
//!         ),
//! );
//!
//! // The replacement stands in for both the variant's and the
//! // conditional's own fragments.
//! let props = Props::new().with("outline", true);
//! assert_eq!(badge.class_names(&props), "badge badge-sm-outline");
//! ```
//!
//! ## Configuration Files
//!
//! Configurations load from JSON or YAML documents, preserving declaration
//! order and accepting the historical key spellings
//! (`conditional`/`exchange`/`with`):
//!
//! ```rust
//! use attire::{Props, VariantSet, ConfigBundle};
//!
//! let bundle = ConfigBundle::from_yaml_str(r#"
//! base: btn
//! variants:
//!   variants:
//!     size: { sm: btn-sm, lg: btn-lg }
//!   default_variants:
//!     size: sm
//! "#).unwrap();
//!
//! let button = VariantSet::from_bundle(bundle);
//! assert_eq!(button.class_names(&Props::new()), "btn btn-sm");
//! ```
//!
//! ## Failure Semantics
//!
//! Resolution never fails: malformed configuration degrades to "rule does
//! not fire". For early detection of dangling references, call
//! [`Config::validate`] explicitly.

pub mod config;
pub mod props;
pub mod resolve;
pub mod util;

pub use config::{
    create_config, load_config_bundle, ClassList, Conditional, Conditionals, Config, ConfigBundle,
    ConfigLoadError, ConfigValidationError, DefaultVariants, Modifier, Modifiers, OrderedMap,
    VariantOptions, VariantTarget, VariantTargetParseError, Variants, CONFIG_EXTENSIONS,
};
pub use props::{truthy, Props};
pub use resolve::{resolve_class_names, CachedResolver, Resolution, VariantSet};
pub use util::{append_tokens, dedup_join, remove_tokens};
