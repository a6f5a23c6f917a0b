//! Styling configuration: the declarative side of class-name resolution.
//!
//! This module provides the configuration primitives:
//!
//! - [`ClassList`]: one or more class-name fragments
//! - [`Conditional`]: boolean-driven fragments, static or computed
//! - [`Modifier`] / [`VariantTarget`]: co-occurrence rules
//! - [`Config`]: the four tables, with a fluent builder and [`Config::validate`]
//! - [`ConfigBundle`] / [`create_config`]: a base class list paired with its
//!   configuration for reuse across call sites
//! - JSON/YAML document loading, including both historical key spellings
//!
//! Configurations are built once and reused; resolution never mutates them.

mod class_list;
mod conditional;
#[allow(clippy::module_inception)]
mod config;
mod error;
mod loader;
mod modifier;
mod ordered;

pub use class_list::ClassList;
pub use conditional::Conditional;
pub use config::{
    create_config, Conditionals, Config, ConfigBundle, DefaultVariants, Modifiers, VariantOptions,
    Variants,
};
pub use error::ConfigValidationError;
pub use loader::{load_config_bundle, ConfigLoadError, CONFIG_EXTENSIONS};
pub use modifier::{Modifier, VariantTarget, VariantTargetParseError};
pub use ordered::OrderedMap;
