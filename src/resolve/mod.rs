//! Class-name resolution.
//!
//! - [`resolve_class_names`]: the resolution algorithm, a pure function of
//!   (property bag, configuration) → (class-name string, residual bag)
//! - [`VariantSet`]: a base + configuration assembled once for many
//!   resolutions
//! - [`CachedResolver`]: memoized resolution for render boundaries

mod cache;
mod resolver;
mod variant_set;

pub use cache::CachedResolver;
pub use resolver::{resolve_class_names, Resolution};
pub use variant_set::VariantSet;
