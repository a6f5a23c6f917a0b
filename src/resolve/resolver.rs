//! The class-name resolution algorithm.
//!
//! Resolution walks the configuration in a fixed order — replace-style
//! modifiers, variants, conditionals, add/remove-style modifiers, the
//! passthrough `className` — appending class tokens to one ordered list,
//! then deduplicates keeping first occurrences. Later steps see what earlier
//! steps queued or removed, so the order is part of the contract.
//!
//! Resolution never fails. A malformed rule — a modifier targeting a variant
//! that doesn't exist, a default naming a missing option — simply never
//! fires. This is formatting logic on a hot rendering path; a cosmetic
//! mistake must not take the caller down.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::{
    ClassList, Conditional, Conditionals, DefaultVariants, Modifier, Modifiers, Variants,
};
use crate::props::{truthy, Props};
use crate::util::{append_tokens, dedup_join, remove_tokens};

/// The outcome of one resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The final ordered, deduplicated class-name string.
    pub class_name: String,
    /// The property bag with every style-controlling key stripped, safe to
    /// forward to a rendering target.
    pub props: Props,
}

/// What a property key was consumed as by the replace pass.
///
/// Consumption records a satisfied condition: the variant name keeps the
/// option it matched, so the add/remove pass can re-check firing against
/// the post-consumption state.
enum Consumed {
    Variant { option: String },
    Conditional,
}

type ConsumedSet = HashMap<String, Consumed>;

/// Resolves a class-name string and residual property bag from a base class
/// list, a styling configuration and a property bag.
///
/// The input bag is never mutated; the residual bag is a fresh copy with
/// every recognized variant name, boolean-like conditional name and the
/// passthrough `className` removed.
///
/// # Example
///
/// ```rust
/// use attire::{resolve_class_names, ClassList, Config, Props};
///
/// let config = Config::new()
///     .variant("size", [("sm", "small"), ("lg", "large")])
///     .default_variant("size", "sm");
/// let base = ClassList::from("baseclass");
///
/// let resolution = resolve_class_names(
///     &Props::new(),
///     &base,
///     &config.variants,
///     &config.default_variants,
///     &config.conditionals,
///     &config.modifiers,
/// );
/// assert_eq!(resolution.class_name, "baseclass small");
/// ```
pub fn resolve_class_names(
    props: &Props,
    base: &ClassList,
    variants: &Variants,
    default_variants: &DefaultVariants,
    conditionals: &Conditionals,
    modifiers: &Modifiers,
) -> Resolution {
    let mut seed = Vec::new();
    append_tokens(&mut seed, base);
    resolve_with_seed(seed, props, variants, default_variants, conditionals, modifiers)
}

/// Resolution over an already-tokenized base, so callers that reuse one base
/// across many resolutions can split it once.
pub(crate) fn resolve_with_seed(
    mut fragments: Vec<String>,
    props: &Props,
    variants: &Variants,
    default_variants: &DefaultVariants,
    conditionals: &Conditionals,
    modifiers: &Modifiers,
) -> Resolution {
    let mut residual = props.clone();
    let mut consumed: ConsumedSet = HashMap::new();
    let mut to_remove: Vec<String> = Vec::new();

    // Replace pass. A firing rule contributes its replacement and consumes
    // both names so the variant and conditional steps skip them; consumed
    // keys are stripped from the residual bag unconditionally.
    for (_, modifier) in modifiers.iter() {
        let replacement = match &modifier.replace {
            Some(list) => list,
            None => continue,
        };
        if !fires_replace_pass(modifier, props, default_variants, &consumed) {
            continue;
        }
        append_tokens(&mut fragments, replacement);
        consumed
            .entry(modifier.target.variant.clone())
            .or_insert(Consumed::Variant {
                option: modifier.target.option.clone(),
            });
        consumed
            .entry(modifier.prop.clone())
            .or_insert(Consumed::Conditional);
        to_remove.push(modifier.target.variant.clone());
        to_remove.push(modifier.prop.clone());
    }

    // Variants. A truthy supplied value selects its option and marks the key
    // for removal whether or not an option matched; anything else falls back
    // to the default option and leaves the bag alone.
    for (name, options) in variants.iter() {
        if consumed.contains_key(name) {
            continue;
        }
        match props.get(name) {
            Some(value) if truthy(value) => {
                to_remove.push(name.to_string());
                if let Value::String(key) = value {
                    if let Some(list) = options.get(key) {
                        append_tokens(&mut fragments, list);
                    }
                }
            }
            _ => {
                if let Some(option) = default_variants.get(name) {
                    if let Some(list) = options.get(option) {
                        append_tokens(&mut fragments, list);
                    }
                }
            }
        }
    }

    // Conditionals. Only booleans and absent values are boolean-like; any
    // other value leaves the rule untouched and the key in the bag.
    for (name, conditional) in conditionals.iter() {
        if consumed.contains_key(name) {
            continue;
        }
        let value = props.get(name);
        if !matches!(value, None | Some(Value::Bool(_))) {
            continue;
        }
        let active = matches!(value, Some(Value::Bool(true)));
        to_remove.push(name.to_string());
        match conditional {
            Conditional::Static(list) => {
                if active {
                    append_tokens(&mut fragments, list);
                }
            }
            Conditional::Computed(evaluate) => {
                append_tokens(&mut fragments, &evaluate(active));
            }
        }
    }

    // Add/remove pass. Firing is re-checked against the post-consumption
    // state; removal strips exact-token matches before the additions land.
    for (_, modifier) in modifiers.iter() {
        if modifier.add.is_none() && modifier.remove.is_none() {
            continue;
        }
        if !fires_adjust_pass(modifier, props, default_variants, &consumed) {
            continue;
        }
        if let Some(list) = &modifier.remove {
            remove_tokens(&mut fragments, list);
        }
        if let Some(list) = &modifier.add {
            append_tokens(&mut fragments, list);
        }
    }

    // Strip the marked keys, then fold the passthrough className in last.
    // The key is dropped whenever present; only a non-empty string value
    // contributes fragments.
    for key in &to_remove {
        residual.remove(key);
    }
    if let Some(Value::String(extra)) = residual.get("className") {
        for token in extra.split_whitespace() {
            fragments.push(token.to_string());
        }
    }
    residual.remove("className");

    Resolution {
        class_name: dedup_join(&fragments),
        props: residual,
    }
}

/// Does the resolved selection for `name` equal `option`?
///
/// A truthy supplied value is the selection (a non-string can never equal an
/// option key); anything else falls back to the default variant.
fn selection_matches(
    props: &Props,
    default_variants: &DefaultVariants,
    name: &str,
    option: &str,
) -> bool {
    match props.get(name) {
        Some(value) if truthy(value) => {
            matches!(value, Value::String(selected) if selected == option)
        }
        _ => default_variants
            .get(name)
            .map_or(false, |default| default == option),
    }
}

fn fires_replace_pass(
    modifier: &Modifier,
    props: &Props,
    default_variants: &DefaultVariants,
    consumed: &ConsumedSet,
) -> bool {
    if consumed.contains_key(&modifier.target.variant) || consumed.contains_key(&modifier.prop) {
        return false;
    }
    selection_matches(
        props,
        default_variants,
        &modifier.target.variant,
        &modifier.target.option,
    ) && props.get(&modifier.prop).map_or(false, truthy)
}

fn fires_adjust_pass(
    modifier: &Modifier,
    props: &Props,
    default_variants: &DefaultVariants,
    consumed: &ConsumedSet,
) -> bool {
    let variant_ok = match consumed.get(&modifier.target.variant) {
        Some(Consumed::Variant { option }) => *option == modifier.target.option,
        Some(Consumed::Conditional) => false,
        None => selection_matches(
            props,
            default_variants,
            &modifier.target.variant,
            &modifier.target.option,
        ),
    };
    if !variant_ok {
        return false;
    }
    match consumed.get(&modifier.prop) {
        Some(Consumed::Conditional) => true,
        Some(Consumed::Variant { .. }) => false,
        None => props.get(&modifier.prop).map_or(false, truthy),
    }
}
