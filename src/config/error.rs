//! Configuration validation errors.

/// Error returned when configuration validation fails.
///
/// Resolution itself never fails — a dangling reference simply never fires —
/// so validation is an explicit, opt-in early check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A default variant names a variant that doesn't exist.
    UnknownDefaultVariant { variant: String },
    /// A default variant names an option key its variant doesn't define.
    UnknownDefaultOption { variant: String, option: String },
    /// A modifier targets a variant that doesn't exist.
    UnknownModifierVariant { modifier: String, variant: String },
    /// A modifier targets an option key its variant doesn't define.
    UnknownModifierOption {
        modifier: String,
        variant: String,
        option: String,
    },
    /// A modifier names a conditional that doesn't exist.
    UnknownModifierConditional {
        modifier: String,
        conditional: String,
    },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::UnknownDefaultVariant { variant } => {
                write!(f, "default for non-existent variant '{}'", variant)
            }
            ConfigValidationError::UnknownDefaultOption { variant, option } => {
                write!(
                    f,
                    "default for variant '{}' names non-existent option '{}'",
                    variant, option
                )
            }
            ConfigValidationError::UnknownModifierVariant { modifier, variant } => {
                write!(
                    f,
                    "modifier '{}' targets non-existent variant '{}'",
                    modifier, variant
                )
            }
            ConfigValidationError::UnknownModifierOption {
                modifier,
                variant,
                option,
            } => {
                write!(
                    f,
                    "modifier '{}' targets non-existent option '{}:{}'",
                    modifier, variant, option
                )
            }
            ConfigValidationError::UnknownModifierConditional {
                modifier,
                conditional,
            } => {
                write!(
                    f,
                    "modifier '{}' names non-existent conditional '{}'",
                    modifier, conditional
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}
