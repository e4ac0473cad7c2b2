//! Error types for filtergainlib

use thiserror::Error;

use crate::variant::FilterVariant;

/// Errors that can occur while building filter parameters from user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterGainError {
    /// Text does not name one of the four filter variants
    #[error("unknown filter type '{0}' (expected rc-low, rc-high, rl-low or rl-high)")]
    UnknownVariant(String),

    /// A numeric field could not be parsed
    #[error("invalid {field} '{value}': expected a number")]
    InvalidNumber { field: &'static str, value: String },

    /// The frequency list was empty
    #[error("at least one frequency is required")]
    NoFrequencies,

    /// A reactive component was given that the variant does not use
    #[error("{variant} filters take no {component}")]
    WrongComponent {
        variant: FilterVariant,
        component: &'static str,
    },
}
