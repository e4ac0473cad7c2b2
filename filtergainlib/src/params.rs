//! Input parameters for a filter evaluation.
//!
//! This module contains the configuration types that control what the
//! library computes: the circuit values and the rounding precision.

use serde::{Deserialize, Serialize};

use crate::error::FilterGainError;
use crate::gain::{DEFAULT_GAIN_PLACES, DEFAULT_OUTPUT_VOLTAGE_PLACES};
use crate::Result;

/// Circuit values and the frequencies to evaluate them at.
///
/// `reactive_value` is a capacitance (F) for RC filters and an inductance (H)
/// for RL filters. Values are not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParameters {
    /// Input amplitude in volts
    pub input_voltage: f64,
    /// Frequencies in Hz, ascending
    pub frequencies: Vec<f64>,
    /// Resistance in ohms
    pub resistance: f64,
    /// Capacitance (F) or inductance (H)
    pub reactive_value: f64,
}

impl FilterParameters {
    /// Create parameters, sorting the frequencies ascending.
    pub fn new(
        input_voltage: f64,
        frequencies: impl Into<Vec<f64>>,
        resistance: f64,
        reactive_value: f64,
    ) -> Self {
        let mut frequencies = frequencies.into();
        frequencies.sort_by(f64::total_cmp);
        Self {
            input_voltage,
            frequencies,
            resistance,
            reactive_value,
        }
    }
}

/// Number of decimal places applied to computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    /// Decimal places for output voltages (default 3)
    pub output_voltage_places: u32,
    /// Decimal places for gains (default 5)
    pub gain_places: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            output_voltage_places: DEFAULT_OUTPUT_VOLTAGE_PLACES,
            gain_places: DEFAULT_GAIN_PLACES,
        }
    }
}

impl Precision {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set output voltage decimal places
    pub fn output_voltage_places(mut self, places: u32) -> Self {
        self.output_voltage_places = places;
        self
    }

    /// Builder: set gain decimal places
    pub fn gain_places(mut self, places: u32) -> Self {
        self.gain_places = places;
        self
    }
}

/// Parse a single real number, naming `field` in the error.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FilterGainError::InvalidNumber {
            field,
            value: text.trim().to_string(),
        })
}

/// Parse a comma-separated frequency list such as `"1000, 50,200"`.
///
/// Whitespace is ignored and the result is sorted ascending. Empty entries
/// (`"50,,60"`, trailing commas) are skipped.
pub fn parse_frequencies(text: &str) -> Result<Vec<f64>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut frequencies = compact
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| parse_number("frequency", part))
        .collect::<Result<Vec<f64>>>()?;

    if frequencies.is_empty() {
        return Err(FilterGainError::NoFrequencies);
    }

    frequencies.sort_by(f64::total_cmp);
    Ok(frequencies)
}
