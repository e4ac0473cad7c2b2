//! The four supported first-order filter topologies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FilterGainError;

/// First-order filter topology.
///
/// The set is closed: every computation matches on it exhaustively, so an
/// invalid variant can only ever be rejected while parsing user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterVariant {
    /// Series resistor, shunt capacitor
    RcLowPass,
    /// Series capacitor, shunt resistor
    RcHighPass,
    /// Series inductor, shunt resistor
    RlLowPass,
    /// Series resistor, shunt inductor
    RlHighPass,
}

/// The reactive element paired with the resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactiveComponent {
    Capacitor,
    Inductor,
}

impl ReactiveComponent {
    /// Name of the quantity this component contributes ("capacitance", "inductance")
    pub fn quantity(&self) -> &'static str {
        match self {
            ReactiveComponent::Capacitor => "capacitance",
            ReactiveComponent::Inductor => "inductance",
        }
    }

    /// SI unit symbol of the quantity
    pub fn unit(&self) -> &'static str {
        match self {
            ReactiveComponent::Capacitor => "F",
            ReactiveComponent::Inductor => "H",
        }
    }
}

impl FilterVariant {
    /// All variants, in menu order.
    pub const ALL: [FilterVariant; 4] = [
        FilterVariant::RcLowPass,
        FilterVariant::RcHighPass,
        FilterVariant::RlLowPass,
        FilterVariant::RlHighPass,
    ];

    /// Short command-line name (e.g. `rc-low`)
    pub fn short_name(&self) -> &'static str {
        match self {
            FilterVariant::RcLowPass => "rc-low",
            FilterVariant::RcHighPass => "rc-high",
            FilterVariant::RlLowPass => "rl-low",
            FilterVariant::RlHighPass => "rl-high",
        }
    }

    /// 1-based position in the interactive menu
    pub fn menu_number(&self) -> usize {
        match self {
            FilterVariant::RcLowPass => 1,
            FilterVariant::RcHighPass => 2,
            FilterVariant::RlLowPass => 3,
            FilterVariant::RlHighPass => 4,
        }
    }

    /// The reactive element this topology uses
    pub fn reactive_component(&self) -> ReactiveComponent {
        match self {
            FilterVariant::RcLowPass | FilterVariant::RcHighPass => ReactiveComponent::Capacitor,
            FilterVariant::RlLowPass | FilterVariant::RlHighPass => ReactiveComponent::Inductor,
        }
    }

    /// Whether the filter passes low frequencies
    pub fn is_low_pass(&self) -> bool {
        matches!(self, FilterVariant::RcLowPass | FilterVariant::RlLowPass)
    }
}

impl fmt::Display for FilterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterVariant::RcLowPass => "RC low-pass",
            FilterVariant::RcHighPass => "RC high-pass",
            FilterVariant::RlLowPass => "RL low-pass",
            FilterVariant::RlHighPass => "RL high-pass",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterVariant {
    type Err = FilterGainError;

    /// Accepts menu numbers (`1`..`4`), short names (`rc-low`), full names
    /// (`rc-low-pass`) and underscore spellings (`RC_low`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "1" | "rc-low" | "rc-low-pass" | "rc-lowpass" => Ok(FilterVariant::RcLowPass),
            "2" | "rc-high" | "rc-high-pass" | "rc-highpass" => Ok(FilterVariant::RcHighPass),
            "3" | "rl-low" | "rl-low-pass" | "rl-lowpass" => Ok(FilterVariant::RlLowPass),
            "4" | "rl-high" | "rl-high-pass" | "rl-highpass" => Ok(FilterVariant::RlHighPass),
            _ => Err(FilterGainError::UnknownVariant(s.trim().to_string())),
        }
    }
}
