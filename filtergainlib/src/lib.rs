//! # filtergainlib
//!
//! Steady-state gain and output voltage of first-order analog filters, with a
//! plain-text table renderer for the results.
//!
//! ## Overview
//!
//! Four topologies are supported:
//!
//! - **RC low-pass**: `1 / √(1 + (ωRC)²)`
//! - **RC high-pass**: `ωRC / √(1 + (ωRC)²)`
//! - **RL low-pass**: `R / √(R² + (ωL)²)`
//! - **RL high-pass**: `ωL / √(R² + (ωL)²)`
//!
//! where `ω = 2πf`. Gains are reported to 5 decimal places and output
//! voltages to 3 by default; both are configurable through [`Precision`].
//!
//! ## Features
//!
//! - **Pure computation**: no I/O, no shared state
//! - **Closed variant set**: dispatch is an exhaustive `match` on [`FilterVariant`]
//! - **Table rendering**: bordered, left-justified text tables from any [`Record`]
//! - **Serde support**: results serialize directly to JSON
//!
//! ## Example
//!
//! ```rust
//! use filtergainlib::{FilterAnalysis, FilterParameters, FilterVariant, Precision};
//!
//! let params = FilterParameters::new(10.0, vec![0.0, 1000.0], 1000.0, 1e-7);
//! let analysis = FilterAnalysis::new(FilterVariant::RcLowPass, params, Precision::default());
//!
//! assert_eq!(analysis.rows[0].output_voltage, 10.0);
//! assert_eq!(analysis.rows[1].gain, 0.84673);
//!
//! let table = analysis.to_table().render();
//! assert!(table.starts_with("+----------------+"));
//! assert!(table.contains("| Frequency (Hz) |"));
//! ```

pub mod analysis;
pub mod error;
pub mod gain;
pub mod params;
pub mod table;
pub mod variant;

pub use analysis::{analyze, evaluate, FilterAnalysis, ResultRow, COLUMNS};
pub use error::FilterGainError;
pub use gain::{
    angular_frequency, gain, output_voltage, round_to, DEFAULT_GAIN_PLACES,
    DEFAULT_OUTPUT_VOLTAGE_PLACES,
};
pub use params::{parse_frequencies, parse_number, FilterParameters, Precision};
pub use table::{format_real, render, Record, TextTable};
pub use variant::{FilterVariant, ReactiveComponent};

/// Result type for filtergainlib operations
pub type Result<T> = std::result::Result<T, FilterGainError>;
