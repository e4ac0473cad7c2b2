//! Per-frequency evaluation of a filter.
//!
//! `analyze` takes a variant, its circuit values and a precision, and
//! produces one `ResultRow` per frequency. The rows are the input to the
//! table renderer and the JSON output.

use serde::{Deserialize, Serialize};

use crate::gain::{gain, output_voltage, round_to};
use crate::params::{FilterParameters, Precision};
use crate::table::{format_real, Record, TextTable};
use crate::variant::FilterVariant;

/// Column headers of the result table, in display order.
pub const COLUMNS: [&str; 4] = [
    "Frequency (Hz)",
    "Input voltage (V)",
    "Output voltage (V)",
    "Gain",
];

/// Computed response at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Frequency in Hz
    pub frequency: f64,
    /// Input amplitude in volts
    pub input_voltage: f64,
    /// Output amplitude in volts, already rounded
    pub output_voltage: f64,
    /// Voltage gain, already rounded
    pub gain: f64,
}

impl Record for ResultRow {
    fn fields(&self) -> Vec<(String, String)> {
        let values = [
            self.frequency,
            self.input_voltage,
            self.output_voltage,
            self.gain,
        ];
        COLUMNS
            .iter()
            .zip(values)
            .map(|(column, value)| (column.to_string(), format_real(value)))
            .collect()
    }
}

/// A complete evaluation: what was asked and what came out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterAnalysis {
    pub variant: FilterVariant,
    pub parameters: FilterParameters,
    pub precision: Precision,
    pub rows: Vec<ResultRow>,
}

impl FilterAnalysis {
    /// Evaluate `parameters` for `variant`.
    pub fn new(variant: FilterVariant, parameters: FilterParameters, precision: Precision) -> Self {
        let rows = analyze(variant, &parameters, precision);
        Self {
            variant,
            parameters,
            precision,
            rows,
        }
    }

    /// The rows as a text table.
    pub fn to_table(&self) -> TextTable {
        TextTable::from_records(&self.rows)
    }
}

/// Compute one row for a single frequency.
pub fn evaluate(
    variant: FilterVariant,
    parameters: &FilterParameters,
    frequency: f64,
    precision: Precision,
) -> ResultRow {
    let FilterParameters {
        input_voltage,
        resistance,
        reactive_value,
        ..
    } = *parameters;

    ResultRow {
        frequency,
        input_voltage,
        output_voltage: output_voltage(
            variant,
            input_voltage,
            frequency,
            resistance,
            reactive_value,
            precision.output_voltage_places,
        ),
        gain: round_to(
            gain(variant, frequency, resistance, reactive_value),
            precision.gain_places,
        ),
    }
}

/// Compute one row per frequency, in the order the frequencies are stored.
pub fn analyze(
    variant: FilterVariant,
    parameters: &FilterParameters,
    precision: Precision,
) -> Vec<ResultRow> {
    parameters
        .frequencies
        .iter()
        .map(|&frequency| evaluate(variant, parameters, frequency, precision))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rc_low_scenario() -> FilterAnalysis {
        FilterAnalysis::new(
            FilterVariant::RcLowPass,
            FilterParameters::new(10.0, vec![0.0, 1000.0], 1000.0, 1e-7),
            Precision::default(),
        )
    }

    #[test]
    fn test_rc_low_pass_rows() {
        let analysis = rc_low_scenario();
        assert_eq!(analysis.rows.len(), 2);

        let dc = analysis.rows[0];
        assert_eq!(dc.frequency, 0.0);
        assert_eq!(dc.input_voltage, 10.0);
        assert_eq!(dc.output_voltage, 10.0);
        assert_eq!(dc.gain, 1.0);

        let khz = analysis.rows[1];
        assert_eq!(khz.frequency, 1000.0);
        assert_eq!(khz.output_voltage, 8.467);
        assert_eq!(khz.gain, 0.84673);
    }

    #[test]
    fn test_rl_high_pass_row() {
        let params = FilterParameters::new(5.0, vec![500.0], 100.0, 0.05);
        let rows = analyze(FilterVariant::RlHighPass, &params, Precision::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].output_voltage, 4.218);
        assert_eq!(rows[0].gain, 0.84356);
    }

    #[test]
    fn test_custom_precision() {
        let params = FilterParameters::new(10.0, vec![1000.0], 1000.0, 1e-7);
        let precision = Precision::new().output_voltage_places(1).gain_places(2);
        let rows = analyze(FilterVariant::RcLowPass, &params, precision);
        assert_eq!(rows[0].output_voltage, 8.5);
        assert_eq!(rows[0].gain, 0.85);
    }

    #[test]
    fn test_rows_follow_frequency_order() {
        let params = FilterParameters::new(1.0, vec![300.0, 10.0, 20.0], 100.0, 0.05);
        let rows = analyze(FilterVariant::RlLowPass, &params, Precision::default());
        let frequencies: Vec<f64> = rows.iter().map(|r| r.frequency).collect();
        assert_eq!(frequencies, vec![10.0, 20.0, 300.0]);
    }

    #[test]
    fn test_record_fields() {
        let row = ResultRow {
            frequency: 1000.0,
            input_voltage: 10.0,
            output_voltage: 8.467,
            gain: 0.84673,
        };
        let fields = row.fields();
        let headers: Vec<&str> = fields.iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(headers, COLUMNS);
        let cells: Vec<&str> = fields.iter().map(|(_, c)| c.as_str()).collect();
        assert_eq!(cells, vec!["1000.0", "10.0", "8.467", "0.84673"]);
    }

    #[test]
    fn test_rendered_scenario_table() {
        let rendered = rc_low_scenario().to_table().render();
        let expected = "\
+----------------+-------------------+--------------------+---------+
| Frequency (Hz) | Input voltage (V) | Output voltage (V) | Gain    |
+----------------+-------------------+--------------------+---------+
| 0.0            | 10.0              | 10.0               | 1.0     |
| 1000.0         | 10.0              | 8.467              | 0.84673 |
+----------------+-------------------+--------------------+---------+
";
        assert_eq!(rendered, expected);

        let lines: Vec<&str> = rendered.lines().collect();
        let separators = lines.iter().filter(|l| l.starts_with('+')).count();
        assert_eq!(separators, 4);
        let header_cells = lines[1].trim_matches('|').split('|').count();
        assert_eq!(header_cells, 4);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_analysis_serializes() {
        let json = serde_json::to_value(rc_low_scenario()).unwrap();
        assert_eq!(json["variant"], "rc-low-pass");
        assert_eq!(json["precision"]["gain_places"], 5);
        assert_eq!(json["rows"][1]["output_voltage"], 8.467);
    }
}
