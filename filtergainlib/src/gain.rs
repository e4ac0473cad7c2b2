//! Voltage gain of first-order RC and RL filters.
//!
//! All functions here are pure. Degenerate inputs (for example an RL filter
//! with zero resistance and zero inductance at 0 Hz) are evaluated as plain
//! IEEE arithmetic and yield `NaN` rather than an error.

use std::f64::consts::PI;

use crate::variant::FilterVariant;

/// Decimal places used for output voltages unless overridden.
pub const DEFAULT_OUTPUT_VOLTAGE_PLACES: u32 = 3;

/// Decimal places used for reported gains unless overridden.
pub const DEFAULT_GAIN_PLACES: u32 = 5;

/// Angular frequency ω = 2πf, in rad/s.
pub fn angular_frequency(frequency_hz: f64) -> f64 {
    2.0 * PI * frequency_hz
}

/// Steady-state voltage gain |Vout / Vin| of a first-order filter.
///
/// `reactive_value` is the capacitance in farads for RC variants and the
/// inductance in henries for RL variants.
pub fn gain(variant: FilterVariant, frequency: f64, resistance: f64, reactive_value: f64) -> f64 {
    let omega = angular_frequency(frequency);
    match variant {
        FilterVariant::RcLowPass => {
            let wrc = omega * resistance * reactive_value;
            1.0 / (1.0 + wrc * wrc).sqrt()
        }
        FilterVariant::RcHighPass => {
            let wrc = omega * resistance * reactive_value;
            wrc / (1.0 + wrc * wrc).sqrt()
        }
        FilterVariant::RlLowPass => {
            let wl = omega * reactive_value;
            resistance / (resistance * resistance + wl * wl).sqrt()
        }
        FilterVariant::RlHighPass => {
            let wl = omega * reactive_value;
            wl / (resistance * resistance + wl * wl).sqrt()
        }
    }
}

/// Output voltage amplitude for a given input, rounded to `decimal_places`.
pub fn output_voltage(
    variant: FilterVariant,
    input_voltage: f64,
    frequency: f64,
    resistance: f64,
    reactive_value: f64,
    decimal_places: u32,
) -> f64 {
    round_to(
        gain(variant, frequency, resistance, reactive_value) * input_voltage,
        decimal_places,
    )
}

/// Round to `decimal_places` digits after the point.
///
/// Ties round away from zero (`f64::round`). Non-finite values are returned
/// unchanged, as are values for which `decimal_places` exceeds what an `f64`
/// can resolve.
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = i32::try_from(decimal_places).unwrap_or(i32::MAX);
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    // Past 2^52 there is no fractional part left to round.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    scaled.round() / scale
}
