//! Print the response of an RC low-pass and high-pass pair side by side.

use filtergainlib::{analyze, FilterParameters, FilterVariant, Precision};
use std::env;

fn main() {
    let resistance: f64 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000.0);
    let capacitance = 1e-7;
    let params = FilterParameters::new(1.0, vec![10.0, 100.0, 1e3, 1e4, 1e5], resistance, capacitance);

    let low = analyze(FilterVariant::RcLowPass, &params, Precision::default());
    let high = analyze(FilterVariant::RcHighPass, &params, Precision::default());

    let rows: Vec<Vec<(&str, f64)>> = low
        .iter()
        .zip(&high)
        .map(|(l, h)| {
            vec![
                ("Frequency (Hz)", l.frequency),
                ("Low-pass gain", l.gain),
                ("High-pass gain", h.gain),
            ]
        })
        .collect();

    print!("{}", filtergainlib::render(&rows));
}
