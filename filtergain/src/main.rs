//! # filtergain
//!
//! A CLI for computing the output voltage and gain of first-order RC and RL
//! filters across one or more frequencies.
//!
//! ## Overview
//!
//! filtergain is built on top of filtergainlib. Every value can be given as a
//! flag; anything left out is asked for interactively, so running it with no
//! arguments walks through the filter menu and each component value.
//!
//! ## Usage
//!
//! ```bash
//! # RC low-pass, 10 V in, two frequencies
//! filtergain -t rc-low -v 10 -f 0,1000 -r 1000 -c 1e-7
//!
//! # RL high-pass as JSON
//! filtergain -t rl-high -v 5 -f 500 -r 100 -l 0.05 --output json
//!
//! # Fewer decimals
//! filtergain -t rc-high -v 3.3 -f 50,60 -r 10000 -c 1e-6 --voltage-places 1 --gain-places 3
//!
//! # Fully interactive
//! filtergain
//! ```
//!
//! Set `RUST_LOG=debug` to see the resolved parameters on stderr.

mod prompt;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use filtergainlib::{
    parse_frequencies, FilterAnalysis, FilterGainError, FilterParameters, FilterVariant,
    Precision, ReactiveComponent, DEFAULT_GAIN_PLACES, DEFAULT_OUTPUT_VOLTAGE_PLACES,
};
use log::{debug, trace};

use prompt::Prompter;
use render::{render_analysis, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("filtergain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Output voltage and gain of RC/RL low-pass and high-pass filters")
        .arg(
            Arg::new("filter")
                .short('t')
                .long("filter")
                .value_parser(|s: &str| s.parse::<FilterVariant>())
                .help("Filter type: rc-low, rc-high, rl-low, rl-high (or 1-4)"),
        )
        .arg(
            Arg::new("voltage")
                .short('v')
                .long("voltage")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .help("Input voltage (V)"),
        )
        .arg(
            Arg::new("frequency")
                .short('f')
                .long("frequency")
                .action(ArgAction::Append)
                .value_parser(parse_frequencies)
                .help("Frequencies in Hz, comma-separated (can be specified multiple times)"),
        )
        .arg(
            Arg::new("resistance")
                .short('r')
                .long("resistance")
                .value_parser(value_parser!(f64))
                .help("Resistance (Ohm)"),
        )
        .arg(
            Arg::new("capacitance")
                .short('c')
                .long("capacitance")
                .value_parser(value_parser!(f64))
                .conflicts_with("inductance")
                .help("Capacitance (F), for RC filters"),
        )
        .arg(
            Arg::new("inductance")
                .short('l')
                .long("inductance")
                .value_parser(value_parser!(f64))
                .help("Inductance (H), for RL filters"),
        )
        .arg(
            Arg::new("voltage-places")
                .long("voltage-places")
                .value_parser(value_parser!(u32))
                .help("Decimal places for output voltage [default: 3]"),
        )
        .arg(
            Arg::new("gain-places")
                .long("gain-places")
                .value_parser(value_parser!(u32))
                .help("Decimal places for gain [default: 5]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Extract precision from matches, falling back to the library defaults
fn extract_precision(matches: &ArgMatches) -> Precision {
    Precision::new()
        .output_voltage_places(
            matches
                .get_one::<u32>("voltage-places")
                .copied()
                .unwrap_or(DEFAULT_OUTPUT_VOLTAGE_PLACES),
        )
        .gain_places(
            matches
                .get_one::<u32>("gain-places")
                .copied()
                .unwrap_or(DEFAULT_GAIN_PLACES),
        )
}

/// Extract all frequency lists from matches as one ascending list
fn extract_frequencies(matches: &ArgMatches) -> Option<Vec<f64>> {
    matches
        .get_many::<Vec<f64>>("frequency")
        .map(|lists| {
            let mut frequencies: Vec<f64> = lists.flatten().copied().collect();
            frequencies.sort_by(f64::total_cmp);
            frequencies
        })
}

/// Pick the capacitance or inductance flag matching the variant.
///
/// Passing the other one is an error rather than being silently ignored.
fn extract_reactive_value(matches: &ArgMatches, variant: FilterVariant) -> Result<Option<f64>> {
    let capacitance = matches.get_one::<f64>("capacitance").copied();
    let inductance = matches.get_one::<f64>("inductance").copied();

    match variant.reactive_component() {
        ReactiveComponent::Capacitor => {
            if inductance.is_some() {
                return Err(FilterGainError::WrongComponent {
                    variant,
                    component: "inductance",
                }
                .into());
            }
            Ok(capacitance)
        }
        ReactiveComponent::Inductor => {
            if capacitance.is_some() {
                return Err(FilterGainError::WrongComponent {
                    variant,
                    component: "capacitance",
                }
                .into());
            }
            Ok(inductance)
        }
    }
}

/// Resolve every input from flags, prompting for whatever is missing
fn resolve_inputs<R: BufRead, W: Write>(
    matches: &ArgMatches,
    prompter: &mut Prompter<R, W>,
) -> Result<(FilterVariant, FilterParameters)> {
    let variant = match matches.get_one::<FilterVariant>("filter") {
        Some(variant) => *variant,
        None => prompter.variant()?,
    };
    let reactive_flag = extract_reactive_value(matches, variant)?;

    let input_voltage = match matches.get_one::<f64>("voltage") {
        Some(v) => *v,
        None => prompter.input_voltage()?,
    };
    let frequencies = match extract_frequencies(matches) {
        Some(f) => f,
        None => prompter.frequencies()?,
    };
    let resistance = match matches.get_one::<f64>("resistance") {
        Some(r) => *r,
        None => prompter.resistance()?,
    };
    let reactive_value = match reactive_flag {
        Some(x) => x,
        None => prompter.reactive_value(variant)?,
    };

    Ok((
        variant,
        FilterParameters::new(input_voltage, frequencies, resistance, reactive_value),
    ))
}

/// Parse arguments, compute, and write the result to stdout
fn run(matches: &ArgMatches) -> Result<()> {
    let mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_name(s))
        .unwrap_or_default();
    let precision = extract_precision(matches);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let (variant, parameters) = resolve_inputs(matches, &mut prompter)?;

    debug!(
        "{variant}: Vin={} V, R={} Ohm, {}={}, {} frequencies, precision {:?}",
        parameters.input_voltage,
        parameters.resistance,
        variant.reactive_component().quantity(),
        parameters.reactive_value,
        parameters.frequencies.len(),
        precision
    );

    let analysis = FilterAnalysis::new(variant, parameters, precision);
    for row in &analysis.rows {
        trace!("{row:?}");
    }

    let output = render_analysis(&analysis, mode)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write output")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
