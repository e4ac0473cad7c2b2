//! Interactive prompting for values not given on the command line.
//!
//! Prompts are written to the given writer (stderr in the binary) so that
//! stdout carries only the table or JSON. Invalid answers are reported and
//! asked again; end of input is an error.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use console::style;
use filtergainlib::{parse_frequencies, parse_number, FilterVariant};

/// Line-oriented question/answer session over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question`, read one line, and parse it until parsing succeeds.
    fn ask<T, E, F>(&mut self, question: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: std::fmt::Display,
    {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                bail!("unexpected end of input while asking: {}", question.trim());
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", style(e).for_stderr().red())?,
            }
        }
    }

    /// Show the numbered filter menu and read a choice.
    pub fn variant(&mut self) -> Result<FilterVariant> {
        writeln!(self.output, "{}", style("Filters:").for_stderr().bold())?;
        for variant in FilterVariant::ALL {
            writeln!(
                self.output,
                "  {} {:<8} {}",
                variant.menu_number(),
                variant.short_name(),
                variant
            )?;
        }
        self.ask("Enter filter type (1/2/3/4): ", str::parse::<FilterVariant>)
    }

    pub fn input_voltage(&mut self) -> Result<f64> {
        self.ask("Enter input voltage (V): ", |s| parse_number("input voltage", s))
    }

    pub fn frequencies(&mut self) -> Result<Vec<f64>> {
        self.ask("Enter input frequency(s) (Hz): ", parse_frequencies)
    }

    pub fn resistance(&mut self) -> Result<f64> {
        self.ask("Enter resistance (Ohm): ", |s| parse_number("resistance", s))
    }

    /// Ask for the capacitance or inductance, depending on the variant.
    pub fn reactive_value(&mut self, variant: FilterVariant) -> Result<f64> {
        let component = variant.reactive_component();
        let question = format!("Enter {} ({}): ", component.quantity(), component.unit());
        self.ask(&question, |s| parse_number(component.quantity(), s))
    }
}
