//! Interactive collection of the most common run parameters.
//!
//! An empty answer keeps the current value. A value that does not parse is
//! reported and the current value is kept.

use dnsforge_domain::{DomainError, Endpoint, RunConfig};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PromptedValues {
    pub source_address: Option<String>,
    pub source_port: Option<u16>,
    pub attempts: Option<usize>,
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_or_keep<T: FromStr + Display + Copy>(field: &'static str, raw: &str, current: T) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            let error = DomainError::InputParse {
                field,
                value: raw.to_string(),
            };
            warn!(error = %error, default = %current, "Using default");
            current
        }
    }
}

pub fn prompt_overrides<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: &RunConfig,
) -> io::Result<PromptedValues> {
    let mut values = PromptedValues::default();

    let source = ask(
        input,
        output,
        &format!("Enter source IP (default: {}): ", current.source_address),
    )?;
    if !source.is_empty() {
        match Endpoint::parse(&source, current.source_port) {
            Ok(endpoint) => {
                values.source_address = Some(endpoint.addr.to_string());
                if endpoint.port != current.source_port {
                    values.source_port = Some(endpoint.port);
                }
            }
            Err(error) => warn!(error = %error, "Keeping current source address"),
        }
    }

    let port = ask(
        input,
        output,
        &format!("Enter source port (default: {}): ", current.source_port),
    )?;
    if !port.is_empty() {
        values.source_port = Some(parse_or_keep("source_port", &port, current.source_port));
    }

    let attempts = ask(
        input,
        output,
        &format!("Enter number of attempts (default: {}): ", current.attempts),
    )?;
    if !attempts.is_empty() {
        values.attempts = Some(parse_or_keep("attempts", &attempts, current.attempts));
    }

    Ok(values)
}
