use crate::cli::{escaped_args, Cli};
use anyhow::Context;
use bin2hex::{convert, INVALID_BINARY_NUMBER};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli { values } = Cli::parse_from(escaped_args(std::env::args_os()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &values).context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

/// Writes the single line of output for the given positional values.
fn write_report(out: &mut impl Write, values: &[OsString]) -> io::Result<()> {
    match values {
        [binary_value] => {
            let result = hex_or_sentinel(binary_value);
            writeln!(out, "Hexadecimal value: {result}")
        }
        _ => {
            log::debug!("Expected exactly one argument, got {}", values.len());
            let program = Cli::command().get_name().to_string();
            writeln!(out, "Usage: {program} <binary_value>")
        }
    }
}

fn hex_or_sentinel(binary_value: &OsString) -> String {
    let Some(text) = binary_value.to_str() else {
        log::debug!("Rejected {binary_value:?}: argument is not valid UTF-8");
        return INVALID_BINARY_NUMBER.to_string();
    };

    match convert(text) {
        Ok(hex) => {
            log::trace!("Converted {text:?} to {hex}");
            hex
        }
        Err(err) => {
            log::debug!("Rejected {text:?}: {err}");
            INVALID_BINARY_NUMBER.to_string()
        }
    }
}
