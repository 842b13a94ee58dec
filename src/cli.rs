//! Defines the command-line interface for the application.

use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "bin2hex",
    about = "Convert a binary number to its hexadecimal representation.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// The binary number to convert (e.g. '1010', '-0b1_0001').
    ///
    /// Exactly one value is expected; any other count prints the usage line.
    #[arg(value_name = "BINARY_VALUE", num_args = 0..)]
    pub values: Vec<OsString>,
}

/// Inserts `--` after the program name so every user argument, including a
/// literal `--` or anything flag-shaped, reaches `values` verbatim.
pub fn escaped_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut escaped: Vec<OsString> = args.next().into_iter().collect();
    escaped.push(OsString::from("--"));
    escaped.extend(args);
    escaped
}
