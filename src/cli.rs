//! Command line argument parsing.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;

use crate::models::{ip_to_number, Ipv4};

pub const USAGE: &str = "\
Usage:
  ip-range-summary <start_ip> <end_ip>   summarize a range into CIDR blocks
  ip-range-summary <start_ip>-<end_ip>   same, dash syntax
  ip-range-summary <cidr>                expand a CIDR block to its range
  ip-range-summary --list <cidr>         list every address in a CIDR block
Options:
  --csv    print blocks as a CSV table
  --json   print blocks as JSON";

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Summarize an address range into CIDR blocks.
    Summarize { start: Ipv4Addr, end: Ipv4Addr },
    /// Expand a CIDR block to its address range.
    Expand { block: Ipv4 },
    /// List every address in a CIDR block.
    List { block: Ipv4 },
}

/// How to print the result.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum OutputMode {
    Plain,
    Csv,
    Json,
}

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub output: OutputMode,
}

lazy_static! {
    static ref RANGE_RE: Regex = Regex::new(r"^([0-9.]+)-([0-9.]+)$").expect("Invalid Regex?");
}

/// Parse command line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs, Box<dyn Error>> {
    let mut output = OutputMode::Plain;
    let mut list = false;
    let mut positional: Vec<&str> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--csv" => output = OutputMode::Csv,
            "--json" => output = OutputMode::Json,
            "--list" => list = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {flag}\n{USAGE}").into());
            }
            other => positional.push(other),
        }
    }

    let command = match positional.as_slice() {
        [start, end] => Command::Summarize {
            start: parse_addr(start)?,
            end: parse_addr(end)?,
        },
        [single] if RANGE_RE.is_match(single) => {
            let caps = RANGE_RE.captures(single).expect("Regex match vanished?");
            Command::Summarize {
                start: parse_addr(&caps[1])?,
                end: parse_addr(&caps[2])?,
            }
        }
        [single] if single.contains('/') => {
            let block = Ipv4::new(single)?;
            if list {
                Command::List { block }
            } else {
                Command::Expand { block }
            }
        }
        _ => return Err(format!("Expected a range or CIDR block\n{USAGE}").into()),
    };

    Ok(CliArgs { command, output })
}

fn parse_addr(address: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    Ok(Ipv4Addr::from(ip_to_number(address)?))
}
