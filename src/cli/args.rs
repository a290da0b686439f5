//! Option resolution: raw argument list to a validated operation request.
//!
//! The surface is a flat flag set, not subcommands: one of the selector
//! flags (`--exec`, `--create`, `--delete`, `--modify`, `--transmit`) picks
//! the operation and the remaining flags modify it. Selectors override each
//! other POSIX-style, so the last one seen wins. Resolution never raises
//! past this boundary: every parse or validation problem prints a message
//! plus the usage text to stdout and yields `OperationRequest::None`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;

use crate::ops::{FileType, OperationRequest};

pub const USAGE: &str = "\
usage:
  rsedr [--help | -h]
  rsedr [--exec | -x] --file <file path> [-- <arguments>]
  rsedr [--create | -c] --file <file path> [--bin | --text]
  rsedr [--delete | -d] --file <file path>
  rsedr [--modify | -m] --file <file path>
  rsedr [--transmit | -t] --dest <address> --port <port> --data <data>

operations:
  --help, -h      Displays this usage documentation
  --exec, -x      Executes the file at the given file path.
                  Arguments after -- are passed to the file when it is executed.
  --create, -c    Creates a file of the specified type (defaults to text)
  --delete, -d    Deletes the specified file
  --modify, -m    Modifies the specified file.
                  Detects whether it is binary or text and appends matching content.
  --transmit, -t  Transmits the given data to the given address and port over TCP.
                  Requires --dest, --port, and --data

options:
  --file, -f      Target file path for --exec, --create, --delete, and --modify
  --bin           Used for creating a binary file
  --text          Used for creating a text file
  --dest          Specifies the address to connect to when using --transmit
  --port          Specifies the port to connect to when using --transmit
  --data          Specifies the data to transmit when using --transmit
";

const SELECTORS: [&str; 5] = ["exec", "create", "delete", "modify", "transmit"];

/// Turn a raw argument list into a single validated operation request.
///
/// Writes usage and error text to stdout only; never touches the
/// filesystem or network.
pub fn resolve(raw_args: &[String]) -> OperationRequest {
    debug!("raw args: {:?}", raw_args);
    if raw_args.is_empty() {
        println!("{USAGE}");
        return OperationRequest::None;
    }

    let (head, pass_along) = split_pass_along(raw_args);

    let matches = match command().try_get_matches_from(head) {
        Ok(matches) => matches,
        Err(err) => {
            println!("{err}");
            println!("{USAGE}");
            return OperationRequest::None;
        }
    };

    if matches.get_flag("help") {
        println!("{USAGE}");
        return OperationRequest::None;
    }

    let file_path = matches.get_one::<String>("file").map(PathBuf::from);

    if matches.get_flag("exec") {
        let Some(file_path) = file_path else {
            return missing_file_path("exec");
        };
        return OperationRequest::Execute {
            file_path,
            args: pass_along.to_vec(),
        };
    }

    if matches.get_flag("create") {
        let Some(file_path) = file_path else {
            return missing_file_path("create");
        };
        let file_type = if matches.get_flag("bin") {
            FileType::Binary
        } else {
            FileType::Text
        };
        return OperationRequest::Create {
            file_path,
            file_type,
        };
    }

    if matches.get_flag("delete") {
        let Some(file_path) = file_path else {
            return missing_file_path("delete");
        };
        return OperationRequest::Delete { file_path };
    }

    if matches.get_flag("modify") {
        let Some(file_path) = file_path else {
            return missing_file_path("modify");
        };
        return OperationRequest::Modify { file_path };
    }

    if matches.get_flag("transmit") {
        return resolve_transmit(&matches);
    }

    // modifiers given without an operation selector
    println!("{USAGE}");
    OperationRequest::None
}

/// Destination, port and data are all required; checked in that order so the
/// first missing one names the message.
fn resolve_transmit(matches: &ArgMatches) -> OperationRequest {
    let Some(destination) = matches.get_one::<String>("dest") else {
        return missing_transmit("a destination");
    };
    let Some(port) = matches.get_one::<String>("port") else {
        return missing_transmit("a port");
    };
    let Some(data) = matches.get_one::<String>("data") else {
        return missing_transmit("data to transmit");
    };

    // lenient by contract: non-numeric port input yields 0
    let port = port.parse::<u16>().unwrap_or(0);

    OperationRequest::Transmit {
        destination: destination.clone(),
        port,
        data: data.clone().into_bytes(),
    }
}

fn command() -> Command {
    Command::new("rsedr")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .action(ArgAction::SetTrue),
        )
        .arg(selector("exec", 'x'))
        .arg(selector("create", 'c'))
        .arg(selector("delete", 'd'))
        .arg(selector("modify", 'm'))
        .arg(selector("transmit", 't'))
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .overrides_with("file"),
        )
        .arg(
            Arg::new("bin")
                .long("bin")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["bin", "text"]),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["bin", "text"]),
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .value_name("HOST")
                .overrides_with("dest"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("INT")
                .overrides_with("port"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("BYTES")
                .overrides_with("data"),
        )
        // stray positionals are accepted and ignored, as the original
        // getopt-style parser did
        .arg(Arg::new("rest").num_args(0..).hide(true))
}

/// A bare operation selector. Selectors override each other (and
/// themselves), which is what makes "last one wins" hold.
fn selector(name: &'static str, short: char) -> Arg {
    Arg::new(name)
        .long(name)
        .short(short)
        .action(ArgAction::SetTrue)
        .overrides_with_all(SELECTORS)
}

/// Tokens after the first `--` are pass-along arguments, never options.
fn split_pass_along(raw_args: &[String]) -> (&[String], &[String]) {
    match raw_args.iter().position(|token| token == "--") {
        Some(index) => (&raw_args[..index], &raw_args[index + 1..]),
        None => (raw_args, &[]),
    }
}

fn missing_file_path(op: &str) -> OperationRequest {
    println!("option '--{op}' requires a file path");
    println!("{USAGE}");
    OperationRequest::None
}

fn missing_transmit(what: &str) -> OperationRequest {
    println!("option '--transmit' requires {what}");
    println!("{USAGE}");
    OperationRequest::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_command() {
        command().debug_assert();
    }

    #[test]
    fn split_separates_head_from_pass_along_tail() {
        let raw: Vec<String> = ["-x", "-f", "/bin/echo", "--", "hello", "--", "there"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (head, tail) = split_pass_along(&raw);
        assert_eq!(head, &raw[..3]);
        assert_eq!(tail, &raw[4..]);
    }

    #[test]
    fn split_without_separator_leaves_tail_empty() {
        let raw: Vec<String> = ["-d", "-f", "/tmp/x"].iter().map(|s| s.to_string()).collect();
        let (head, tail) = split_pass_along(&raw);
        assert_eq!(head, &raw[..]);
        assert!(tail.is_empty());
    }
}
