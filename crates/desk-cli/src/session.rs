//! Line-oriented session runner
//!
//! A session is a script of commands, one per line, executed against a
//! single store. Blank lines and lines starting with `#` are skipped. A line
//! that fails is reported on stderr and the session moves on to the next.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use clap::{Parser, error::ErrorKind};
use desk_core::display::OperationStatus;
use log::{debug, warn};

use crate::cli::{Cli, SessionLine};

/// Split a line into words the way a shell would for simple cases.
///
/// Words are separated by whitespace. Single quotes keep everything
/// literally, double quotes allow `\"` and `\\` escapes, and a backslash
/// outside quotes escapes the next character. `''` yields an empty word.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => bail!("Unterminated single quote"),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped @ ('"' | '\\')) => current.push(escaped),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => bail!("Unterminated double quote"),
                        },
                        Some(c) => current.push(c),
                        None => bail!("Unterminated double quote"),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Parse and run a single non-empty session line.
fn execute_line(cli: &mut Cli, line: &str) -> Result<()> {
    let words = split_line(line)?;
    match SessionLine::try_parse_from(words) {
        Ok(SessionLine { command }) => cli.handle_command(command),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
            print!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Run every command read from `input`.
///
/// Returns the number of lines that failed.
///
/// # Errors
///
/// Only when `input` itself cannot be read.
pub fn run_session(cli: &mut Cli, input: impl BufRead) -> Result<usize> {
    let mut failed = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read session input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let number = index + 1;
        debug!("Session line {number}: {line}");
        if let Err(e) = execute_line(cli, line) {
            failed += 1;
            warn!("Session line {number} failed: {e:#}");
            eprint!(
                "{}",
                OperationStatus::failure(format!("line {number}: {}", e.to_string().trim_end()))
            );
        }
    }

    Ok(failed)
}
