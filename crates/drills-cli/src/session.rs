//! Line-oriented dictionary session for `drills dict`.
//!
//! Each input line is one command:
//!
//! ```text
//! search <word>
//! add <word> <definition...>
//! update <word> <definition...>
//! delete <word>
//! list
//! quit
//! ```
//!
//! Blank lines and `#` comments are skipped. A failing line is reported and
//! the session moves on to the next one.

use std::io::{BufRead, Write};

use anyhow::Context;
use drills_dictionary::WordDictionary;
use thiserror::Error;

use crate::output::{self, ColorMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Add { word: String, definition: String },
    Update { word: String, definition: String },
    Delete(String),
    List,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{0} requires a word")]
    MissingWord(&'static str),
    #[error("{0} requires a definition")]
    MissingDefinition(&'static str),
    #[error("{0} takes {1} argument(s)")]
    TooManyArgs(&'static str, usize),
}

/// Split off the first whitespace-delimited token.
fn split_first(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (s, ""),
    }
}

fn single_word(verb: &'static str, rest: &str) -> Result<String, ParseError> {
    let (word, extra) = split_first(rest);
    if word.is_empty() {
        return Err(ParseError::MissingWord(verb));
    }
    if !extra.is_empty() {
        return Err(ParseError::TooManyArgs(verb, 1));
    }
    Ok(word.to_string())
}

/// The definition is everything after the word, inner spacing kept.
fn word_and_definition(verb: &'static str, rest: &str) -> Result<(String, String), ParseError> {
    let (word, definition) = split_first(rest);
    if word.is_empty() {
        return Err(ParseError::MissingWord(verb));
    }
    if definition.is_empty() {
        return Err(ParseError::MissingDefinition(verb));
    }
    Ok((word.to_string(), definition.to_string()))
}

fn no_args(verb: &'static str, rest: &str) -> Result<(), ParseError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TooManyArgs(verb, 0))
    }
}

/// Parse one input line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_first(line);
    let command = match verb {
        "search" => Command::Search(single_word("search", rest)?),
        "delete" => Command::Delete(single_word("delete", rest)?),
        "add" => {
            let (word, definition) = word_and_definition("add", rest)?;
            Command::Add { word, definition }
        }
        "update" => {
            let (word, definition) = word_and_definition("update", rest)?;
            Command::Update { word, definition }
        }
        "list" => {
            no_args("list", rest)?;
            Command::List
        }
        "quit" => {
            no_args("quit", rest)?;
            Command::Quit
        }
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Counts reported once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub failed: usize,
}

impl SessionSummary {
    /// Whether any line was malformed or hit a dictionary error.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Apply every command in `input` to `dict`, writing results to `out`.
pub fn run<R: BufRead>(
    dict: &mut WordDictionary,
    input: R,
    out: &mut dyn Write,
    color: ColorMode,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                summary.failed += 1;
                output::print_error(out, &format!("line {}: {}", idx + 1, e), color)?;
                continue;
            }
        };
        let result = match &command {
            Command::Quit => break,
            Command::Search(word) => dict
                .search(word)
                .map(|definition| output::print_entry(out, word, definition, color)),
            Command::Add { word, definition } => dict
                .add(word.as_str(), definition.as_str())
                .map(|()| output::print_ok(out, &format!("added {word}"), color)),
            Command::Update { word, definition } => dict
                .update(word, definition.as_str())
                .map(|()| output::print_ok(out, &format!("updated {word}"), color)),
            Command::Delete(word) => {
                dict.delete(word);
                Ok(output::print_ok(out, &format!("deleted {word}"), color))
            }
            Command::List => Ok(print_all(dict, out, color)),
        };
        summary.commands += 1;

        match result {
            Ok(written) => written?,
            Err(e) => {
                summary.failed += 1;
                output::print_error(out, &format!("line {}: {}", idx + 1, e), color)?;
            }
        }
    }

    Ok(summary)
}

fn print_all(dict: &WordDictionary, out: &mut dyn Write, color: ColorMode) -> std::io::Result<()> {
    if dict.is_empty() {
        return output::print_ok(out, "(empty)", color);
    }
    for word in dict.words() {
        if let Ok(definition) = dict.search(word) {
            output::print_entry(out, word, definition, color)?;
        }
    }
    Ok(())
}
