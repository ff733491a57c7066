//! Choosing which topic to produce.

use reelcraft_error::{PipelineError, PipelineErrorKind, ReelcraftResult};
use std::io::{BufRead, IsTerminal, Write};
use tracing::{debug, warn};

/// Printed when the entered number is outside the list.
pub const INVALID_SELECTION: &str = "Invalid selection, using the first topic";

/// Printed when the input is not a number.
pub const INVALID_INPUT: &str = "Invalid input, using the first topic";

/// How the topic is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSelection {
    /// 1-based position given up front
    Explicit(usize),
    /// Ask on the console
    Interactive,
    /// Take the first topic
    First,
}

impl TopicSelection {
    /// Explicit when given, otherwise interactive only if stdin is a terminal.
    pub fn detect(explicit: Option<usize>) -> Self {
        match explicit {
            Some(position) => TopicSelection::Explicit(position),
            None if std::io::stdin().is_terminal() => TopicSelection::Interactive,
            None => TopicSelection::First,
        }
    }
}

/// Result of interpreting one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    /// A usable zero-based index
    Index(usize),
    /// A number outside `1..=count`
    OutOfRange,
    /// Not a number
    NotANumber,
}

impl SelectionInput {
    /// Interpret a line against a list of `count` topics. Blank means the first.
    pub fn parse(line: &str, count: usize) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return SelectionInput::Index(0);
        }

        match line.parse::<i64>() {
            Ok(position) if position >= 1 && (position as u64) <= count as u64 => {
                SelectionInput::Index((position - 1) as usize)
            }
            Ok(_) => SelectionInput::OutOfRange,
            Err(_) => SelectionInput::NotANumber,
        }
    }

    /// The index to use, falling back to the first topic.
    pub fn index(self) -> usize {
        match self {
            SelectionInput::Index(index) => index,
            SelectionInput::OutOfRange | SelectionInput::NotANumber => 0,
        }
    }
}

/// Ask for a topic number on `writer`, read the answer from `reader`.
///
/// Invalid answers print a notice and fall back to index 0. Only console I/O
/// failures are errors.
pub fn prompt_for_topic<R: BufRead, W: Write>(
    count: usize,
    reader: &mut R,
    writer: &mut W,
) -> ReelcraftResult<usize> {
    writeln!(
        writer,
        "\nSelect a topic by entering its number (or press Enter to use the first one):"
    )
    .map_err(console_error)?;
    write!(writer, "\nYour selection (1-{}): ", count).map_err(console_error)?;
    writer.flush().map_err(console_error)?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(console_error)?;

    let input = SelectionInput::parse(&line, count);
    let notice = match input {
        SelectionInput::OutOfRange => Some(INVALID_SELECTION),
        SelectionInput::NotANumber => Some(INVALID_INPUT),
        SelectionInput::Index(_) => None,
    };
    if let Some(notice) = notice {
        writeln!(writer, "{}", notice).map_err(console_error)?;
    }

    debug!(?input, "Topic selection read");
    Ok(input.index())
}

/// Resolve a zero-based topic index from a list of `count` topics.
///
/// # Errors
///
/// Returns [`PipelineErrorKind::NoTopics`] when `count` is zero, and a console
/// error if interactive I/O fails.
pub fn select_topic_index<R: BufRead, W: Write>(
    selection: TopicSelection,
    count: usize,
    reader: &mut R,
    writer: &mut W,
) -> ReelcraftResult<usize> {
    if count == 0 {
        return Err(PipelineError::new(PipelineErrorKind::NoTopics).into());
    }

    match selection {
        TopicSelection::Explicit(position) if position >= 1 && position <= count => {
            Ok(position - 1)
        }
        TopicSelection::Explicit(position) => {
            warn!(position, count, "Topic number out of range, using the first topic");
            Ok(0)
        }
        TopicSelection::Interactive => prompt_for_topic(count, reader, writer),
        TopicSelection::First => Ok(0),
    }
}

pub(crate) fn console_error(e: std::io::Error) -> PipelineError {
    PipelineError::new(PipelineErrorKind::Console(e.to_string()))
}
