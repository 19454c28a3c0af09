//! Utility functions and errors for parsing puzzle input.

use std::str::FromStr;

use thiserror::Error;

use crate::DynamicError;

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    string: String,
    source: E,
}

/// Parse a string slice into another type, keeping the string for the error message.
///
/// # Errors
///
/// A [`ParseContextError`] sourcing [`F::Err`][FromStr::Err] if the string doesn't parse.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based, displayed one based.
    line_index: usize,
    source: DynamicError,
}

/// Parse every line of `input` with `parser`, which gets the zero-based line index and the line.
///
/// # Errors
///
/// Each item is an [`InvalidLine`] wrapping the parser's error if that line failed.
pub fn parse_input_lines<'a, T, E, F>(
    input: &'a str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &'a str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|error| InvalidLine {
            line_index,
            source: error.into(),
        })
    })
}

/// Reads input line by line for puzzles split into blank-line separated sections.
///
/// ```
/// # use aoc_framework::parsing::InputScanner;
/// let mut scanner = InputScanner::new("a\nb\n\nc\n");
/// let first = scanner.collect_sequence(|_, line| Ok::<_, std::fmt::Error>(line.to_owned()))?;
/// assert_eq!(first, ["a", "b"]);
///
/// scanner.skip_empty();
/// let second = scanner.collect_sequence(|_, line| Ok::<_, std::fmt::Error>(line.len()))?;
/// assert_eq!(second, [1]);
/// # Ok::<(), aoc_framework::parsing::InvalidLine>(())
/// ```
pub struct InputScanner<'a> {
    lines: std::iter::Peekable<std::iter::Enumerate<std::str::Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    /// Start scanning at the first line of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Skip blank lines. Returns the index of the next non-blank line, or `None` once the input
    /// is used up.
    pub fn skip_empty(&mut self) -> Option<usize> {
        while self.lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
        self.lines.peek().map(|&(line_index, _)| line_index)
    }

    /// Parse the next line if it continues the current section.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] wrapping the parser's error.
    ///
    /// # Returns
    ///
    /// `None` without consuming anything if the next line is blank or the input has ended.
    pub fn next_in_sequence<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &'a str) -> Result<T, E>,
    {
        let Some((line_index, line)) = self.lines.next_if(|(_, line)| !line.trim().is_empty())
        else {
            return Ok(None);
        };

        parser(line_index, line)
            .map(Some)
            .map_err(|error| InvalidLine {
                line_index,
                source: error.into(),
            })
    }

    /// Parse lines until a blank line or the end of input, leaving the blank line unread.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] for the first line the parser rejects.
    pub fn collect_sequence<T, E, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnMut(usize, &'a str) -> Result<T, E>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_in_sequence(&mut parser)? {
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use super::*;

    #[test]
    fn parse_with_context_keeps_string() {
        let error = parse_with_context::<u8>("300").expect_err("300 overflows u8");
        assert_eq!(error.to_string(), "failed to parse string: \"300\"");
    }

    #[test]
    fn invalid_line_is_one_based() {
        let results: Vec<_> =
            parse_input_lines("1\n2\nthree\n", |_, line| line.parse::<u8>()).collect();
        assert!(results[0].is_ok());
        let error = results[2].as_ref().expect_err("third line is not a number");
        assert_eq!(error.to_string(), "failure parsing line 3");
    }

    #[test]
    fn scanner_splits_sections() -> Result<(), InvalidLine> {
        let mut scanner = InputScanner::new("1\n2\n\n\n3\n");

        let first = scanner.collect_sequence(|_, line| line.parse::<u8>())?;
        assert_eq!(first, vec![1, 2]);
        assert_eq!(scanner.skip_empty(), Some(4));

        let second = scanner.next_in_sequence(|_, line| line.parse::<u8>())?;
        assert_eq!(second, Some(3));
        assert_eq!(scanner.skip_empty(), None);
        Ok(())
    }

    #[test]
    fn scanner_reports_original_line() {
        let mut scanner = InputScanner::new("\n1\nx\n");
        scanner.skip_empty();
        let error = scanner
            .collect_sequence(|_, line| -> Result<u8, ParseIntError> { line.parse() })
            .expect_err("x is not a number");
        assert_eq!(error.to_string(), "failure parsing line 3");
    }
}
