use std::{io, iter::Peekable};

use super::line::Line;

/// A forward-only line source that counts the lines it hands out.
///
/// Line numbers are 1-indexed and count every line, blank or not.
pub(crate) struct Cursor<I: Iterator> {
    lines: Peekable<I>,
    number: usize,
}

impl<I> Cursor<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub(crate) fn new(lines: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            lines: lines.into_iter().peekable(),
            number: 0,
        }
    }

    /// The number of the line most recently handed out, or 0 before the
    /// first.
    pub(crate) const fn number(&self) -> usize {
        self.number
    }

    pub(crate) fn next_line(&mut self) -> Option<io::Result<(usize, String)>> {
        let line = self.lines.next()?;
        self.number += 1;
        Some(line.map(|text| (self.number, text)))
    }

    /// Skips blank lines, then returns the next line without consuming it.
    pub(crate) fn peek_content(&mut self) -> io::Result<Option<&str>> {
        loop {
            let skip = match self.lines.peek() {
                None => return Ok(None),
                Some(Ok(text)) => Line::new(text).is_blank(),
                Some(Err(_)) => true,
            };
            if !skip {
                break;
            }
            self.number += 1;
            if let Some(Err(error)) = self.lines.next() {
                return Err(error);
            }
        }

        Ok(self
            .lines
            .peek()
            .and_then(|line| line.as_ref().ok())
            .map(String::as_str))
    }
}
