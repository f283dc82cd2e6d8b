//! Line-oriented console I/O.

use std::io::{self, BufRead, Write};

/// Reads answers from `input` and writes prompts and reports to `output`.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one line.
    ///
    /// The line terminator is stripped; other whitespace is kept. Bytes
    /// that are not valid UTF-8 become U+FFFD instead of failing the read.
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the label or reading fails.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Returns the output stream for reports.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the prompt, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
