//! Console prompting
//!
//! Line-oriented input and output over any `BufRead` / `Write` pair, so the
//! interactive flows can run against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::LedgerResult;
use crate::models::transaction::parse_amount;

/// Input/output pair used by the interactive menu
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a new console
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its terminator; `None` at end of input
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so only a
    /// failing stream is an error.
    pub fn read_line(&mut self) -> LedgerResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Prompt for a free-text line, kept as typed
    ///
    /// End of input reads as an empty line.
    pub fn prompt_line(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Prompt for a string input, trimmed
    pub fn prompt_string(&mut self, prompt: &str) -> LedgerResult<String> {
        Ok(self.prompt_line(prompt)?.trim().to_string())
    }

    /// Prompt for a decimal amount; unparseable input reads as zero
    pub fn prompt_amount(&mut self, prompt: &str) -> LedgerResult<f64> {
        Ok(parse_amount(&self.prompt_line(prompt)?))
    }

    /// Write text as-is; flushed, since it may end in a prompt
    pub fn print(&mut self, text: &str) -> LedgerResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Write text followed by a newline
    pub fn println(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Take back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut console = console("first\r\nsecond\n");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"Caf\xe9\nnext\n".to_vec()), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Caf\u{fffd}"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_prompt_writes_prompt_and_keeps_spacing() {
        let mut console = console("  Widget sale \n");
        let value = console.prompt_line("Enter description: ").unwrap();
        assert_eq!(value, "  Widget sale ");

        let (_, output) = console.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Enter description: ");
    }

    #[test]
    fn test_prompt_string_trims() {
        let mut console = console("  42 \n");
        assert_eq!(console.prompt_string("> ").unwrap(), "42");
    }

    #[test]
    fn test_prompt_at_end_of_input_is_empty() {
        let mut console = console("");
        assert_eq!(console.prompt_line("> ").unwrap(), "");
    }

    #[test]
    fn test_prompt_amount() {
        let mut console = console("150.00\nabc\n");
        assert_eq!(console.prompt_amount("> ").unwrap(), 150.0);
        assert_eq!(console.prompt_amount("> ").unwrap(), 0.0);
    }
}
