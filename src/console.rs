//! Line-oriented interactive console.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Wraps the interactive input and output streams.
///
/// Production code uses locked stdin/stdout; tests pass a byte script and a
/// `Vec<u8>` to capture what was printed.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt`, then reads one line without its terminator.
    ///
    /// # Errors
    ///
    /// Fails when the input stream is closed, since every prompt loop would
    /// otherwise spin forever.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether a yes/no answer is the affirmative token.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
