//! Line-oriented console the game talks through.
//!
//! Every component takes `&mut impl Console` instead of touching stdin/stdout
//! directly, so rounds and sessions can be driven from scripted input.

use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// A text console: print lines, print a prompt and read the reply.
pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// The returned line has its trailing newline (and `\r`) removed but is
    /// otherwise untouched. Returns `Error::InputClosed` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// `Console` over any buffered reader and writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal from a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get the writer back, e.g. to inspect a captured transcript.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
