use std::fmt::Display;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::AppResult;

/// Line-oriented console: prompts are written to `output`, answers read from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` without a newline and reads one trimmed line.
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 are replaced rather than failing the read.
    pub async fn prompt(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Writes `text` followed by a newline
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Turns a failed service call into a printed one-line error and `None`
    pub fn recover<T>(&mut self, result: AppResult<T>) -> AppResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(error = %e, "Service call failed");
                self.say(e.console_message())?;
                Ok(None)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
