use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Asks questions and reads answers line by line. Generic over the reader so
/// tests can script a whole session from a byte slice.
pub struct Prompter<R> {
    input: R,
}

impl Prompter<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Prompter::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Shows a prompt and reads one trimmed line. Returns None once the
    /// input stream is closed.
    pub async fn try_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [Prompter::try_line] but treats a closed stream as an error, for
    /// places where an answer is required to continue.
    pub async fn line(&mut self, prompt: &str) -> Result<String> {
        self.try_line(prompt)
            .await?
            .context("Input stream closed mid-session")
    }

    /// Keeps asking until the answer parses as a number within the given
    /// bounds. Retries forever, matching the guidance message.
    pub async fn int_in_range(&mut self, prompt: &str, minimum: i64, maximum: i64) -> Result<i64> {
        loop {
            let raw = self.line(prompt).await?;
            if let Ok(value) = raw.parse::<i64>() {
                if (minimum..=maximum).contains(&value) {
                    return Ok(value);
                }
            }
            println!("Please enter a number between {minimum} and {maximum}.");
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tokio::io::BufReader;

    use crate::cli::prompt::Prompter;

    fn scripted(input: &'static str) -> Prompter<BufReader<&'static [u8]>> {
        Prompter::new(BufReader::new(input.as_bytes()))
    }

    #[tokio::test]
    async fn test_line_trims_whitespace() -> Result<()> {
        let mut prompter = scripted("  an answer  \n");
        assert_eq!(prompter.line("? ").await?, "an answer");
        Ok(())
    }

    #[tokio::test]
    async fn test_try_line_signals_closed_input() -> Result<()> {
        let mut prompter = scripted("");
        assert_eq!(prompter.try_line("? ").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_int_retries_until_valid() -> Result<()> {
        // junk, out of range, then acceptable
        let mut prompter = scripted("abc\n9\n0\n4\n");
        assert_eq!(prompter.int_in_range("? ", 1, 5).await?, 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_int_errors_when_input_closes_mid_retry() {
        let mut prompter = scripted("nope\n");
        assert!(prompter.int_in_range("? ", 1, 5).await.is_err());
    }
}
