use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Receiver for lexical errors. The scanner reports and moves on; whether
/// accumulated errors should suppress use of the token stream is the
/// caller's call.
pub trait DiagnosticSink {
    fn report(&mut self, line: u32, message: &str);
}

/// Sink that prints to stderr and remembers that something went wrong.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag so a REPL turn starts clean.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl DiagnosticSink for ConsoleReporter {
    fn report(&mut self, line: u32, message: &str) {
        eprintln!("[line {}] Error: {}", line, message);
        self.had_error = true;
    }
}
