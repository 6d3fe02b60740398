use std::fmt::{self, Display};

use crate::object::Object;
use crate::token::{Token, Type};

/// Collects errors reported by the scanner, the parser, the resolver and the
/// interpreter. The collector is created by the driver and passed explicitly
/// to every stage so that a single run shares one pair of error flags.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    pub had_error: bool,
    pub had_runtime_error: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter::default()
    }

    /// Reports a lexical error and raises the error flag.
    pub fn error(&mut self, error: &ScanError) {
        eprintln!("{error}");
        self.had_error = true;
    }

    /// Reports a parse error and raises the error flag.
    pub fn parse_error(&mut self, error: &ParseError) {
        eprintln!("{error}");
        self.had_error = true;
    }

    /// Reports a resolution error and raises the error flag.
    pub fn resolve_error(&mut self, error: &ResolveError) {
        eprintln!("{error}");
        self.had_error = true;
    }

    /// Reports a runtime error and raises the runtime error flag.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{error}");
        self.had_runtime_error = true;
    }

    /// Clears both flags. Used between prompt lines so one bad expression
    /// does not poison the rest of the session.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.token.r#type == Type::EOF {
            write!(f, "[line {}] Error at end: {}", self.token.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.token.line, self.token.lexeme, self.message
            )
        }
    }
}

/// Represents an error that occurs during resolution. These are syntactically
/// valid programs that are semantically invalid, like declaring the same name
/// twice in one scope.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[line {}] Error at '{}': {}",
            self.token.line, self.token.lexeme, self.message
        )
    }
}

/// Represents an error that occurs during runtime.
#[derive(Debug)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.token.line)
    }
}

/// Represents a non-local transfer travelling up the evaluator's return
/// channel. `break`, `continue` and `return` unwind through any number of
/// nested blocks until a loop or a function call consumes them; runtime
/// errors unwind all the way to the top-level statement list.
#[derive(Debug)]
pub enum Interrupt {
    Break(Token),
    Continue(Token),
    Return(Object),
    Error(RuntimeError),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Interrupt::Error(error)
    }
}
