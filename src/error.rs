use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    EmptyInput,
    Expansion(String),
    UnclosedQuote,
    ExecutableNotFound(String),
    Resolution(String),
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty path"),
            ParseError::Expansion(value) => {
                write!(f, "malformed environment reference in: {value}")
            }
            ParseError::UnclosedQuote => write!(f, "unclosed quote"),
            ParseError::ExecutableNotFound(value) => write!(f, "executable not found: {value}"),
            ParseError::Resolution(value) => write!(f, "could not resolve: {value}"),
        }
    }
}
