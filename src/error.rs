use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(ParseError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

/// A parse failure annotated with the line, and file when known, where it
/// occurred.
#[derive(Debug)]
pub struct ParseError {
    pub file: Option<PathBuf>,
    pub line: u32,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(file: Option<PathBuf>, line: u32, kind: ParseErrorKind) -> Self {
        Self { file, line, kind }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}: {}", file.display(), self.line, self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ParseErrorKind::Read(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ParseErrorKind {
    /// A non-blank line with no `=` and no section brackets. Carries the
    /// trimmed offending text.
    Malformed(String),
    /// The registry did not recognize the effective key.
    UnknownKey(String),
    /// The registry recognized the key but rejected the value.
    Rejected { key: String, reason: String },
    /// The input stream failed mid-parse.
    Read(std::io::Error),
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(text) => write!(f, "expected key=value, got {text:?}"),
            Self::UnknownKey(key) => write!(f, "unknown key {key:?}"),
            Self::Rejected { key, reason } => {
                write!(f, "invalid value for key {key:?}: {reason}")
            }
            Self::Read(err) => write!(f, "read error: {err}"),
        }
    }
}
