//! Load INI-style configuration files into a set of pre-registered flags.
//!
//! Input is line-oriented `key=value` text. Comments start at any `#` or `;`
//! and run to end of line, blank lines are skipped, and `[section]` headers
//! optionally prefix the keys that follow them (`sec.key`). Each value is
//! handed, as a trimmed string, to a [`Registry`] — the mapping from key to
//! typed setter — which owns all coercion and validation.
//!
//! [`parse_str`] and [`parse_reader`] parse into any registry;
//! [`from_path`] opens a file and annotates errors with its path. The
//! built-in [`FlagSet`] registry covers the common typed-flag case.

mod error;
mod flags;
mod loader;
mod model;
mod parser;
mod registry;
mod scanner;

pub use error::{Error, ParseError, ParseErrorKind};
pub use flags::FlagSet;
pub use loader::{from_path, from_path_with_options};
pub use model::ParseOptions;
pub use parser::{parse_reader, parse_reader_with_options, parse_str, parse_str_with_options};
pub use registry::{Registry, SetOutcome};
