use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;
use crate::model::ParseOptions;
use crate::parser::parse_lines;
use crate::registry::Registry;

/// Open a configuration file, parse it into a registry, and close it.
///
/// Errors produced while parsing carry the path; a failure to open the file
/// is returned as [`Error::Io`] with no positional context.
pub fn from_path<P, R>(path: P, registry: &mut R) -> Result<(), Error>
where
    P: AsRef<Path>,
    R: Registry + ?Sized,
{
    from_path_with_options(path, registry, &ParseOptions::default())
}

/// Open a configuration file and parse it with explicit options.
pub fn from_path_with_options<P, R>(
    path: P,
    registry: &mut R,
    options: &ParseOptions,
) -> Result<(), Error>
where
    P: AsRef<Path>,
    R: Registry + ?Sized,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    // The handle drops on every exit path; nothing is retained after return.
    parse_lines(reader.lines(), registry, options, Some(path)).map_err(Error::from)
}
