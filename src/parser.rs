use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, ParseError, ParseErrorKind};
use crate::model::ParseOptions;
use crate::registry::{Registry, SetOutcome};
use crate::scanner::{ScannedLine, scan_line};

/// Parse configuration text into a registry with default options.
pub fn parse_str<R>(input: &str, registry: &mut R) -> Result<(), Error>
where
    R: Registry + ?Sized,
{
    parse_str_with_options(input, registry, &ParseOptions::default())
}

/// Parse configuration text into a registry with explicit options.
pub fn parse_str_with_options<R>(
    input: &str,
    registry: &mut R,
    options: &ParseOptions,
) -> Result<(), Error>
where
    R: Registry + ?Sized,
{
    parse_lines(input.lines().map(Ok), registry, options, None).map_err(Error::from)
}

/// Parse configuration from a buffered reader with default options.
pub fn parse_reader<B, R>(reader: B, registry: &mut R) -> Result<(), Error>
where
    B: BufRead,
    R: Registry + ?Sized,
{
    parse_reader_with_options(reader, registry, &ParseOptions::default())
}

/// Parse configuration from a buffered reader with explicit options.
///
/// The stream is consumed line-by-line in a single pass; memory use does not
/// depend on input size.
pub fn parse_reader_with_options<B, R>(
    reader: B,
    registry: &mut R,
    options: &ParseOptions,
) -> Result<(), Error>
where
    B: BufRead,
    R: Registry + ?Sized,
{
    parse_lines(reader.lines(), registry, options, None).map_err(Error::from)
}

/// Drive the scanner over each line, maintaining section scope and
/// dispatching assignments to the registry.
///
/// Every error leaves here wrapped exactly once with the 1-based line number
/// and, when `source` is known, the file path. The line counter advances for
/// every physical line regardless of classification, so positions stay
/// accurate past blank and comment lines.
pub(crate) fn parse_lines<I, S, R>(
    lines: I,
    registry: &mut R,
    options: &ParseOptions,
    source: Option<&Path>,
) -> Result<(), ParseError>
where
    I: IntoIterator<Item = std::io::Result<S>>,
    S: AsRef<str>,
    R: Registry + ?Sized,
{
    let fail =
        |line: u32, kind: ParseErrorKind| ParseError::new(source.map(Path::to_path_buf), line, kind);

    let mut line_num = 0u32;
    let mut section = String::new();

    for raw in lines {
        let raw = match raw {
            Ok(raw) => raw,
            // Read failures are attributed to the last consumed line; there
            // is no current line once the stream itself breaks.
            Err(err) => return Err(fail(line_num, ParseErrorKind::Read(err))),
        };
        line_num += 1;

        match scan_line(raw.as_ref()) {
            ScannedLine::Blank => {}
            ScannedLine::Section(name) => {
                // With sections disabled the header is recognized but inert,
                // matching configurations written before section support.
                if options.parse_sections {
                    section.clear();
                    section.push_str(name);
                }
            }
            ScannedLine::Malformed(text) => {
                return Err(fail(line_num, ParseErrorKind::Malformed(text.to_owned())));
            }
            ScannedLine::Assignment { key, value } => {
                let effective = effective_key(&section, key);
                match registry.try_set(&effective, value) {
                    SetOutcome::Applied => {}
                    SetOutcome::UnknownKey if options.allow_unknown_keys => {}
                    SetOutcome::UnknownKey => {
                        return Err(fail(line_num, ParseErrorKind::UnknownKey(effective)));
                    }
                    SetOutcome::Rejected(reason) => {
                        return Err(fail(
                            line_num,
                            ParseErrorKind::Rejected {
                                key: effective,
                                reason,
                            },
                        ));
                    }
                }
            }
        }
    }

    Ok(())
}

fn effective_key(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_owned()
    } else {
        format!("{section}.{key}")
    }
}
