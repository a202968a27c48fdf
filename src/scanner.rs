/// Classified content of one physical line, borrowing from the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScannedLine<'a> {
    Blank,
    Section(&'a str),
    Assignment { key: &'a str, value: &'a str },
    Malformed(&'a str),
}

/// Classify one physical line.
///
/// Comment stripping runs before section and assignment detection, so a `#`
/// or `;` inside a bracketed header or an unquoted value truncates the line.
/// There is no quoting or escape mechanism.
pub(crate) fn scan_line(raw: &str) -> ScannedLine<'_> {
    let text = match raw.find(['#', ';']) {
        Some(comment) => &raw[..comment],
        None => raw,
    };
    let text = text.trim();
    if text.is_empty() {
        return ScannedLine::Blank;
    }

    // `[]` is a valid header naming the root scope.
    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        return ScannedLine::Section(&text[1..text.len() - 1]);
    }

    // Split at the first `=` so values may contain `=` (URLs, base64).
    let Some(equals) = text.find('=') else {
        return ScannedLine::Malformed(text);
    };
    ScannedLine::Assignment {
        key: text[..equals].trim(),
        value: text[equals + 1..].trim(),
    }
}
