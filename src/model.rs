/// Behavioral options for one parse call.
///
/// Options are plain immutable values; entry points without an options
/// parameter build `ParseOptions::default()` on demand, so there is no shared
/// parser state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Skip assignments the registry does not recognize instead of aborting.
    pub allow_unknown_keys: bool,
    /// Compose `[section]` headers into dotted keys (`sec.key`). When off,
    /// headers are still recognized syntactically but never affect keys.
    pub parse_sections: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_unknown_keys(mut self, allow_unknown_keys: bool) -> Self {
        self.allow_unknown_keys = allow_unknown_keys;
        self
    }

    pub fn parse_sections(mut self, parse_sections: bool) -> Self {
        self.parse_sections = parse_sections;
        self
    }
}
