use std::collections::BTreeMap;

/// Outcome of one [`Registry::try_set`] call.
///
/// The parser branches on the variant, never on message text, so registries
/// are free to word their rejection reasons however they like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The value was coerced and stored.
    Applied,
    /// No setting is registered under this key.
    UnknownKey,
    /// The key exists but the value failed its coercion or validation.
    Rejected(String),
}

/// A mapping from effective key to a typed setter.
///
/// The parser only ever calls [`try_set`](Self::try_set); registration,
/// coercion rules, and repeated-assignment semantics (last write wins in the
/// provided implementations) belong to the registry.
pub trait Registry {
    fn try_set(&mut self, key: &str, value: &str) -> SetOutcome;
}

/// Accept-all registry: stores every assignment verbatim.
impl Registry for BTreeMap<String, String> {
    fn try_set(&mut self, key: &str, value: &str) -> SetOutcome {
        self.insert(key.to_owned(), value.to_owned());
        SetOutcome::Applied
    }
}
