use std::collections::BTreeMap;

use crate::registry::{Registry, SetOutcome};

/// Built-in typed registry: named flags with defaults, coerced on assignment.
///
/// Each flag holds its current value; assigning through
/// [`try_set`](Registry::try_set) parses the string according to the flag's
/// type and rejects values that do not coerce. Repeated assignment keeps the
/// last value. Registering a name again replaces the flag.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: BTreeMap<String, FlagValue>,
}

#[derive(Debug, Clone, PartialEq)]
enum FlagValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_bool(&mut self, name: &str, default: bool) {
        self.flags.insert(name.to_owned(), FlagValue::Bool(default));
    }

    pub fn define_int(&mut self, name: &str, default: i64) {
        self.flags.insert(name.to_owned(), FlagValue::Int(default));
    }

    pub fn define_uint(&mut self, name: &str, default: u64) {
        self.flags.insert(name.to_owned(), FlagValue::Uint(default));
    }

    pub fn define_float(&mut self, name: &str, default: f64) {
        self.flags.insert(name.to_owned(), FlagValue::Float(default));
    }

    pub fn define_str(&mut self, name: &str, default: &str) {
        self.flags
            .insert(name.to_owned(), FlagValue::Str(default.to_owned()));
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.flags.get(name) {
            Some(FlagValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.flags.get(name) {
            Some(FlagValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_uint(&self, name: &str) -> Option<u64> {
        match self.flags.get(name) {
            Some(FlagValue::Uint(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.flags.get(name) {
            Some(FlagValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Str(value)) => Some(value),
            _ => None,
        }
    }
}

impl Registry for FlagSet {
    fn try_set(&mut self, key: &str, value: &str) -> SetOutcome {
        let Some(slot) = self.flags.get_mut(key) else {
            return SetOutcome::UnknownKey;
        };

        match slot {
            FlagValue::Bool(stored) => match parse_bool(value) {
                Some(parsed) => {
                    *stored = parsed;
                    SetOutcome::Applied
                }
                None => SetOutcome::Rejected(format!("invalid boolean value {value:?}")),
            },
            FlagValue::Int(stored) => match value.parse() {
                Ok(parsed) => {
                    *stored = parsed;
                    SetOutcome::Applied
                }
                Err(_) => SetOutcome::Rejected(format!("invalid integer value {value:?}")),
            },
            FlagValue::Uint(stored) => match value.parse() {
                Ok(parsed) => {
                    *stored = parsed;
                    SetOutcome::Applied
                }
                Err(_) => {
                    SetOutcome::Rejected(format!("invalid unsigned integer value {value:?}"))
                }
            },
            FlagValue::Float(stored) => match value.parse() {
                Ok(parsed) => {
                    *stored = parsed;
                    SetOutcome::Applied
                }
                Err(_) => SetOutcome::Rejected(format!("invalid float value {value:?}")),
            },
            FlagValue::Str(stored) => {
                *stored = value.to_owned();
                SetOutcome::Applied
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
