//! In-memory template-variable subsystem
//!
//! Field definitions are registered up front; option-list sources use
//! the `label==code` entry format with `||` between entries, e.g.
//! `"Alpha==a||Beta==b"`. An entry without `==` yields an option with
//! an empty key, which the option resolver normalizes.

use listing_model::{FieldDefinition, FieldKind, FieldSource, RawOption, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory field-definition source
#[derive(Default)]
pub struct MemoryFields {
    definitions: Mutex<HashMap<String, FieldDefinition>>,
}

impl MemoryFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field definition under its name
    pub fn define(&self, name: impl Into<String>, kind: FieldKind, elements: impl Into<String>) {
        let name = name.into();
        let definition = FieldDefinition {
            name: name.clone(),
            kind,
            elements: elements.into(),
        };
        self.definitions.lock().unwrap().insert(name, definition);
    }
}

impl FieldSource for MemoryFields {
    fn definition(&self, name: &str) -> Result<Option<FieldDefinition>> {
        Ok(self.definitions.lock().unwrap().get(name).cloned())
    }

    fn decode_options(&self, raw: &str) -> Result<Vec<RawOption>> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let options = raw
            .split("||")
            .map(|entry| match entry.split_once("==") {
                Some((value, key)) => RawOption {
                    value: value.to_string(),
                    key: key.to_string(),
                },
                None => RawOption {
                    value: entry.to_string(),
                    key: String::new(),
                },
            })
            .collect();
        Ok(options)
    }
}
