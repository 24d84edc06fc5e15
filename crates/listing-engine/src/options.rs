//! Option-list resolution
//!
//! Columns backed by an option list store codes (`"a||b"`); the
//! listing shows labels (`"Alpha, Beta"`). `OptionResolver` loads the
//! code→label map for each displayed column. Maps are recomputed per
//! request, one field-definition lookup per displayed column, and
//! never cached across requests.

use crate::Result;
use listing_model::FieldSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Code→label map for one field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionMap {
    values: HashMap<String, String>,
    /// Whether the field's kind stores `||`-delimited multi-values.
    /// Informational; the transform splits scalars either way.
    pub multiple: bool,
}

impl OptionMap {
    /// The display label for a stored code
    pub fn label(&self, code: &str) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolves option lists for a set of field names
pub struct OptionResolver {
    fields: Arc<dyn FieldSource>,
}

impl OptionResolver {
    pub fn new(fields: Arc<dyn FieldSource>) -> Self {
        Self { fields }
    }

    /// Resolve the option maps for the given field names
    ///
    /// A name is absent from the result when it has no field
    /// definition, no raw option source, or its source decodes to
    /// nothing. Decoded entries are normalized: an empty label takes
    /// the code, an empty code takes the label.
    pub fn resolve(&self, names: &[String]) -> Result<HashMap<String, OptionMap>> {
        let mut result = HashMap::new();

        for name in names {
            let Some(definition) = self.fields.definition(name)? else {
                continue;
            };
            if definition.elements.is_empty() {
                continue;
            }

            let mut values = HashMap::new();
            for option in self.fields.decode_options(&definition.elements)? {
                let mut value = option.value;
                let mut key = option.key;
                if value.is_empty() {
                    value = key.clone();
                }
                if key.is_empty() {
                    key = value.clone();
                }
                values.insert(key, value);
            }

            if values.is_empty() {
                continue;
            }
            result.insert(
                name.clone(),
                OptionMap {
                    values,
                    multiple: definition.kind.is_multiple(),
                },
            );
        }

        Ok(result)
    }
}
