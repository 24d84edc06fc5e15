//! Cell rendering handoff
//!
//! The engine does not interpret renderer output; it only routes a
//! cell's value through the column's renderer hook when one is
//! configured and registered.

use listing_config::{Column, HookRegistry, ListingConfig};
use listing_model::{FieldValue, Row};

/// Render one cell of a row
///
/// Applies the column's renderer hook when configured; otherwise the
/// scalar display value is returned as-is, and non-scalar values
/// render empty.
pub fn render_cell(
    hooks: &HookRegistry,
    column: &Column,
    row: &Row,
    config: &ListingConfig,
) -> String {
    let value = row.value(&column.name);

    if let Some(name) = &column.renderer {
        if let Some(renderer) = hooks.renderer(name) {
            return renderer(value, row, config);
        }
        tracing::warn!(hook = %name, column = %column.name, "Configured renderer is not registered");
    }

    match value {
        FieldValue::Scalar(s) => s.clone(),
        _ => String::new(),
    }
}
