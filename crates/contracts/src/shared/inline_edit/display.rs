//! Display-mode projections of field values

use super::config::FieldConfig;
use super::field_kind::ScalarKind;
use super::value::{Record, ScalarValue};
use crate::shared::country::country_name;

/// Shown for a field with no value.
pub const EMPTY_PLACEHOLDER: &str = "—";

pub const YES: &str = "Sí";
pub const NO: &str = "No";

/// Text shown for a scalar in display mode.
///
/// `Empty` and whitespace-only text both render as the placeholder dash. A
/// checkbox with no answer renders the dash too, never "No".
pub fn scalar_display(kind: ScalarKind, value: &ScalarValue) -> String {
    if value.is_blank() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    match kind {
        ScalarKind::Checkbox => match value {
            ScalarValue::Bool(true) => YES.to_string(),
            ScalarValue::Bool(false) => NO.to_string(),
            other => other.as_text(),
        },
        ScalarKind::Select(_) => {
            let code = value.as_text();
            kind.option_label(&code)
                .map(str::to_string)
                .unwrap_or(code)
        }
        ScalarKind::Country => country_name(&value.as_text()),
        ScalarKind::Text | ScalarKind::Email | ScalarKind::Tel | ScalarKind::Textarea => {
            value.as_text()
        }
    }
}

/// Non-empty slot values in config order.
fn filled_values<'a>(
    fields: &'a [FieldConfig],
    record: &'a Record,
) -> impl Iterator<Item = &'a str> {
    fields.iter().filter_map(move |f| {
        record
            .get(f.key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    })
}

/// Default display of a nested record: comma-joined non-empty values.
pub fn record_display(fields: &[FieldConfig], record: &Record) -> String {
    let joined = filled_values(fields, record).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        joined
    }
}

/// Default display of one list item: `(label, value)` for each filled slot.
pub fn item_lines(fields: &[FieldConfig], item: &Record) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter_map(|f| {
            let value = item.get(f.key)?.trim();
            if value.is_empty() {
                None
            } else {
                Some((f.label, value.to_string()))
            }
        })
        .collect()
}

/// `"{label}: {value}"` rows of one list item.
pub fn item_display(fields: &[FieldConfig], item: &Record) -> Vec<String> {
    item_lines(fields, item)
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect()
}
