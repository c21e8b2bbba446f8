use super::config::ListConfig;
use super::error::EditError;
use super::list;
use super::string_list::split_list;
use super::value::{FieldValue, ScalarValue};

/// A change to the working copy emitted by any renderer.
///
/// Scalar, nested, list and string-list renderers all report through this one
/// message type, so a parent handles every field with the same `on_change`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    /// Replace a scalar value.
    Set(ScalarValue),
    /// Set one slot of a nested record.
    SetSlot { key: String, value: String },
    /// Set one slot of the list item at `index`.
    SetItemSlot {
        index: usize,
        key: String,
        value: String,
    },
    /// Append a blank item shaped by the list config.
    AddItem(ListConfig),
    RemoveItem(usize),
    /// Raw textarea content of a string list, split on commas.
    SetText(String),
}

impl FieldPatch {
    pub fn slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetSlot {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn item_slot(index: usize, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetItemSlot {
            index,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Apply the patch in place. The target keeps its shape.
    pub fn apply(self, target: &mut FieldValue) -> Result<(), EditError> {
        match (self, target) {
            (Self::Set(value), FieldValue::Scalar(current)) => {
                *current = value;
                Ok(())
            }
            (Self::SetSlot { key, value }, FieldValue::Record(record)) => {
                record.insert(key, value);
                Ok(())
            }
            (Self::SetItemSlot { index, key, value }, FieldValue::Records(items)) => {
                list::set_item_slot(items, index, &key, value)
            }
            (Self::AddItem(config), FieldValue::Records(items)) => list::add_item(items, &config),
            (Self::RemoveItem(index), FieldValue::Records(items)) => {
                list::remove_item(items, index).map(|_| ())
            }
            (Self::SetText(text), FieldValue::Strings(items)) => {
                *items = split_list(&text);
                Ok(())
            }
            (_, target) => Err(EditError::ShapeMismatch {
                expected: target.shape(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inline_edit::config::FieldConfig;
    use crate::shared::inline_edit::field_kind::InputKind;
    use crate::shared::inline_edit::value::Record;

    const FIELDS: &[FieldConfig] = &[FieldConfig::new("name", "Nombre", InputKind::Text)];

    #[test]
    fn test_slot_patch_touches_one_key() {
        let mut record = Record::new();
        record.insert("street".into(), "Main".into());
        record.insert("city".into(), "Cádiz".into());
        let mut value = FieldValue::Record(record);

        FieldPatch::slot("city", "Huelva").apply(&mut value).unwrap();
        let record = value.as_record().unwrap();
        assert_eq!(record["street"], "Main");
        assert_eq!(record["city"], "Huelva");
    }

    #[test]
    fn test_list_patches_compose() {
        let mut value = FieldValue::Records(Vec::new());
        let config = ListConfig::new(FIELDS).max_items(2);

        FieldPatch::AddItem(config).apply(&mut value).unwrap();
        FieldPatch::AddItem(config).apply(&mut value).unwrap();
        FieldPatch::item_slot(1, "name", "Marta").apply(&mut value).unwrap();
        FieldPatch::RemoveItem(0).apply(&mut value).unwrap();

        let items = value.as_records().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Marta");
    }

    #[test]
    fn test_text_patch_splits_string_list() {
        let mut value = FieldValue::Strings(vec![]);
        FieldPatch::SetText("cuna, vista al mar,".into())
            .apply(&mut value)
            .unwrap();
        assert_eq!(value.as_strings().unwrap(), ["cuna", "vista al mar"]);
    }

    #[test]
    fn test_mismatched_patch_is_rejected() {
        let mut value = FieldValue::Scalar(ScalarValue::Empty);
        let err = FieldPatch::RemoveItem(0).apply(&mut value).unwrap_err();
        assert_eq!(err, EditError::ShapeMismatch { expected: "scalar" });
        assert_eq!(value, FieldValue::Scalar(ScalarValue::Empty));
    }
}
