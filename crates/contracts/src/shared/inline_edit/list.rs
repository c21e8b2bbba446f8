//! Operations on the working copy of an array-of-records field.
//!
//! Position is the only identity list items have, so removal always shifts
//! the tail down and never leaves gaps.

use super::config::{empty_record, ListConfig};
use super::error::EditError;
use super::value::Record;

/// Append a blank item shaped by `config.fields`.
pub fn add_item(items: &mut Vec<Record>, config: &ListConfig) -> Result<(), EditError> {
    if !config.can_add(items.len()) {
        return Err(EditError::CapacityReached(items.len()));
    }
    items.push(empty_record(config.fields));
    Ok(())
}

/// Remove the item at `index`, returning it.
pub fn remove_item(items: &mut Vec<Record>, index: usize) -> Result<Record, EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

/// Set one slot of the item at `index`.
pub fn set_item_slot(
    items: &mut [Record],
    index: usize,
    key: &str,
    value: String,
) -> Result<(), EditError> {
    let len = items.len();
    let item = items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { index, len })?;
    item.insert(key.to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inline_edit::config::FieldConfig;
    use crate::shared::inline_edit::field_kind::InputKind;

    const FIELDS: &[FieldConfig] = &[
        FieldConfig::new("name", "Nombre", InputKind::Text),
        FieldConfig::new("relationship", "Parentesco", InputKind::Text),
    ];

    fn named(name: &str) -> Record {
        let mut r = empty_record(FIELDS);
        r.insert("name".into(), name.into());
        r
    }

    #[test]
    fn test_add_then_remove_last_restores_list() {
        let config = ListConfig::new(FIELDS);
        let original = vec![named("Ana"), named("Luis")];
        let mut items = original.clone();

        add_item(&mut items, &config).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], empty_record(FIELDS));

        let last = items.len() - 1;
        remove_item(&mut items, last).unwrap();
        assert_eq!(items, original);
    }

    #[test]
    fn test_remove_shifts_following_items_down() {
        let original = vec![named("a"), named("b"), named("c"), named("d")];
        for i in 0..original.len() - 1 {
            let mut items = original.clone();
            let removed = remove_item(&mut items, i).unwrap();
            assert_eq!(removed, original[i]);
            assert_eq!(items.len(), original.len() - 1);
            assert_eq!(items[i], original[i + 1]);
            assert_eq!(&items[i..], &original[i + 1..]);
        }
    }

    #[test]
    fn test_add_visibility_follows_ceiling() {
        let config = ListConfig::new(FIELDS).max_items(2);
        let mut items = Vec::new();
        assert!(config.can_add(items.len()));

        add_item(&mut items, &config).unwrap();
        add_item(&mut items, &config).unwrap();
        assert!(!config.can_add(items.len()));
        assert_eq!(add_item(&mut items, &config), Err(EditError::CapacityReached(2)));

        remove_item(&mut items, 0).unwrap();
        assert!(config.can_add(items.len()));
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let mut items = vec![named("a")];
        assert_eq!(
            remove_item(&mut items, 3),
            Err(EditError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(set_item_slot(&mut items, 1, "name", "b".into()).is_err());
        set_item_slot(&mut items, 0, "name", "b".into()).unwrap();
        assert_eq!(items[0]["name"], "b");
    }
}
