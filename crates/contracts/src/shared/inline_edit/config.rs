//! Field Config: caller-supplied schema of nested and list sub-fields

use super::field_kind::InputKind;
use super::validation::ValidationRules;
use super::value::Record;

/// One editable sub-field of a nested record or list item.
///
/// The ordered slice of configs fixes both the edit inputs and the default
/// display projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub key: &'static str,
    pub label: &'static str,
    pub input_kind: InputKind,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub rules: ValidationRules,
}

impl FieldConfig {
    pub const fn new(key: &'static str, label: &'static str, input_kind: InputKind) -> Self {
        Self {
            key,
            label,
            input_kind,
            placeholder: None,
            required: false,
            rules: ValidationRules::none(),
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder: Some(placeholder),
            ..self
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn rules(self, rules: ValidationRules) -> Self {
        Self { rules, ..self }
    }

    /// Rules with the `required` flag folded in.
    pub fn effective_rules(&self) -> ValidationRules {
        ValidationRules {
            required: self.required || self.rules.required,
            ..self.rules
        }
    }
}

/// Record with every configured key set to the empty string.
pub fn empty_record(fields: &[FieldConfig]) -> Record {
    fields
        .iter()
        .map(|f| (f.key.to_string(), String::new()))
        .collect()
}

/// Configuration of an array-of-records field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    pub fields: &'static [FieldConfig],
    pub max_items: Option<usize>,
    pub empty_message: &'static str,
    pub add_label: &'static str,
}

impl ListConfig {
    pub const fn new(fields: &'static [FieldConfig]) -> Self {
        Self {
            fields,
            max_items: None,
            empty_message: "Sin elementos",
            add_label: "Añadir",
        }
    }

    pub const fn max_items(self, max: usize) -> Self {
        Self {
            max_items: Some(max),
            ..self
        }
    }

    pub const fn empty_message(self, message: &'static str) -> Self {
        Self {
            empty_message: message,
            ..self
        }
    }

    pub const fn add_label(self, label: &'static str) -> Self {
        Self {
            add_label: label,
            ..self
        }
    }

    /// Whether the add affordance is shown for a list of `len` items.
    pub fn can_add(&self, len: usize) -> bool {
        self.max_items.map_or(true, |max| len < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT: &[FieldConfig] = &[
        FieldConfig::new("name", "Nombre", InputKind::Text).required(),
        FieldConfig::new("phone", "Teléfono", InputKind::Tel).placeholder("+34 ..."),
    ];

    #[test]
    fn test_empty_record_has_every_key() {
        let record = empty_record(CONTACT);
        assert_eq!(record.len(), 2);
        assert!(record.values().all(String::is_empty));
    }

    #[test]
    fn test_required_flag_feeds_rules() {
        assert!(CONTACT[0].effective_rules().required);
        assert!(!CONTACT[1].effective_rules().required);
        assert_eq!(CONTACT[1].placeholder, Some("+34 ..."));
    }

    #[test]
    fn test_can_add_respects_ceiling() {
        let unlimited = ListConfig::new(CONTACT);
        assert!(unlimited.can_add(1000));
        let capped = ListConfig::new(CONTACT).max_items(2);
        assert!(capped.can_add(1));
        assert!(!capped.can_add(2));
    }
}
