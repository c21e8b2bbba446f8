//! Validation rules for editable fields

use super::config::FieldConfig;
use super::field_kind::{InputKind, ScalarKind};
use super::value::{Record, ScalarValue};

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Numbers must be whole (no fraction, no exponent).
    pub integer: bool,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            integer: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn integer(self) -> Self {
        Self {
            integer: true,
            ..self
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} no puede estar vacío", field_label));
            }
            return Ok(());
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} debe tener al menos {} caracteres", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} no puede superar {} caracteres", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if self.integer && value.fract() != 0.0 {
            return Err(format!("{} debe ser un número entero", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} debe ser como mínimo {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} debe ser como máximo {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Loose e-mail shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

/// Phone check: optional leading `+`, at least six digits, and only spaces,
/// dashes, dots or parentheses as separators.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    let body = value.strip_prefix('+').unwrap_or(value);
    let digits = body.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 6
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
}

fn validate_format(input: InputKind, value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Ok(());
    }
    match input {
        InputKind::Email if !is_valid_email(value) => {
            Err(format!("{} no es un correo electrónico válido", field_label))
        }
        InputKind::Tel if !is_valid_phone(value) => {
            Err(format!("{} no es un teléfono válido", field_label))
        }
        InputKind::Number => value
            .trim()
            .parse::<f64>()
            .map(|_| ())
            .map_err(|_| format!("{} debe ser un número", field_label)),
        _ => Ok(()),
    }
}

/// Parse a numeric slot. Integer rules accept plain digits only, so `7.5` and
/// `1e1` are refused instead of being lost when the slot is sent as an integer.
fn parse_number(rules: &ValidationRules, value: &str, field_label: &str) -> Result<f64, String> {
    let value = value.trim();
    if rules.integer {
        return value
            .parse::<i64>()
            .map(|n| n as f64)
            .map_err(|_| format!("{} debe ser un número entero", field_label));
    }
    value
        .parse::<f64>()
        .map_err(|_| format!("{} debe ser un número", field_label))
}

/// Validate the working copy of a scalar field before it is submitted.
pub fn validate_scalar(
    kind: ScalarKind,
    rules: &ValidationRules,
    value: &ScalarValue,
    field_label: &str,
) -> Result<(), String> {
    match (kind, value) {
        (ScalarKind::Checkbox, ScalarValue::Empty) if rules.required => {
            Err(format!("{} es obligatorio", field_label))
        }
        (ScalarKind::Checkbox, _) => Ok(()),
        (_, ScalarValue::Number(n)) => rules.validate_number(*n, field_label),
        (ScalarKind::Email, v) => {
            rules.validate_string(&v.as_text(), field_label)?;
            validate_format(InputKind::Email, &v.as_text(), field_label)
        }
        (ScalarKind::Tel, v) => {
            rules.validate_string(&v.as_text(), field_label)?;
            validate_format(InputKind::Tel, &v.as_text(), field_label)
        }
        (ScalarKind::Select(options), v) => {
            rules.validate_string(&v.as_text(), field_label)?;
            let code = v.as_text();
            if !code.is_empty() && !options.iter().any(|o| o.value == code) {
                return Err(format!("{}: opción no válida", field_label));
            }
            Ok(())
        }
        (ScalarKind::Text | ScalarKind::Textarea | ScalarKind::Country, v) => {
            rules.validate_string(&v.as_text(), field_label)
        }
    }
}

/// Validate every configured slot of one record.
pub fn validate_record(fields: &[FieldConfig], record: &Record) -> Result<(), String> {
    for field in fields {
        let value = record.get(field.key).map(String::as_str).unwrap_or("");
        field.effective_rules().validate_string(value, field.label)?;
        validate_format(field.input_kind, value, field.label)?;
        if field.input_kind == InputKind::Number && !value.trim().is_empty() {
            let n = parse_number(&field.rules, value, field.label)?;
            field.rules.validate_number(n, field.label)?;
        }
    }
    Ok(())
}

/// Validate each item of a list, prefixing errors with the 1-based position.
pub fn validate_records(fields: &[FieldConfig], items: &[Record]) -> Result<(), String> {
    for (index, item) in items.iter().enumerate() {
        validate_record(fields, item).map_err(|e| format!("#{}: {}", index + 1, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inline_edit::field_kind::SelectOption;

    #[test]
    fn test_required_rejects_whitespace() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Nombre").is_err());
        assert!(rules.validate_string("Lucía", "Nombre").is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rules = ValidationRules::none().with_max_length(5);
        assert!(rules.validate_string("Peñón", "Ciudad").is_ok());
        assert!(rules.validate_string("Peñones", "Ciudad").is_err());
    }

    #[test]
    fn test_optional_empty_passes_other_rules() {
        let rules = ValidationRules {
            min_length: Some(3),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("", "Apodo").is_ok());
        assert!(rules.validate_string("ab", "Apodo").is_err());
    }

    #[test]
    fn test_email_and_phone_shapes() {
        assert!(is_valid_email("ana@hotel.es"));
        assert!(!is_valid_email("ana@hotel"));
        assert!(!is_valid_email("@hotel.es"));
        assert!(!is_valid_email("ana@@hotel.es"));
        assert!(is_valid_phone("+34 (954) 123-456"));
        assert!(!is_valid_phone("12-34"));
        assert!(!is_valid_phone("+34 954 abc 456"));
    }

    #[test]
    fn test_scalar_validation_dispatches_on_kind() {
        let rules = ValidationRules::none();
        let email = |v: ScalarValue| validate_scalar(ScalarKind::Email, &rules, &v, "Email");
        assert!(email(ScalarValue::text("x")).is_err());
        assert!(email(ScalarValue::Empty).is_ok());

        const DOCS: &[SelectOption] = &[SelectOption::new("DNI", "DNI")];
        let kind = ScalarKind::Select(DOCS);
        assert!(validate_scalar(kind, &rules, &ScalarValue::text("DNI"), "Doc").is_ok());
        assert!(validate_scalar(kind, &rules, &ScalarValue::text("XX"), "Doc").is_err());

        let required = ValidationRules::required();
        let vip = |v: ScalarValue| validate_scalar(ScalarKind::Checkbox, &required, &v, "VIP");
        assert!(vip(ScalarValue::Empty).is_err());
        assert!(vip(ScalarValue::Bool(false)).is_ok());
    }

    #[test]
    fn test_record_validation_reports_item_position() {
        const FIELDS: &[FieldConfig] = &[
            FieldConfig::new("name", "Nombre", InputKind::Text).required(),
            FieldConfig::new("age", "Edad", InputKind::Number)
                .rules(ValidationRules::none().with_range(0.0, 120.0)),
        ];
        let mut ok = Record::new();
        ok.insert("name".into(), "Pablo".into());
        ok.insert("age".into(), "7".into());
        let mut bad = Record::new();
        bad.insert("name".into(), "".into());

        assert!(validate_records(FIELDS, &[ok.clone()]).is_ok());
        let err = validate_records(FIELDS, &[ok.clone(), bad]).unwrap_err();
        assert!(err.starts_with("#2:"), "{err}");

        let mut old = ok;
        old.insert("age".into(), "130".into());
        assert!(validate_record(FIELDS, &old).is_err());
    }

    #[test]
    fn test_integer_slot_rejects_fractions_and_exponents() {
        const FIELDS: &[FieldConfig] = &[FieldConfig::new("age", "Edad", InputKind::Number)
            .rules(ValidationRules::none().integer().with_range(0.0, 120.0))];
        let with_age = |age: &str| {
            let mut r = Record::new();
            r.insert("age".into(), age.into());
            r
        };

        assert!(validate_record(FIELDS, &with_age("7")).is_ok());
        assert!(validate_record(FIELDS, &with_age("")).is_ok());
        assert_eq!(
            validate_record(FIELDS, &with_age("7.5")),
            Err("Edad debe ser un número entero".to_string())
        );
        assert!(validate_record(FIELDS, &with_age("1e1")).is_err());
        assert!(validate_record(FIELDS, &with_age("-1")).is_err());

        let rules = ValidationRules::none().integer();
        assert!(rules.validate_number(3.0, "Edad").is_ok());
        assert!(rules.validate_number(3.5, "Edad").is_err());
    }
}
