//! Field catalogue of the guest profile form

use crate::shared::inline_edit::{
    empty_record, FieldConfig, FieldValue, InputKind, ListConfig, ScalarKind, ScalarValue,
    SelectOption, ValidationRules,
};

pub const DOCUMENT_TYPES: &[SelectOption] = &[
    SelectOption::new("DNI", "DNI"),
    SelectOption::new("NIE", "NIE"),
    SelectOption::new("PASSPORT", "Pasaporte"),
    SelectOption::new("ID_CARD", "Documento de identidad extranjero"),
    SelectOption::new("DRIVING_LICENSE", "Permiso de conducir"),
];

pub const ADDRESS_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("street", "Dirección", InputKind::Text).placeholder("Calle y número"),
    FieldConfig::new("city", "Ciudad", InputKind::Text),
    FieldConfig::new("postalCode", "Código postal", InputKind::Text)
        .rules(ValidationRules::none().with_max_length(10)),
    FieldConfig::new("province", "Provincia", InputKind::Text),
    FieldConfig::new("country", "País", InputKind::Text),
];

pub const EMERGENCY_CONTACT_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("name", "Nombre", InputKind::Text).required(),
    FieldConfig::new("relationship", "Parentesco", InputKind::Text).placeholder("Ej.: madre"),
    FieldConfig::new("phone", "Teléfono", InputKind::Tel)
        .placeholder("+34 600 000 000")
        .required(),
];

pub const COMPANION_FIELDS: &[FieldConfig] = &[
    FieldConfig::new("name", "Nombre", InputKind::Text).required(),
    FieldConfig::new("relationship", "Parentesco", InputKind::Text),
    FieldConfig::new("age", "Edad", InputKind::Number)
        .rules(ValidationRules::none().integer().with_range(0.0, 120.0)),
];

pub const COMPANIONS: ListConfig = ListConfig::new(COMPANION_FIELDS)
    .max_items(4)
    .empty_message("Sin acompañantes registrados")
    .add_label("Añadir acompañante");

/// Shape of a guest field, selecting its renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuestFieldShape {
    Scalar(ScalarKind),
    Nested(&'static [FieldConfig]),
    List(ListConfig),
    Tags,
}

impl GuestFieldShape {
    /// Value shown before the guest has loaded.
    pub fn empty_value(&self) -> FieldValue {
        match self {
            Self::Scalar(_) => FieldValue::Scalar(ScalarValue::Empty),
            Self::Nested(fields) => FieldValue::Record(empty_record(fields)),
            Self::List(_) => FieldValue::Records(Vec::new()),
            Self::Tags => FieldValue::Strings(Vec::new()),
        }
    }
}

/// Every inline-editable attribute of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GuestField {
    FirstName,
    LastName,
    Email,
    Phone,
    Nationality,
    IsVip,
    DocumentType,
    DocumentNumber,
    Notes,
    Address,
    EmergencyContact,
    Companions,
    Preferences,
}

impl GuestField {
    pub const ALL: [GuestField; 13] = [
        GuestField::FirstName,
        GuestField::LastName,
        GuestField::Email,
        GuestField::Phone,
        GuestField::Nationality,
        GuestField::IsVip,
        GuestField::DocumentType,
        GuestField::DocumentNumber,
        GuestField::Notes,
        GuestField::Address,
        GuestField::EmergencyContact,
        GuestField::Companions,
        GuestField::Preferences,
    ];

    /// Key used on the wire (`GuestFieldUpdate::field`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Nationality => "nationality",
            Self::IsVip => "isVip",
            Self::DocumentType => "documentType",
            Self::DocumentNumber => "documentNumber",
            Self::Notes => "notes",
            Self::Address => "address",
            Self::EmergencyContact => "emergencyContact",
            Self::Companions => "companions",
            Self::Preferences => "preferences",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "Nombre",
            Self::LastName => "Apellidos",
            Self::Email => "Correo electrónico",
            Self::Phone => "Teléfono",
            Self::Nationality => "Nacionalidad",
            Self::IsVip => "Cliente VIP",
            Self::DocumentType => "Tipo de documento",
            Self::DocumentNumber => "Número de documento",
            Self::Notes => "Observaciones",
            Self::Address => "Domicilio",
            Self::EmergencyContact => "Contacto de emergencia",
            Self::Companions => "Acompañantes",
            Self::Preferences => "Preferencias",
        }
    }

    pub fn shape(&self) -> GuestFieldShape {
        match self {
            Self::FirstName | Self::LastName | Self::DocumentNumber => {
                GuestFieldShape::Scalar(ScalarKind::Text)
            }
            Self::Email => GuestFieldShape::Scalar(ScalarKind::Email),
            Self::Phone => GuestFieldShape::Scalar(ScalarKind::Tel),
            Self::Nationality => GuestFieldShape::Scalar(ScalarKind::Country),
            Self::IsVip => GuestFieldShape::Scalar(ScalarKind::Checkbox),
            Self::DocumentType => GuestFieldShape::Scalar(ScalarKind::Select(DOCUMENT_TYPES)),
            Self::Notes => GuestFieldShape::Scalar(ScalarKind::Textarea),
            Self::Address => GuestFieldShape::Nested(ADDRESS_FIELDS),
            Self::EmergencyContact => GuestFieldShape::Nested(EMERGENCY_CONTACT_FIELDS),
            Self::Companions => GuestFieldShape::List(COMPANIONS),
            Self::Preferences => GuestFieldShape::Tags,
        }
    }

    pub fn rules(&self) -> ValidationRules {
        match self {
            Self::FirstName | Self::LastName => ValidationRules::required().with_max_length(80),
            Self::DocumentNumber => ValidationRules::none().with_max_length(20),
            Self::Notes => ValidationRules::none().with_max_length(1000),
            _ => ValidationRules::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for field in GuestField::ALL {
            assert_eq!(GuestField::from_key(field.key()), Some(field));
        }
        assert_eq!(GuestField::from_key("roomNumber"), None);
    }

    #[test]
    fn test_empty_values_match_field_shapes() {
        let address = GuestField::Address.shape().empty_value();
        assert_eq!(address.as_record().map(|r| r.len()), Some(ADDRESS_FIELDS.len()));
        assert_eq!(GuestField::Preferences.shape().empty_value().shape(), "strings");
        assert_eq!(GuestField::Companions.shape().empty_value().shape(), "records");
        assert_eq!(
            GuestField::IsVip.shape().empty_value(),
            FieldValue::Scalar(ScalarValue::Empty)
        );
    }

    #[test]
    fn test_companions_are_capped() {
        assert_eq!(COMPANIONS.max_items, Some(4));
        assert!(COMPANIONS.can_add(3));
        assert!(!COMPANIONS.can_add(4));
    }
}
