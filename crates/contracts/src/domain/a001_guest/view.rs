//! Guest view-model and DTO mappings
//!
//! `GuestView` is the authoritative committed state the guest page owns.
//! Each attribute is already in renderer shape, so a field's committed value
//! is a plain lookup.

use super::aggregate::{
    AddressDto, CompanionDto, EmergencyContactDto, GuestDto, GuestFieldUpdate, GuestId,
};
use super::fields::{GuestField, GuestFieldShape};
use crate::shared::inline_edit::{
    validate_record, validate_records, validate_scalar, EditError, FieldValue, Record,
    ScalarValue,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GuestView {
    pub id: GuestId,
    pub first_name: ScalarValue,
    pub last_name: ScalarValue,
    pub email: ScalarValue,
    pub phone: ScalarValue,
    pub nationality: ScalarValue,
    pub is_vip: ScalarValue,
    pub document_type: ScalarValue,
    pub document_number: ScalarValue,
    pub notes: ScalarValue,
    pub address: Record,
    pub emergency_contact: Record,
    pub companions: Vec<Record>,
    pub preferences: Vec<String>,
}

fn slot(record: &mut Record, key: &str, value: Option<String>) {
    record.insert(key.to_string(), value.unwrap_or_default());
}

fn take(record: &Record, key: &str) -> Option<String> {
    record
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn address_record(dto: Option<AddressDto>) -> Record {
    let dto = dto.unwrap_or_default();
    let mut r = Record::new();
    slot(&mut r, "street", dto.street);
    slot(&mut r, "city", dto.city);
    slot(&mut r, "postalCode", dto.postal_code);
    slot(&mut r, "province", dto.province);
    slot(&mut r, "country", dto.country);
    r
}

fn emergency_record(dto: Option<EmergencyContactDto>) -> Record {
    let dto = dto.unwrap_or_default();
    let mut r = Record::new();
    slot(&mut r, "name", dto.name);
    slot(&mut r, "relationship", dto.relationship);
    slot(&mut r, "phone", dto.phone);
    r
}

fn companion_record(dto: CompanionDto) -> Record {
    let mut r = Record::new();
    slot(&mut r, "name", Some(dto.name));
    slot(&mut r, "relationship", dto.relationship);
    slot(&mut r, "age", dto.age.map(|a| a.to_string()));
    r
}

impl GuestView {
    pub fn from_dto(dto: GuestDto) -> Self {
        Self {
            id: dto.id,
            first_name: ScalarValue::Text(dto.first_name),
            last_name: ScalarValue::Text(dto.last_name),
            email: ScalarValue::from_option(dto.email),
            phone: ScalarValue::from_option(dto.phone),
            nationality: ScalarValue::from_option(dto.nationality.map(|c| c.to_uppercase())),
            is_vip: dto.is_vip.map(ScalarValue::Bool).unwrap_or_default(),
            document_type: ScalarValue::from_option(dto.document_type),
            document_number: ScalarValue::from_option(dto.document_number),
            notes: ScalarValue::from_option(dto.notes),
            address: address_record(dto.address),
            emergency_contact: emergency_record(dto.emergency_contact),
            companions: dto.companions.into_iter().map(companion_record).collect(),
            preferences: dto.preferences,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.as_text(), self.last_name.as_text())
            .trim()
            .to_string()
    }

    /// Committed value of `field`, in renderer shape.
    pub fn field_value(&self, field: GuestField) -> FieldValue {
        match field {
            GuestField::FirstName => self.first_name.clone().into(),
            GuestField::LastName => self.last_name.clone().into(),
            GuestField::Email => self.email.clone().into(),
            GuestField::Phone => self.phone.clone().into(),
            GuestField::Nationality => self.nationality.clone().into(),
            GuestField::IsVip => self.is_vip.clone().into(),
            GuestField::DocumentType => self.document_type.clone().into(),
            GuestField::DocumentNumber => self.document_number.clone().into(),
            GuestField::Notes => self.notes.clone().into(),
            GuestField::Address => self.address.clone().into(),
            GuestField::EmergencyContact => self.emergency_contact.clone().into(),
            GuestField::Companions => self.companions.clone().into(),
            GuestField::Preferences => self.preferences.clone().into(),
        }
    }

    /// Commit a saved value into the view.
    pub fn set_field(&mut self, field: GuestField, value: FieldValue) -> Result<(), EditError> {
        let expected = self.field_value(field).shape();
        let mismatch = || EditError::ShapeMismatch { expected };
        match (field, value) {
            (GuestField::FirstName, FieldValue::Scalar(v)) => self.first_name = v,
            (GuestField::LastName, FieldValue::Scalar(v)) => self.last_name = v,
            (GuestField::Email, FieldValue::Scalar(v)) => self.email = v,
            (GuestField::Phone, FieldValue::Scalar(v)) => self.phone = v,
            (GuestField::Nationality, FieldValue::Scalar(v)) => self.nationality = v,
            (GuestField::IsVip, FieldValue::Scalar(v)) => self.is_vip = v,
            (GuestField::DocumentType, FieldValue::Scalar(v)) => self.document_type = v,
            (GuestField::DocumentNumber, FieldValue::Scalar(v)) => self.document_number = v,
            (GuestField::Notes, FieldValue::Scalar(v)) => self.notes = v,
            (GuestField::Address, FieldValue::Record(r)) => self.address = r,
            (GuestField::EmergencyContact, FieldValue::Record(r)) => self.emergency_contact = r,
            (GuestField::Companions, FieldValue::Records(items)) => self.companions = items,
            (GuestField::Preferences, FieldValue::Strings(items)) => self.preferences = items,
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    /// Build the PATCH body for one field, in backend wire shape.
    pub fn field_update(
        &self,
        field: GuestField,
        value: &FieldValue,
    ) -> Result<GuestFieldUpdate, String> {
        Ok(GuestFieldUpdate {
            field: field.key().to_string(),
            value: to_wire(field, value)?,
        })
    }

    pub fn to_dto(&self) -> Result<GuestDto, String> {
        Ok(GuestDto {
            id: self.id,
            first_name: self.first_name.as_text(),
            last_name: self.last_name.as_text(),
            email: self.email.to_option(),
            phone: self.phone.to_option(),
            nationality: self.nationality.to_option(),
            is_vip: self.is_vip.as_bool(),
            document_type: self.document_type.to_option(),
            document_number: self.document_number.to_option(),
            notes: self.notes.to_option(),
            address: Some(AddressDto {
                street: take(&self.address, "street"),
                city: take(&self.address, "city"),
                postal_code: take(&self.address, "postalCode"),
                province: take(&self.address, "province"),
                country: take(&self.address, "country"),
            }),
            emergency_contact: Some(EmergencyContactDto {
                name: take(&self.emergency_contact, "name"),
                relationship: take(&self.emergency_contact, "relationship"),
                phone: take(&self.emergency_contact, "phone"),
            }),
            companions: self
                .companions
                .iter()
                .map(companion_dto)
                .collect::<Result<_, _>>()?,
            preferences: self.preferences.clone(),
        })
    }
}

fn companion_dto(record: &Record) -> Result<CompanionDto, String> {
    let age = take(record, "age")
        .map(|a| {
            a.parse::<u32>()
                .map_err(|_| format!("Edad no válida: {}", a))
        })
        .transpose()?;
    Ok(CompanionDto {
        name: take(record, "name").unwrap_or_default(),
        relationship: take(record, "relationship"),
        age,
    })
}

fn is_blank_record(record: &Record) -> bool {
    record.values().all(|v| v.trim().is_empty())
}

/// Wire JSON for a field value. Blank scalars and all-blank records collapse
/// to `null`, companions carry a numeric age, everything else serializes as-is.
fn to_wire(field: GuestField, value: &FieldValue) -> Result<serde_json::Value, String> {
    match (field, value) {
        (_, FieldValue::Scalar(v)) if v.is_blank() => Ok(serde_json::Value::Null),
        (_, FieldValue::Record(r)) if is_blank_record(r) => Ok(serde_json::Value::Null),
        (GuestField::Companions, FieldValue::Records(items)) => {
            let dtos = items
                .iter()
                .map(companion_dto)
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_value(dtos).map_err(|e| format!("Failed to encode companions: {}", e))
        }
        _ => Ok(value.to_json()),
    }
}

/// Validate a working copy of `field` before it is submitted.
pub fn validate_guest_field(field: GuestField, value: &FieldValue) -> Result<(), String> {
    match (field.shape(), value) {
        (GuestFieldShape::Scalar(kind), FieldValue::Scalar(v)) => {
            validate_scalar(kind, &field.rules(), v, field.label())
        }
        (GuestFieldShape::Nested(fields), FieldValue::Record(r)) => {
            // An entirely blank block clears the field and is allowed
            if is_blank_record(r) {
                return Ok(());
            }
            validate_record(fields, r)
        }
        (GuestFieldShape::List(config), FieldValue::Records(items)) => {
            if let Some(max) = config.max_items {
                if items.len() > max {
                    return Err(format!("{}: máximo {} elementos", field.label(), max));
                }
            }
            validate_records(config.fields, items)
        }
        (GuestFieldShape::Tags, FieldValue::Strings(_)) => Ok(()),
        (_, other) => Err(format!(
            "{}: valor con forma inesperada ({})",
            field.label(),
            other.shape()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dto() -> GuestDto {
        serde_json::from_value(json!({
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "firstName": "Lucía",
            "lastName": "Fernández Ruiz",
            "email": "lucia@example.com",
            "phone": null,
            "nationality": "es",
            "isVip": null,
            "documentType": "DNI",
            "documentNumber": "12345678Z",
            "notes": null,
            "address": { "street": "Calle Sierpes 4", "city": "Sevilla", "postalCode": "41004" },
            "emergencyContact": null,
            "companions": [ { "name": "Mateo", "relationship": "hijo", "age": 7 } ],
            "preferences": ["cuna", "planta alta"]
        }))
        .unwrap()
    }

    #[test]
    fn test_maps_dto_to_renderer_shapes() {
        let view = GuestView::from_dto(sample_dto());
        assert_eq!(view.full_name(), "Lucía Fernández Ruiz");
        assert_eq!(view.nationality, ScalarValue::text("ES"));
        assert_eq!(view.phone, ScalarValue::Empty);
        // unknown VIP status stays unknown, not false
        assert_eq!(view.is_vip, ScalarValue::Empty);
        assert_eq!(view.address["street"], "Calle Sierpes 4");
        assert_eq!(view.address["province"], "");
        assert_eq!(view.emergency_contact.len(), 3);
        assert_eq!(view.companions[0]["age"], "7");
        assert_eq!(view.preferences, vec!["cuna", "planta alta"]);
    }

    #[test]
    fn test_dto_round_trips_through_view() {
        let dto = sample_dto();
        let back = GuestView::from_dto(dto.clone()).to_dto().unwrap();
        assert_eq!(back.first_name, dto.first_name);
        assert_eq!(back.nationality.as_deref(), Some("ES"));
        assert_eq!(back.is_vip, None);
        assert_eq!(back.companions, dto.companions);
        assert_eq!(back.address.unwrap().postal_code.as_deref(), Some("41004"));
        assert_eq!(back.emergency_contact.unwrap().name, None);
    }

    #[test]
    fn test_set_field_commits_and_checks_shape() {
        let mut view = GuestView::from_dto(sample_dto());
        view.set_field(GuestField::IsVip, ScalarValue::Bool(true).into())
            .unwrap();
        assert_eq!(
            view.field_value(GuestField::IsVip),
            FieldValue::Scalar(ScalarValue::Bool(true))
        );

        let err = view
            .set_field(GuestField::Address, ScalarValue::text("x").into())
            .unwrap_err();
        assert_eq!(err, EditError::ShapeMismatch { expected: "record" });
    }

    #[test]
    fn test_field_update_uses_wire_shape() {
        let view = GuestView::from_dto(sample_dto());
        let update = view
            .field_update(GuestField::Phone, &ScalarValue::text("").into())
            .unwrap();
        assert_eq!(update.field, "phone");
        assert_eq!(update.value, serde_json::Value::Null);

        let update = view
            .field_update(
                GuestField::Companions,
                &view.field_value(GuestField::Companions),
            )
            .unwrap();
        assert_eq!(
            update.value,
            json!([{ "name": "Mateo", "relationship": "hijo", "age": 7 }])
        );
    }

    #[test]
    fn test_validation_follows_field_catalogue() {
        let scalar = |field: GuestField, text: &str| {
            validate_guest_field(field, &ScalarValue::text(text).into())
        };
        assert!(scalar(GuestField::FirstName, " ").is_err());
        assert!(scalar(GuestField::Email, "a@b.es").is_ok());
        assert!(scalar(GuestField::Email, "a@b").is_err());

        let mut contact = Record::new();
        contact.insert("name".into(), "Rosa".into());
        contact.insert("phone".into(), "".into());
        let result = validate_guest_field(GuestField::EmergencyContact, &contact.clone().into());
        assert!(result.is_err());
        contact.insert("phone".into(), "+34 600 111 222".into());
        assert!(validate_guest_field(GuestField::EmergencyContact, &contact.into()).is_ok());
        assert!(validate_guest_field(GuestField::EmergencyContact, &Record::new().into()).is_ok());

        assert!(validate_guest_field(GuestField::Preferences, &ScalarValue::Empty.into()).is_err());
    }

    #[test]
    fn test_fractional_companion_age_is_refused_not_dropped() {
        let view = GuestView::from_dto(sample_dto());
        let mut companion = view.companions[0].clone();
        companion.insert("age".into(), "7.5".into());
        let value: FieldValue = vec![companion].into();

        assert!(validate_guest_field(GuestField::Companions, &value).is_err());
        // Even unvalidated, the age never silently becomes null on the wire
        assert!(view.field_update(GuestField::Companions, &value).is_err());
    }

    #[test]
    fn test_cleared_block_is_sent_as_null() {
        let view = GuestView::from_dto(sample_dto());
        let blank = view.field_value(GuestField::EmergencyContact);
        assert!(validate_guest_field(GuestField::EmergencyContact, &blank).is_ok());

        let update = view
            .field_update(GuestField::EmergencyContact, &blank)
            .unwrap();
        assert_eq!(update.value, serde_json::Value::Null);

        let update = view
            .field_update(GuestField::Address, &view.field_value(GuestField::Address))
            .unwrap();
        assert_eq!(update.value["street"], "Calle Sierpes 4");
    }
}
