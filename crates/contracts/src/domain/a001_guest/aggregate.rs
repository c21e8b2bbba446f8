use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id! {
    /// Unique guest identifier
    GuestId
}

// ============================================================================
// Wire DTOs (backend shape)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactDto {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionDto {
    pub name: String,
    pub relationship: Option<String>,
    pub age: Option<u32>,
}

/// Guest as returned by `GET /api/guests/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub is_vip: Option<bool>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub notes: Option<String>,
    pub address: Option<AddressDto>,
    pub emergency_contact: Option<EmergencyContactDto>,
    #[serde(default)]
    pub companions: Vec<CompanionDto>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Body of `PATCH /api/guests/{id}`: one field per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestFieldUpdate {
    pub field: String,
    pub value: serde_json::Value,
}
