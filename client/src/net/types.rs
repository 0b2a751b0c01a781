//! Wire DTOs for the facility REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON field names (French column names
//! included) so serde maps them without renames. Optional columns are
//! `Option` with `#[serde(default)]`. Text columns the UI always renders go
//! through `null_as_default`, so a `null` decodes as empty instead of
//! failing the whole list. Request payloads are separate structs so
//! list/detail shapes can drift independently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Records that carry a numeric backend identifier.
pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

// =============================================================================
// RESIDENTS
// =============================================================================

/// A care-facility occupant as returned by `/residents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nom: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prenom: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_naissance: String,
    #[serde(default)]
    pub mutuelle_id: Option<i64>,
    #[serde(default)]
    pub niss: Option<String>,
    #[serde(default)]
    pub medecin_traitant_id: Option<i64>,
    #[serde(default)]
    pub room_number: Option<i64>,
}

impl Resident {
    /// Display label used by lists and lookups: first name then last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

/// Body of `POST /residents` and `PUT /residents/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidentPayload {
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub mutuelle_id: i64,
    pub niss: String,
    pub medecin_traitant_id: i64,
    pub room_number: i64,
}

/// Health-insurance provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mutuelle {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Physician who can be assigned as a resident's attending doctor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medecin {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// Appointment reason category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Motif {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Appointment row; the backend joins in the resident's display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub resident_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transporteur: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heure_transport: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resident_name: String,
}

/// Body of `POST /appointments` and `PUT /appointments/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub resident_id: i64,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub transporteur: String,
    pub heure_transport: String,
}

// =============================================================================
// PRESCRIPTIONS
// =============================================================================

/// Prescription status value meaning "validated by a nurse".
pub const PRESCRIPTION_VALIDATED: i64 = 1;

/// Prescription row from `GET /medications`, joined with display names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resident_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medication_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dosage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_of_day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,
}

impl PrescriptionSummary {
    pub fn is_validated(&self) -> bool {
        self.status == PRESCRIPTION_VALIDATED
    }
}

/// Prescription detail from `GET /medications/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub resident_id: i64,
    pub medication_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dosage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_of_day: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,
}

impl Prescription {
    /// Payload that re-submits this prescription with `status` = validated.
    pub fn validated_payload(&self) -> PrescriptionPayload {
        PrescriptionPayload {
            resident_id: self.resident_id,
            medication_id: self.medication_id,
            dosage: self.dosage.clone(),
            time_of_day: self.time_of_day.clone(),
            frequency: self.frequency.clone(),
            status: PRESCRIPTION_VALIDATED,
        }
    }
}

/// Body of `POST /medications` and `PUT /medications/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionPayload {
    pub resident_id: i64,
    pub medication_id: i64,
    pub dosage: String,
    pub time_of_day: String,
    pub frequency: String,
    pub status: i64,
}

// =============================================================================
// USERS + AUTH
// =============================================================================

/// Staff account as listed by `/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
}

identified!(Resident, Appointment, PrescriptionSummary, User);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
