//! Domain Records
//!
//! Backend-owned records as they travel over the wire. The backend speaks
//! camelCase JSON; nothing here is cached or persisted client-side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier issued by the backend.
///
/// The backend emits numeric ids while forms submit them as text, so both
/// shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => f.pad(&n.to_string()),
            RecordId::Text(s) => f.pad(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Doctor profile shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(alias = "specialty")]
    pub specialization: String,
    /// Years of practice
    #[serde(default)]
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form slots such as "09:00 - 10:00"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_times: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub date: String,
    pub status: String,
}

/// Body of `PUT /appointments/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: RecordId,
    pub patient_id: RecordId,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Prescription as submitted from the prescription form.
///
/// Field values are sent verbatim; the patient id stays text because that
/// is what the form holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub patient_id: String,
    pub medicine: String,
    pub dosage: String,
    pub instructions: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doctor_accepts_backend_specialty_key() {
        let doctor: Doctor = serde_json::from_value(json!({
            "id": 3,
            "name": "Ada Smith",
            "specialty": "Cardiology",
            "email": "ada@example.org",
            "availableTimes": ["09:00 - 10:00"]
        }))
        .unwrap();

        assert_eq!(doctor.id, Some(RecordId::Number(3)));
        assert_eq!(doctor.specialization, "Cardiology");
        assert_eq!(doctor.experience, 0);
        assert_eq!(doctor.available_times, vec!["09:00 - 10:00"]);
    }

    #[test]
    fn test_record_id_accepts_numbers_and_text() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": 7,
            "patientId": "p-12",
            "date": "2024-01-01",
            "status": "Confirmed"
        }))
        .unwrap();

        assert_eq!(appointment.id.to_string(), "7");
        assert_eq!(appointment.patient_id.to_string(), "p-12");
    }

    #[test]
    fn test_prescription_wire_shape() {
        let prescription = Prescription {
            patient_id: "1".to_string(),
            medicine: "Aspirin".to_string(),
            dosage: "500mg".to_string(),
            instructions: "Twice daily".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&prescription).unwrap(),
            json!({
                "patientId": "1",
                "medicine": "Aspirin",
                "dosage": "500mg",
                "instructions": "Twice daily"
            })
        );
    }

    #[test]
    fn test_patient_record_optional_fields() {
        let record: PatientRecord =
            serde_json::from_value(json!({ "id": 1, "patientId": 1 })).unwrap();

        assert!(record.date.is_none());
        assert!(record.diagnosis.is_none());
    }
}
