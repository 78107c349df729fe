use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booked appointment. Immutable once created; only cancellation removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    /// Display date as composed by the booking calendar ("December 19, 2025").
    pub date: String,
    pub time: String,
    pub center_name: String,
    pub center_address: String,
    pub doctor_name: Option<String>,
    pub doctor_specialization: Option<String>,
    pub reason: Option<String>,
}

/// Appointment fields before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub date: String,
    pub time: String,
    pub center_name: String,
    pub center_address: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub doctor_specialization: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Appointment {
    pub fn from_new(id: Uuid, new: NewAppointment) -> Self {
        Self {
            id,
            date: new.date,
            time: new.time,
            center_name: new.center_name,
            center_address: new.center_address,
            doctor_name: new.doctor_name,
            doctor_specialization: new.doctor_specialization,
            reason: new.reason,
        }
    }

    /// "Dr. Name - Specialization", or just the name.
    pub fn doctor_line(&self) -> Option<String> {
        let name = self.doctor_name.as_deref()?;
        Some(match self.doctor_specialization.as_deref() {
            Some(spec) if !spec.is_empty() => format!("{name} - {spec}"),
            _ => name.to_string(),
        })
    }
}
