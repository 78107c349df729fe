use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{DayOfWeek, Frequency};

/// A tracked prescription with its reminder schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    /// Reminder time, "HH:MM".
    pub time: String,
    pub days: BTreeSet<DayOfWeek>,
    pub notes: String,
}

/// Prescription fields before an id is assigned; also the edit payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrescription {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time: String,
    pub days: BTreeSet<DayOfWeek>,
    #[serde(default)]
    pub notes: String,
}

impl Prescription {
    pub fn from_new(id: Uuid, new: NewPrescription) -> Self {
        let mut rx = Self {
            id,
            name: String::new(),
            dosage: String::new(),
            frequency: Frequency::default(),
            time: String::new(),
            days: BTreeSet::new(),
            notes: String::new(),
        };
        rx.apply(new);
        rx
    }

    /// Overwrite every field except the id.
    pub fn apply(&mut self, new: NewPrescription) {
        self.name = new.name;
        self.dosage = new.dosage;
        self.frequency = new.frequency;
        self.time = new.time;
        self.days = new.days;
        self.notes = new.notes;
    }

    pub fn is_scheduled_on(&self, day: DayOfWeek) -> bool {
        self.days.contains(&day)
    }

    /// Editable copy of this record's fields.
    pub fn to_new(&self) -> NewPrescription {
        NewPrescription {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            frequency: self.frequency,
            time: self.time.clone(),
            days: self.days.clone(),
            notes: self.notes.clone(),
        }
    }
}
