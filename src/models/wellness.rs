use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Mood;

pub const MIN_STRESS_LEVEL: u8 = 1;
pub const MAX_STRESS_LEVEL: u8 = 5;
pub const MAX_SLEEP_HOURS: u8 = 12;

/// One wellness (stress) log entry. Entries are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessEntry {
    pub id: Uuid,
    /// Display date stamped at save time ("Dec 5, 2025").
    pub date: String,
    pub stress_level: u8,
    pub sleep_hours: u8,
    pub journal: String,
    pub mood: Mood,
    pub type_note: Option<String>,
}

/// Wellness entry fields before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWellnessEntry {
    pub date: String,
    pub stress_level: u8,
    pub sleep_hours: u8,
    pub journal: String,
    pub mood: Mood,
    #[serde(default)]
    pub type_note: Option<String>,
}

impl WellnessEntry {
    pub fn from_new(id: Uuid, new: NewWellnessEntry) -> Self {
        Self {
            id,
            date: new.date,
            stress_level: new.stress_level.clamp(MIN_STRESS_LEVEL, MAX_STRESS_LEVEL),
            sleep_hours: new.sleep_hours.min(MAX_SLEEP_HOURS),
            journal: new.journal,
            mood: new.mood,
            type_note: new.type_note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        let entry = WellnessEntry::from_new(
            Uuid::new_v4(),
            NewWellnessEntry {
                date: "Dec 5, 2025".into(),
                stress_level: 9,
                sleep_hours: 20,
                journal: "long day".into(),
                mood: Mood::Stressed,
                type_note: None,
            },
        );
        assert_eq!(entry.stress_level, MAX_STRESS_LEVEL);
        assert_eq!(entry.sleep_hours, MAX_SLEEP_HOURS);

        let entry = WellnessEntry::from_new(
            Uuid::new_v4(),
            NewWellnessEntry {
                date: "Dec 5, 2025".into(),
                stress_level: 0,
                sleep_hours: 0,
                journal: "fine".into(),
                mood: Mood::Good,
                type_note: None,
            },
        );
        assert_eq!(entry.stress_level, MIN_STRESS_LEVEL);
        assert_eq!(entry.sleep_hours, 0);
    }
}
