//! Dashboard shown after sign-in.

use chrono::Datelike;
use serde::Serialize;

use super::NavAction;
use crate::core_state::SessionState;
use crate::models::{DayOfWeek, Prescription, WellnessEntry};
use crate::navigation::Route;

const MAX_TODAYS_MEDICATIONS: usize = 3;
const MAX_RECENT_ENTRIES: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub first_name: String,
    pub summary: TodaySummary,
    pub quick_actions: Vec<NavAction>,
    pub todays_medications: Vec<MedicationReminder>,
    pub recent_entries: Vec<WellnessEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodaySummary {
    /// Sleep hours of the latest wellness entry, 0 without entries.
    pub sleep_hours: u8,
    pub appointment_count: usize,
    pub prescription_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationReminder {
    pub name: String,
    pub dosage: String,
    pub time: String,
}

impl From<&Prescription> for MedicationReminder {
    fn from(rx: &Prescription) -> Self {
        Self {
            name: rx.name.clone(),
            dosage: rx.dosage.clone(),
            time: rx.time.clone(),
        }
    }
}

pub fn home(session: &SessionState, today: DayOfWeek) -> HomeView {
    let todays_medications = session
        .prescriptions
        .iter()
        .filter(|rx| rx.is_scheduled_on(today))
        .take(MAX_TODAYS_MEDICATIONS)
        .map(MedicationReminder::from)
        .collect();

    HomeView {
        first_name: session.profile.first_name.clone(),
        summary: TodaySummary {
            sleep_hours: session.wellness.last().map_or(0, |e| e.sleep_hours),
            appointment_count: session.appointments.len(),
            prescription_count: session.prescriptions.len(),
        },
        quick_actions: vec![
            NavAction::to("Log Wellness Entry", Route::LogStress),
            NavAction::to("Schedule Appointment", Route::AppointmentBooking),
            NavAction::to("View My Wellness", Route::MyWellness),
        ],
        todays_medications,
        recent_entries: session
            .wellness
            .iter()
            .rev()
            .take(MAX_RECENT_ENTRIES)
            .cloned()
            .collect(),
    }
}

/// Weekday of a calendar date, as used by prescription schedules.
pub fn weekday_of(date: chrono::NaiveDate) -> DayOfWeek {
    date.weekday().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Mood, NewPrescription, NewWellnessEntry, UserProfile};

    fn rx(name: &str, days: &[DayOfWeek]) -> NewPrescription {
        NewPrescription {
            name: name.into(),
            dosage: "10mg".into(),
            frequency: Frequency::OnceDaily,
            time: "09:00".into(),
            days: days.iter().copied().collect(),
            notes: String::new(),
        }
    }

    fn entry(sleep: u8, journal: &str) -> NewWellnessEntry {
        NewWellnessEntry {
            date: "Dec 5, 2025".into(),
            stress_level: 3,
            sleep_hours: sleep,
            journal: journal.into(),
            mood: Mood::Good,
            type_note: None,
        }
    }

    #[test]
    fn empty_session_summary() {
        let view = home(&SessionState::default(), DayOfWeek::Mon);
        assert_eq!(
            view.summary,
            TodaySummary {
                sleep_hours: 0,
                appointment_count: 0,
                prescription_count: 0
            }
        );
        assert!(view.todays_medications.is_empty());
        assert!(view.recent_entries.is_empty());
        assert_eq!(view.quick_actions.len(), 3);
    }

    #[test]
    fn todays_medications_are_capped_and_filtered() {
        let mut session = SessionState {
            profile: UserProfile {
                first_name: "Ada".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        for name in ["A", "B", "C", "D"] {
            session.prescriptions.add(rx(name, &[DayOfWeek::Mon]));
        }
        session.prescriptions.add(rx("Weekend", &[DayOfWeek::Sat]));

        let view = home(&session, DayOfWeek::Mon);
        let names: Vec<_> = view.todays_medications.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(view.summary.prescription_count, 5);
        assert_eq!(view.first_name, "Ada");

        let view = home(&session, DayOfWeek::Sat);
        assert_eq!(view.todays_medications.len(), 1);
    }

    #[test]
    fn latest_entry_drives_sleep_and_recent_list() {
        let mut session = SessionState::default();
        for (sleep, journal) in [(5, "one"), (6, "two"), (7, "three"), (9, "four")] {
            session.wellness.add(entry(sleep, journal));
        }
        let view = home(&session, DayOfWeek::Tue);
        assert_eq!(view.summary.sleep_hours, 9);
        let journals: Vec<_> = view.recent_entries.iter().map(|e| e.journal.as_str()).collect();
        assert_eq!(journals, ["four", "three", "two"]);
    }

    #[test]
    fn weekday_conversion() {
        let friday = chrono::NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
        assert_eq!(weekday_of(friday), DayOfWeek::Fri);
    }
}
