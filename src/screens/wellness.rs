//! Wellness logging (stress, sleep, mood, journal) and the latest-entry view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NavAction;
use crate::clock::format_short_date;
use crate::core_state::{CoreError, CoreState, SessionState};
use crate::models::wellness::{MAX_SLEEP_HOURS, MAX_STRESS_LEVEL, MIN_STRESS_LEVEL};
use crate::models::{Mood, NewWellnessEntry, WellnessEntry};
use crate::navigation::Route;

const DEFAULT_STRESS: u8 = 3;
const DEFAULT_SLEEP: u8 = 8;

// ═══════════════════════════════════════════
// Log form
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessForm {
    pub stress_level: u8,
    pub sleep_hours: u8,
    pub mood: Mood,
    pub journal: String,
}

impl Default for WellnessForm {
    fn default() -> Self {
        Self {
            stress_level: DEFAULT_STRESS,
            sleep_hours: DEFAULT_SLEEP,
            mood: Mood::default(),
            journal: String::new(),
        }
    }
}

impl WellnessForm {
    /// An entry dated `today`, or `None` while the journal is blank.
    pub fn to_entry(&self, today: NaiveDate) -> Option<NewWellnessEntry> {
        if self.journal.trim().is_empty() {
            return None;
        }
        Some(NewWellnessEntry {
            date: format_short_date(today),
            stress_level: self.stress_level,
            sleep_hours: self.sleep_hours,
            journal: self.journal.clone(),
            mood: self.mood.clone(),
            type_note: None,
        })
    }
}

/// Save a wellness entry stamped with the clock's date.
pub fn save_entry(core: &CoreState, form: &WellnessForm) -> Result<Option<WellnessEntry>, CoreError> {
    let Some(new) = form.to_entry(core.clock().today()) else {
        return Ok(None);
    };
    core.add_wellness_entry(new).map(Some)
}

// ═══════════════════════════════════════════
// Views
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StressBand {
    Low,
    Moderate,
    High,
}

impl StressBand {
    pub fn of(level: u8) -> Self {
        match level {
            0..=2 => Self::Low,
            3 => Self::Moderate,
            _ => Self::High,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PastEntry {
    #[serde(flatten)]
    pub entry: WellnessEntry,
    pub band: StressBand,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Range {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogStressView {
    pub form: WellnessForm,
    pub moods: [Mood; 3],
    pub stress_range: Range,
    pub sleep_range: Range,
    /// Most recent first.
    pub past_entries: Vec<PastEntry>,
    /// Log form and prescription manager tabs.
    pub tabs: [NavAction; 2],
}

pub fn log_stress(session: &SessionState) -> LogStressView {
    LogStressView {
        form: WellnessForm::default(),
        moods: Mood::CHOICES,
        stress_range: Range {
            min: MIN_STRESS_LEVEL,
            max: MAX_STRESS_LEVEL,
        },
        sleep_range: Range {
            min: 0,
            max: MAX_SLEEP_HOURS,
        },
        past_entries: session
            .wellness
            .iter()
            .rev()
            .map(|entry| PastEntry {
                band: StressBand::of(entry.stress_level),
                entry: entry.clone(),
            })
            .collect(),
        tabs: [
            NavAction::to("Log Stress", Route::LogStress),
            NavAction::to("Prescriptions", Route::Prescriptions),
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MyWellnessView {
    /// The most recently logged entry.
    pub latest: Option<WellnessEntry>,
    pub entry_count: usize,
}

pub fn my_wellness(session: &SessionState) -> MyWellnessView {
    MyWellnessView {
        latest: session.wellness.last().cloned(),
        entry_count: session.wellness.len(),
    }
}
