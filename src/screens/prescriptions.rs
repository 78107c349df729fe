//! Prescription manager: list, add, edit in place, delete.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core_state::{CoreError, CoreState, SessionState};
use crate::models::{DayOfWeek, Frequency, NewPrescription, Prescription};

const DEFAULT_TIME: &str = "09:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrescriptionForm {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub time: String,
    pub days: BTreeSet<DayOfWeek>,
    pub notes: String,
}

impl Default for PrescriptionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            dosage: String::new(),
            frequency: Frequency::default(),
            time: DEFAULT_TIME.to_string(),
            days: DayOfWeek::ALL.iter().copied().collect(),
            notes: String::new(),
        }
    }
}

impl From<&Prescription> for PrescriptionForm {
    fn from(rx: &Prescription) -> Self {
        let new = rx.to_new();
        Self {
            name: new.name,
            dosage: new.dosage,
            frequency: new.frequency,
            time: new.time,
            days: new.days,
            notes: new.notes,
        }
    }
}

impl PrescriptionForm {
    /// Name, dosage and at least one day are required.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.dosage.trim().is_empty() && !self.days.is_empty()
    }

    pub fn to_new(&self) -> Option<NewPrescription> {
        self.is_complete().then(|| NewPrescription {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            frequency: self.frequency,
            time: self.time.clone(),
            days: self.days.clone(),
            notes: self.notes.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Prescription),
    Incomplete,
    NotFound,
}

pub fn add(core: &CoreState, form: &PrescriptionForm) -> Result<SaveOutcome, CoreError> {
    let Some(new) = form.to_new() else {
        return Ok(SaveOutcome::Incomplete);
    };
    core.add_prescription(new).map(SaveOutcome::Saved)
}

/// Replace the fields of an existing prescription, keeping its id and place.
pub fn update(core: &CoreState, id: Uuid, form: &PrescriptionForm) -> Result<SaveOutcome, CoreError> {
    let Some(new) = form.to_new() else {
        return Ok(SaveOutcome::Incomplete);
    };
    Ok(match core.update_prescription(id, new)? {
        Some(rx) => SaveOutcome::Saved(rx),
        None => SaveOutcome::NotFound,
    })
}

pub fn delete(core: &CoreState, id: Uuid) -> Result<bool, CoreError> {
    core.remove_prescription(id)
}

// ═══════════════════════════════════════════
// View
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct PrescriptionCard {
    #[serde(flatten)]
    pub prescription: Prescription,
    /// "Mon, Wed, Fri"
    pub days_label: String,
}

impl From<&Prescription> for PrescriptionCard {
    fn from(rx: &Prescription) -> Self {
        let days_label = rx
            .days
            .iter()
            .map(DayOfWeek::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            prescription: rx.clone(),
            days_label,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrescriptionsView {
    pub prescriptions: Vec<PrescriptionCard>,
    /// Id of the record loaded into the form, if editing.
    pub editing: Option<Uuid>,
    pub form: PrescriptionForm,
    pub frequencies: &'static [Frequency],
    pub days_of_week: &'static [DayOfWeek],
}

/// The manager screen. With `editing` set to a known id, the form is
/// prefilled from that record; otherwise it shows the defaults.
pub fn prescriptions(session: &SessionState, editing: Option<Uuid>) -> PrescriptionsView {
    let edited = editing.and_then(|id| session.prescriptions.get(id));
    PrescriptionsView {
        prescriptions: session.prescriptions.iter().map(PrescriptionCard::from).collect(),
        editing: edited.map(|rx| rx.id),
        form: edited.map(PrescriptionForm::from).unwrap_or_default(),
        frequencies: Frequency::ALL,
        days_of_week: DayOfWeek::ALL,
    }
}
