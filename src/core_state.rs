//! Application-level session store.
//!
//! `CoreState` is the single ownership point for cross-screen data: the
//! authenticated flag, the user profile and the three domain collections.
//! It is wrapped in `Arc` at startup and injected into every handler. Each
//! mutator takes the write lock once, so a change is fully applied before
//! the caller returns.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::collection::Collection;
use crate::config::AppConfig;
use crate::models::{
    Appointment, NewAppointment, NewPrescription, NewWellnessEntry, Prescription, UserProfile,
    WellnessEntry,
};

// ═══════════════════════════════════════════════════════════
// Session data
// ═══════════════════════════════════════════════════════════

/// Everything that lives for the duration of one sign-in.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub authenticated: bool,
    pub profile: UserProfile,
    pub appointments: Collection<Appointment>,
    pub wellness: Collection<WellnessEntry>,
    pub prescriptions: Collection<Prescription>,
}

impl SessionState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    session: RwLock<SessionState>,
    clock: Arc<dyn Clock>,
    pub config: AppConfig,
}

impl CoreState {
    /// Create a new CoreState with the system clock and default config.
    pub fn new() -> Self {
        Self::with_clock(AppConfig::default(), Arc::new(SystemClock))
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            session: RwLock::new(SessionState::default()),
            clock,
            config,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // ── Session access (read path) ──────────────────────────

    pub fn read_session(&self) -> Result<RwLockReadGuard<'_, SessionState>, CoreError> {
        self.session.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Owned copy of the session, for building views without holding the lock.
    pub fn snapshot(&self) -> Result<SessionState, CoreError> {
        Ok(self.read_session()?.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .map(|guard| guard.authenticated)
            .unwrap_or(false)
    }

    // ── Session mutation (write path) ───────────────────────

    fn write_session(&self) -> Result<RwLockWriteGuard<'_, SessionState>, CoreError> {
        self.session.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Write access that requires a signed-in user.
    fn write_authenticated(&self) -> Result<RwLockWriteGuard<'_, SessionState>, CoreError> {
        let guard = self.write_session()?;
        if !guard.authenticated {
            return Err(CoreError::NotAuthenticated);
        }
        Ok(guard)
    }

    /// Mark the session authenticated with the given profile fields.
    ///
    /// `fields` is merged over an empty profile, so anything the caller did
    /// not provide is `""`. Collections from a previous sign-in are not kept.
    pub fn login(&self, fields: UserProfile) -> Result<(), CoreError> {
        let mut guard = self.write_session()?;
        if !guard.authenticated {
            guard.reset();
        }
        guard.authenticated = true;
        guard.profile = fields;
        tracing::info!("Session authenticated");
        Ok(())
    }

    /// Reset to the signed-out state: empty profile, empty collections.
    pub fn logout(&self) -> Result<(), CoreError> {
        let mut guard = self.write_session()?;
        guard.reset();
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Replace the profile wholesale (settings save).
    pub fn update_profile(&self, profile: UserProfile) -> Result<(), CoreError> {
        let mut guard = self.write_authenticated()?;
        guard.profile = profile;
        tracing::debug!("Profile updated");
        Ok(())
    }

    // ── Appointments ────────────────────────────────────────

    pub fn add_appointment(&self, new: NewAppointment) -> Result<Appointment, CoreError> {
        let mut guard = self.write_authenticated()?;
        let appointment = guard.appointments.add(new).clone();
        tracing::info!(id = %appointment.id, "Appointment booked");
        Ok(appointment)
    }

    /// Remove an appointment. Callers gate this behind a confirmation.
    pub fn remove_appointment(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut guard = self.write_authenticated()?;
        let removed = guard.appointments.remove(id);
        if removed {
            tracing::info!(%id, "Appointment cancelled");
        }
        Ok(removed)
    }

    pub fn appointment(&self, id: Uuid) -> Result<Option<Appointment>, CoreError> {
        Ok(self.read_session()?.appointments.get(id).cloned())
    }

    // ── Wellness ────────────────────────────────────────────

    pub fn add_wellness_entry(&self, new: NewWellnessEntry) -> Result<WellnessEntry, CoreError> {
        let mut guard = self.write_authenticated()?;
        let entry = guard.wellness.add(new).clone();
        tracing::info!(id = %entry.id, stress = entry.stress_level, "Wellness entry logged");
        Ok(entry)
    }

    // ── Prescriptions ───────────────────────────────────────

    pub fn add_prescription(&self, new: NewPrescription) -> Result<Prescription, CoreError> {
        let mut guard = self.write_authenticated()?;
        let rx = guard.prescriptions.add(new).clone();
        tracing::info!(id = %rx.id, "Prescription added");
        Ok(rx)
    }

    /// Edit in place. `Ok(None)` when the id is unknown.
    pub fn update_prescription(
        &self,
        id: Uuid,
        new: NewPrescription,
    ) -> Result<Option<Prescription>, CoreError> {
        let mut guard = self.write_authenticated()?;
        let updated = guard.prescriptions.update(id, new).cloned();
        if updated.is_some() {
            tracing::info!(%id, "Prescription updated");
        }
        Ok(updated)
    }

    pub fn remove_prescription(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut guard = self.write_authenticated()?;
        let removed = guard.prescriptions.remove(id);
        if removed {
            tracing::info!(%id, "Prescription removed");
        }
        Ok(removed)
    }

    pub fn prescription(&self, id: Uuid) -> Result<Option<Prescription>, CoreError> {
        Ok(self.read_session()?.prescriptions.get(id).cloned())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No authenticated session")]
    NotAuthenticated,
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Frequency, Mood};

    fn signed_in() -> CoreState {
        let core = CoreState::new();
        core.login(UserProfile {
            email: "a@b.com".into(),
            first_name: "a".into(),
            ..Default::default()
        })
        .unwrap();
        core
    }

    fn aspirin() -> NewPrescription {
        NewPrescription {
            name: "Aspirin".into(),
            dosage: "100mg".into(),
            frequency: Frequency::OnceDaily,
            time: "09:00".into(),
            days: DayOfWeek::ALL.iter().copied().collect(),
            notes: String::new(),
        }
    }

    fn booking() -> NewAppointment {
        NewAppointment {
            date: "Dec 19, 2025".into(),
            time: "10:00 AM".into(),
            center_name: "Springfield Medical Center".into(),
            center_address: "123 Main St, Springfield, CA 90001".into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_signed_out() {
        let core = CoreState::new();
        assert!(!core.is_authenticated());
        let session = core.snapshot().unwrap();
        assert_eq!(session.profile, UserProfile::default());
        assert!(session.appointments.is_empty());
    }

    #[test]
    fn login_fills_missing_fields_with_empty_strings() {
        let core = signed_in();
        assert!(core.is_authenticated());
        let profile = core.snapshot().unwrap().profile;
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.last_name, "");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.date_of_birth, "");
    }

    #[test]
    fn logout_clears_everything() {
        let core = signed_in();
        core.add_appointment(booking()).unwrap();
        core.add_prescription(aspirin()).unwrap();
        core.add_wellness_entry(NewWellnessEntry {
            date: "Dec 5, 2025".into(),
            stress_level: 2,
            sleep_hours: 7,
            journal: "ok".into(),
            mood: Mood::Good,
            type_note: None,
        })
        .unwrap();

        core.logout().unwrap();

        let session = core.snapshot().unwrap();
        assert!(!session.authenticated);
        assert_eq!(session.profile, UserProfile::default());
        assert!(session.appointments.is_empty());
        assert!(session.wellness.is_empty());
        assert!(session.prescriptions.is_empty());
    }

    #[test]
    fn logout_when_signed_out_is_fine() {
        let core = CoreState::new();
        core.logout().unwrap();
        assert!(!core.is_authenticated());
    }

    #[test]
    fn mutations_require_authentication() {
        let core = CoreState::new();
        assert!(matches!(
            core.add_appointment(booking()),
            Err(CoreError::NotAuthenticated)
        ));
        assert!(matches!(
            core.update_profile(UserProfile::default()),
            Err(CoreError::NotAuthenticated)
        ));
        assert!(matches!(
            core.remove_prescription(Uuid::new_v4()),
            Err(CoreError::NotAuthenticated)
        ));
    }

    #[test]
    fn book_then_cancel() {
        let core = signed_in();
        let appt = core.add_appointment(booking()).unwrap();
        let session = core.snapshot().unwrap();
        assert_eq!(session.appointments.len(), 1);
        let stored = &session.appointments.as_slice()[0];
        assert_eq!(stored.date, "Dec 19, 2025");
        assert_eq!(stored.time, "10:00 AM");
        assert_eq!(stored.center_name, "Springfield Medical Center");
        assert_eq!(stored.id, appt.id);

        assert!(core.remove_appointment(appt.id).unwrap());
        assert!(core.snapshot().unwrap().appointments.is_empty());
        assert!(!core.remove_appointment(appt.id).unwrap());
    }

    #[test]
    fn prescription_edit_keeps_id_and_position() {
        let core = signed_in();
        let aspirin_id = core.add_prescription(aspirin()).unwrap().id;
        let mut other = aspirin();
        other.name = "Metformin".into();
        core.add_prescription(other).unwrap();

        let mut edit = aspirin();
        edit.time = "20:00".into();
        edit.days = [DayOfWeek::Sat].into_iter().collect();
        let updated = core.update_prescription(aspirin_id, edit).unwrap().unwrap();

        assert_eq!(updated.id, aspirin_id);
        assert_eq!(updated.time, "20:00");
        let session = core.snapshot().unwrap();
        assert_eq!(session.prescriptions.as_slice()[0].id, aspirin_id);
        assert_eq!(session.prescriptions.as_slice()[0].name, "Aspirin");
    }

    #[test]
    fn update_profile_replaces_wholesale() {
        let core = signed_in();
        core.update_profile(UserProfile {
            first_name: "Grace".into(),
            zip_code: "02139".into(),
            ..Default::default()
        })
        .unwrap();
        let profile = core.snapshot().unwrap().profile;
        assert_eq!(profile.first_name, "Grace");
        assert_eq!(profile.zip_code, "02139");
        assert_eq!(profile.email, "");
    }
}
