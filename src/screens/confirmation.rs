//! Booking confirmation.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::NavAction;
use crate::clock::weekday_name;
use crate::config::SUPPORT_PHONE;
use crate::models::Appointment;
use crate::navigation::Route;

pub const CHECK_IN_INSTRUCTIONS: [&str; 3] = [
    "Arrive 15 minutes early for check-in",
    "Bring your insurance card and photo ID",
    "Complete any required pre-visit forms",
];

pub const RESCHEDULE_NOTICE: &str = "If you need to change or cancel your appointment, \
please call us at least 24 hours in advance.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationDetails {
    pub date: String,
    pub time: String,
    pub center_name: String,
    pub center_address: String,
    pub doctor_name: String,
    pub doctor_specialization: String,
}

impl ConfirmationDetails {
    /// Shown when the screen is opened without an appointment.
    pub fn fallback() -> Self {
        Self {
            date: "October 19, 2025".into(),
            time: "10:00 AM".into(),
            center_name: "Springfield Medical Center".into(),
            center_address: "123 Main St, Springfield, CA 90001".into(),
            doctor_name: "Dr. Amanda Taylor".into(),
            doctor_specialization: "Family Medicine".into(),
        }
    }
}

impl From<&Appointment> for ConfirmationDetails {
    fn from(appt: &Appointment) -> Self {
        Self {
            date: appt.date.clone(),
            time: appt.time.clone(),
            center_name: appt.center_name.clone(),
            center_address: appt.center_address.clone(),
            doctor_name: appt.doctor_name.clone().unwrap_or_default(),
            doctor_specialization: appt.doctor_specialization.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationView {
    pub appointment: ConfirmationDetails,
    pub day_of_week: String,
    pub is_fallback: bool,
    pub confirmation_number: String,
    pub instructions: [&'static str; 3],
    pub reschedule_notice: &'static str,
    pub support_phone: &'static str,
    pub actions: Vec<NavAction>,
}

/// "APT-YYYY-MM-DD-NNN": issue date plus a suffix derived from the id.
pub fn confirmation_number(issued: NaiveDate, id: Option<Uuid>) -> String {
    let suffix = id.map_or(0, |id| id.as_u128() % 1000);
    format!("APT-{}-{suffix:03}", issued.format("%Y-%m-%d"))
}

pub fn confirmation(appointment: Option<&Appointment>, today: NaiveDate) -> ConfirmationView {
    let details = appointment.map_or_else(ConfirmationDetails::fallback, ConfirmationDetails::from);
    ConfirmationView {
        day_of_week: weekday_name(&details.date),
        appointment: details,
        is_fallback: appointment.is_none(),
        confirmation_number: confirmation_number(today, appointment.map(|a| a.id)),
        instructions: CHECK_IN_INSTRUCTIONS,
        reschedule_notice: RESCHEDULE_NOTICE,
        support_phone: SUPPORT_PHONE,
        actions: vec![NavAction::to("Return to Dashboard", Route::Home)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewAppointment;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    #[test]
    fn fallback_record() {
        let view = confirmation(None, today());
        assert!(view.is_fallback);
        assert_eq!(view.appointment, ConfirmationDetails::fallback());
        // October 19, 2025 is a Sunday
        assert_eq!(view.day_of_week, "Sunday");
        assert_eq!(view.confirmation_number, "APT-2025-12-01-000");
    }

    #[test]
    fn booked_appointment_details() {
        let appt = Appointment::from_new(
            Uuid::from_u128(1_234_567),
            NewAppointment {
                date: "December 19, 2025".into(),
                time: "2:30 PM".into(),
                center_name: "Metro Hospital".into(),
                center_address: "1 Elm St, Madison, CA 10001".into(),
                doctor_name: Some("Dr. Sarah Johnson".into()),
                doctor_specialization: None,
                reason: None,
            },
        );
        let view = confirmation(Some(&appt), today());
        assert!(!view.is_fallback);
        assert_eq!(view.day_of_week, "Friday");
        assert_eq!(view.appointment.doctor_specialization, "");
        assert_eq!(view.confirmation_number, "APT-2025-12-01-567");
    }

    #[test]
    fn unparseable_date_uses_fallback_weekday() {
        let appt = Appointment::from_new(
            Uuid::new_v4(),
            NewAppointment {
                date: "someday".into(),
                ..Default::default()
            },
        );
        assert_eq!(confirmation(Some(&appt), today()).day_of_week, "Tuesday");
    }
}
