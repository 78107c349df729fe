//! Appointment list with upcoming/past split and confirmed cancellation.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::NavAction;
use crate::clock::{format_card_date, parse_display_date};
use crate::config::SUPPORT_PHONE;
use crate::confirm::{cancel_appointment_prompt, Confirmation};
use crate::core_state::{CoreError, CoreState};
use crate::models::Appointment;
use crate::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentCard {
    pub id: Uuid,
    pub center_name: String,
    pub center_address: String,
    /// "Fri, Dec 19, 2025", or the stored text when it does not parse.
    pub date_label: String,
    pub time: String,
    pub doctor: Option<String>,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub cancellable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyAppointmentsView {
    pub upcoming: Vec<AppointmentCard>,
    pub past: Vec<AppointmentCard>,
    pub is_empty: bool,
    pub support_phone: &'static str,
    pub actions: Vec<NavAction>,
}

/// Upcoming (on or after `today`, soonest first) and past (latest first).
/// An unparseable date counts as `today`, so the appointment stays visible
/// and cancellable.
pub fn classify(appointments: &[Appointment], today: NaiveDate) -> (Vec<&Appointment>, Vec<&Appointment>) {
    let dated = |appt: &Appointment| parse_display_date(&appt.date).unwrap_or(today);

    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = appointments
        .iter()
        .map(|appt| (dated(appt), appt))
        .partition(|(date, _)| *date >= today);

    upcoming.sort_by_key(|(date, _)| *date);
    past.sort_by(|a, b| b.0.cmp(&a.0));

    (
        upcoming.into_iter().map(|(_, a)| a).collect(),
        past.into_iter().map(|(_, a)| a).collect(),
    )
}

fn card(appt: &Appointment, status: AppointmentStatus) -> AppointmentCard {
    AppointmentCard {
        id: appt.id,
        center_name: appt.center_name.clone(),
        center_address: appt.center_address.clone(),
        date_label: parse_display_date(&appt.date)
            .map(format_card_date)
            .unwrap_or_else(|| appt.date.clone()),
        time: appt.time.clone(),
        doctor: appt.doctor_line(),
        reason: appt.reason.clone(),
        status,
        cancellable: status == AppointmentStatus::Confirmed,
    }
}

pub fn my_appointments(appointments: &[Appointment], today: NaiveDate) -> MyAppointmentsView {
    let (upcoming, past) = classify(appointments, today);
    MyAppointmentsView {
        upcoming: upcoming
            .into_iter()
            .map(|a| card(a, AppointmentStatus::Confirmed))
            .collect(),
        past: past
            .into_iter()
            .map(|a| card(a, AppointmentStatus::Completed))
            .collect(),
        is_empty: appointments.is_empty(),
        support_phone: SUPPORT_PHONE,
        actions: vec![NavAction::to("Book New Appointment", Route::AppointmentBooking)],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    /// The user declined; nothing changed.
    Declined { prompt: String },
    NotFound,
}

/// Cancel an appointment after asking the user. Unknown ids are not
/// prompted for.
pub fn cancel(
    core: &CoreState,
    id: Uuid,
    confirmation: &dyn Confirmation,
) -> Result<CancelOutcome, CoreError> {
    let Some(appt) = core.appointment(id)? else {
        return Ok(CancelOutcome::NotFound);
    };
    let prompt = cancel_appointment_prompt(&appt.center_name);
    if !confirmation.confirm(&prompt) {
        return Ok(CancelOutcome::Declined { prompt });
    }
    Ok(if core.remove_appointment(id)? {
        CancelOutcome::Cancelled
    } else {
        CancelOutcome::NotFound
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Answer;
    use crate::models::{NewAppointment, UserProfile};

    fn appt(date: &str, center: &str) -> Appointment {
        Appointment::from_new(
            Uuid::new_v4(),
            NewAppointment {
                date: date.into(),
                time: "10:00 AM".into(),
                center_name: center.into(),
                center_address: "123 Main St".into(),
                ..Default::default()
            },
        )
    }

    fn dec(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    #[test]
    fn splits_and_orders_by_date() {
        let list = vec![
            appt("December 30, 2025", "Late"),
            appt("December 1, 2025", "Old"),
            appt("December 10, 2025", "Today"),
            appt("November 15, 2025", "Older"),
            appt("December 20, 2025", "Soon"),
        ];
        let (upcoming, past) = classify(&list, dec(10));
        let names = |v: &[&Appointment]| v.iter().map(|a| a.center_name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&upcoming), ["Today", "Soon", "Late"]);
        assert_eq!(names(&past), ["Old", "Older"]);
    }

    #[test]
    fn malformed_date_counts_as_upcoming() {
        let list = vec![appt("whenever", "Mystery")];
        let view = my_appointments(&list, dec(10));
        assert_eq!(view.upcoming.len(), 1);
        assert_eq!(view.upcoming[0].date_label, "whenever");
        assert_eq!(view.upcoming[0].status, AppointmentStatus::Confirmed);
        assert!(view.past.is_empty());
    }

    #[test]
    fn cards_format_dates_and_badges() {
        let list = vec![appt("Dec 19, 2025", "Soon"), appt("Dec 1, 2025", "Done")];
        let view = my_appointments(&list, dec(10));
        assert_eq!(view.upcoming[0].date_label, "Fri, Dec 19, 2025");
        assert_eq!(view.past[0].status, AppointmentStatus::Completed);
        assert!(!view.past[0].cancellable);
        assert!(!view.is_empty);
    }

    fn signed_in_with_booking() -> (CoreState, Uuid) {
        let core = CoreState::new();
        core.login(UserProfile {
            email: "a@b.com".into(),
            ..Default::default()
        })
        .unwrap();
        let id = core
            .add_appointment(NewAppointment {
                date: "Dec 19, 2025".into(),
                time: "10:00 AM".into(),
                center_name: "Springfield Medical Center".into(),
                center_address: "123 Main St".into(),
                ..Default::default()
            })
            .unwrap()
            .id;
        (core, id)
    }

    #[test]
    fn declined_cancel_keeps_appointment() {
        let (core, id) = signed_in_with_booking();
        let outcome = cancel(&core, id, &Answer::NO).unwrap();
        assert_eq!(
            outcome,
            CancelOutcome::Declined {
                prompt: "Are you sure you want to cancel your appointment at Springfield Medical Center?"
                    .into()
            }
        );
        assert!(core.appointment(id).unwrap().is_some());
    }

    #[test]
    fn confirmed_cancel_removes_appointment() {
        let (core, id) = signed_in_with_booking();
        assert_eq!(cancel(&core, id, &Answer::YES).unwrap(), CancelOutcome::Cancelled);
        assert!(core.snapshot().unwrap().appointments.is_empty());
        assert_eq!(cancel(&core, id, &Answer::YES).unwrap(), CancelOutcome::NotFound);
    }
}
