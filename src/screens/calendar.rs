//! Date and time picker that books an appointment at the selected center.
//!
//! The selected center travels as `(zip, center index)` and is re-derived
//! from the generator, so the payload stays small and always resolves to
//! the same facility. A missing or out-of-range selection falls back to
//! Springfield Medical Center.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::format_long_date;
use crate::config::SUPPORT_PHONE;
use crate::core_state::{CoreError, CoreState};
use crate::generators::{generate_centers, generate_doctor};
use crate::models::{Appointment, CenterType, CostType, Doctor, HealthCenter, NewAppointment};

pub const TIME_SLOTS: [&str; 17] = [
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM",
    "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM", "5:00 PM",
];

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const VISIT_REASON: &str = "General Checkup";

const DEFAULT_YEAR: i32 = 2025;
const DEFAULT_MONTH: u32 = 12;
const DEFAULT_DAY: u32 = 19;
const DEFAULT_TIME: &str = "10:00 AM";

/// One row of the month grid, Sunday first. `None` pads outside the month.
pub type Week = [Option<u32>; 7];

// ═══════════════════════════════════════════
// Selection
// ═══════════════════════════════════════════

/// Everything the calendar screen is showing: which center, which month,
/// which day and time slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarSelection {
    pub zip: Option<String>,
    pub center: Option<usize>,
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
    pub time: String,
}

impl Default for CalendarSelection {
    fn default() -> Self {
        Self {
            zip: None,
            center: None,
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            day: DEFAULT_DAY,
            time: DEFAULT_TIME.to_string(),
        }
    }
}

impl CalendarSelection {
    /// The selected center, or the fallback.
    pub fn resolve_center(&self) -> HealthCenter {
        match (self.zip.as_deref(), self.center) {
            (Some(zip), Some(index)) => generate_centers(zip)
                .into_iter()
                .nth(index)
                .unwrap_or_else(fallback_center),
            _ => fallback_center(),
        }
    }

    /// The selected calendar date, if the day exists in the month.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn has_valid_time(&self) -> bool {
        TIME_SLOTS.contains(&self.time.as_str())
    }
}

/// Center shown when no valid selection was carried over.
pub fn fallback_center() -> HealthCenter {
    HealthCenter {
        name: "Springfield Medical Center".into(),
        address: "123 Main St".into(),
        city: "Springfield".into(),
        state: "CA".into(),
        zip_code: "90001".into(),
        center_type: CenterType::Clinic,
        hours: "Open Today".into(),
        availability: "Same Day Appointments".into(),
        rating: 4.5,
        phone: SUPPORT_PHONE.into(),
        distance: 0.0,
        cost_type: CostType::Standard,
    }
}

// ═══════════════════════════════════════════
// Month arithmetic
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> Option<u32> {
        let next = self.next().first_day()?;
        next.pred_opt().map(|last| last.day())
    }
}

/// Weeks of the month, Sunday first. `None` for an invalid month.
pub fn month_grid(month: MonthRef) -> Option<Vec<Week>> {
    let first = month.first_day()?;
    let days = month.days_in_month()?;
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; 7];
    let mut slot = offset;
    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    Some(weeks)
}

// ═══════════════════════════════════════════
// View
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub center: HealthCenter,
    pub center_full_address: String,
    pub doctor: Doctor,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub weekdays: [&'static str; 7],
    pub weeks: Vec<Week>,
    /// Highlighted day; `None` when the selected day is not in this month.
    pub selected_day: Option<u32>,
    pub selected_time: String,
    pub time_slots: [&'static str; 17],
    pub previous: MonthRef,
    pub next: MonthRef,
    pub can_confirm: bool,
}

/// Build the calendar screen. `None` when the month itself is invalid.
pub fn calendar(selection: &CalendarSelection) -> Option<CalendarView> {
    let month = MonthRef {
        year: selection.year,
        month: selection.month,
    };
    let weeks = month_grid(month)?;
    let month_name = month.first_day()?.format("%B").to_string();
    let center = selection.resolve_center();
    let doctor = generate_doctor(&center.name, center.center_type);
    let selected_day = selection.date().map(|d| d.day());

    Some(CalendarView {
        center_full_address: center.full_address(),
        center,
        doctor,
        year: month.year,
        month: month.month,
        month_name,
        weekdays: WEEKDAY_HEADERS,
        weeks,
        selected_day,
        selected_time: selection.time.clone(),
        time_slots: TIME_SLOTS,
        previous: month.previous(),
        next: month.next(),
        can_confirm: selected_day.is_some() && selection.has_valid_time(),
    })
}

/// The appointment the confirm button would book, or `None` if the day
/// or time slot is not valid.
pub fn compose_appointment(selection: &CalendarSelection) -> Option<NewAppointment> {
    let date = selection.date()?;
    if !selection.has_valid_time() {
        return None;
    }
    let center = selection.resolve_center();
    let doctor = generate_doctor(&center.name, center.center_type);
    Some(NewAppointment {
        date: format_long_date(date),
        time: selection.time.clone(),
        center_address: center.full_address(),
        center_name: center.name,
        doctor_name: Some(doctor.name.to_string()),
        doctor_specialization: Some(doctor.specialization.to_string()),
        reason: Some(VISIT_REASON.to_string()),
    })
}

/// Book the selected slot. `Ok(None)` when the selection is incomplete.
pub fn confirm_booking(
    core: &CoreState,
    selection: &CalendarSelection,
) -> Result<Option<Appointment>, CoreError> {
    match compose_appointment(selection) {
        Some(new) => core.add_appointment(new).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    #[test]
    fn december_2025_grid() {
        let weeks = month_grid(MonthRef { year: 2025, month: 12 }).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], [None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)]);
        assert_eq!(weeks[4], [Some(28), Some(29), Some(30), Some(31), None, None, None]);
    }

    #[test]
    fn february_2026_fills_exactly_four_weeks() {
        let weeks = month_grid(MonthRef { year: 2026, month: 2 }).unwrap();
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[3][6], Some(28));
    }

    #[test]
    fn invalid_month_has_no_grid() {
        assert!(month_grid(MonthRef { year: 2025, month: 13 }).is_none());
        assert!(month_grid(MonthRef { year: 2025, month: 0 }).is_none());
    }

    #[test]
    fn month_navigation_wraps_year() {
        let dec = MonthRef { year: 2025, month: 12 };
        assert_eq!(dec.next(), MonthRef { year: 2026, month: 1 });
        assert_eq!(dec.next().previous(), dec);
        let jan = MonthRef { year: 2025, month: 1 };
        assert_eq!(jan.previous(), MonthRef { year: 2024, month: 12 });
        assert_eq!(MonthRef { year: 2024, month: 2 }.days_in_month(), Some(29));
    }

    #[test]
    fn defaults_compose_the_fallback_booking() {
        let new = compose_appointment(&CalendarSelection::default()).unwrap();
        assert_eq!(new.date, "December 19, 2025");
        assert_eq!(new.time, "10:00 AM");
        assert_eq!(new.center_name, "Springfield Medical Center");
        assert_eq!(new.center_address, "123 Main St, Springfield, CA 90001");
        assert_eq!(new.doctor_name.as_deref(), Some("Dr. Brian Miller"));
        assert_eq!(new.doctor_specialization.as_deref(), Some("Primary Care"));
        assert_eq!(new.reason.as_deref(), Some(VISIT_REASON));
    }

    #[test]
    fn selection_resolves_generated_center() {
        let selection = CalendarSelection {
            zip: Some("90001".into()),
            center: Some(0),
            ..Default::default()
        };
        assert_eq!(selection.resolve_center(), generate_centers("90001")[0]);

        let out_of_range = CalendarSelection {
            zip: Some("90001".into()),
            center: Some(99),
            ..Default::default()
        };
        assert_eq!(out_of_range.resolve_center().name, "Springfield Medical Center");
    }

    #[test]
    fn impossible_day_or_unknown_slot_cannot_be_booked() {
        let feb_31 = CalendarSelection {
            month: 2,
            day: 31,
            ..Default::default()
        };
        assert!(compose_appointment(&feb_31).is_none());
        let view = calendar(&feb_31).unwrap();
        assert_eq!(view.selected_day, None);
        assert!(!view.can_confirm);

        let midnight = CalendarSelection {
            time: "12:00 AM".into(),
            ..Default::default()
        };
        assert!(compose_appointment(&midnight).is_none());
    }

    #[test]
    fn view_names_month_and_neighbours() {
        let view = calendar(&CalendarSelection::default()).unwrap();
        assert_eq!(view.month_name, "December");
        assert_eq!(view.selected_day, Some(19));
        assert_eq!(view.next, MonthRef { year: 2026, month: 1 });
        assert_eq!(view.previous, MonthRef { year: 2025, month: 11 });
        assert!(view.can_confirm);
    }

    #[test]
    fn confirm_books_into_session() {
        let core = CoreState::new();
        core.login(UserProfile {
            email: "a@b.com".into(),
            ..Default::default()
        })
        .unwrap();
        let appt = confirm_booking(&core, &CalendarSelection::default())
            .unwrap()
            .unwrap();
        assert_eq!(core.appointment(appt.id).unwrap(), Some(appt));
    }
}
