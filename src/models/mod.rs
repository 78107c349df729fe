//! Domain records held in the session and the generated demo data types.

pub mod appointment;
pub mod center;
pub mod enums;
pub mod prescription;
pub mod profile;
pub mod wellness;

pub use appointment::{Appointment, NewAppointment};
pub use center::{Doctor, FeaturedCenter, HealthCenter};
pub use enums::{CenterType, CostType, DayOfWeek, Frequency, InsuranceProvider, Mood};
pub use prescription::{NewPrescription, Prescription};
pub use profile::UserProfile;
pub use wellness::{NewWellnessEntry, WellnessEntry};
