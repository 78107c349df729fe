use serde::{Deserialize, Serialize};

use super::enums::{CenterType, CostType};

/// A generated health facility. Never stored; recomputed per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCenter {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub center_type: CenterType,
    pub hours: String,
    pub availability: String,
    pub rating: f64,
    pub phone: String,
    pub distance: f64,
    pub cost_type: CostType,
}

impl HealthCenter {
    /// "<address>, <city>, <state> <zip>"
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// Doctor assigned to a center for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub name: &'static str,
    pub specialization: &'static str,
}

/// Single center highlighted on the booking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedCenter {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub hours: String,
}
