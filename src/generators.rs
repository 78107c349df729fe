//! Deterministic demo-data generators.
//!
//! Health centers, doctors and the booking screen's featured center are
//! derived from a ZIP code or a center name with plain modular arithmetic
//! over fixed tables. Same input, same output; no input makes them fail.

use serde::{Deserialize, Serialize};

use crate::models::{CenterType, CostType, Doctor, FeaturedCenter, HealthCenter};

/// Seed used when the ZIP prefix is missing or not numeric.
pub const FALLBACK_SEED: u32 = 100;
/// ZIP reported on generated centers when none was given.
pub const FALLBACK_ZIP: &str = "90001";
/// ZIP used for the featured center when the profile has none.
pub const FALLBACK_FEATURED_ZIP: &str = "10001";
const FALLBACK_FEATURED_NUMBER: u64 = 10001;

const CITIES: [&str; 6] = [
    "Springfield", "Riverside", "Oak Park", "Greenville", "Madison", "Franklin",
];
const STREETS: [&str; 8] = [
    "Main St", "Oak Ave", "Park Blvd", "Elm St", "Medical Plaza", "Health Drive",
    "Wellness Way", "Emergency Lane",
];
const PREFIXES: [&str; 8] = [
    "City", "Community", "Family", "Metro", "Central", "Regional", "Premier", "Advanced",
];
const CLINIC_SUFFIXES: [&str; 5] = [
    "Medical Clinic", "Health Center", "Care Clinic", "Urgent Care", "Medical Center",
];
const HOSPITAL_SUFFIXES: [&str; 4] = [
    "General Hospital", "Medical Center", "Hospital", "Regional Hospital",
];
const AVAILABILITY: [&str; 5] = [
    "Same Day Appointments",
    "Available Tomorrow",
    "Next Week",
    "Walk-ins Welcome",
    "Immediate Care",
];
const COSTS: [CostType; 4] = [
    CostType::Free,
    CostType::LowCost,
    CostType::SlidingScale,
    CostType::Standard,
];

const HOSPITAL_DOCTORS: [Doctor; 8] = [
    Doctor { name: "Dr. Sarah Johnson", specialization: "Emergency Medicine" },
    Doctor { name: "Dr. Michael Chen", specialization: "Internal Medicine" },
    Doctor { name: "Dr. Emily Rodriguez", specialization: "Cardiology" },
    Doctor { name: "Dr. David Kim", specialization: "Orthopedic Surgery" },
    Doctor { name: "Dr. Jennifer Martinez", specialization: "Neurology" },
    Doctor { name: "Dr. Robert Thompson", specialization: "General Surgery" },
    Doctor { name: "Dr. Lisa Anderson", specialization: "Pulmonology" },
    Doctor { name: "Dr. James Wilson", specialization: "Gastroenterology" },
];
const CLINIC_DOCTORS: [Doctor; 8] = [
    Doctor { name: "Dr. Amanda Taylor", specialization: "Family Medicine" },
    Doctor { name: "Dr. Christopher Lee", specialization: "General Practice" },
    Doctor { name: "Dr. Jessica Brown", specialization: "Pediatrics" },
    Doctor { name: "Dr. Daniel White", specialization: "Internal Medicine" },
    Doctor { name: "Dr. Michelle Garcia", specialization: "Family Medicine" },
    Doctor { name: "Dr. Kevin Moore", specialization: "General Practice" },
    Doctor { name: "Dr. Rachel Davis", specialization: "Urgent Care Medicine" },
    Doctor { name: "Dr. Brian Miller", specialization: "Primary Care" },
];

// ═══════════════════════════════════════════
// Health centers
// ═══════════════════════════════════════════

pub const ZIP_LEN: usize = 5;

/// Exactly five ASCII digits.
pub fn is_complete_zip(zip: &str) -> bool {
    zip.len() == ZIP_LEN && zip.chars().all(|c| c.is_ascii_digit())
}

/// Numeric value of the first three characters of `zip`, if they are digits.
fn zip_seed(zip: &str) -> u32 {
    let prefix: String = zip.trim().chars().take(3).collect();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return FALLBACK_SEED;
    }
    prefix.parse().unwrap_or(FALLBACK_SEED)
}

/// Generate 8 to 12 centers near `zip`, closest first.
pub fn generate_centers(zip: &str) -> Vec<HealthCenter> {
    let zip = zip.trim();
    let seed = zip_seed(zip);
    let city = CITIES[(seed as usize) % CITIES.len()];
    let zip_code = if zip.is_empty() { FALLBACK_ZIP } else { zip };
    let count = 8 + seed % 5;

    let mut centers: Vec<HealthCenter> = (0..count)
        .map(|i| {
            let k = (seed + i) as usize;
            let is_hospital = i % 3 == 0;

            let suffix = if is_hospital {
                HOSPITAL_SUFFIXES[k % HOSPITAL_SUFFIXES.len()]
            } else {
                CLINIC_SUFFIXES[k % CLINIC_SUFFIXES.len()]
            };
            let street_number = 100 + (seed + i * 111) % 900;

            let availability = if is_hospital {
                if i % 2 == 0 {
                    "Immediate Care"
                } else {
                    "Same Day Appointments"
                }
            } else {
                AVAILABILITY[k % AVAILABILITY.len()]
            };

            let open_all_day = is_hospital || i % 4 == 0;

            HealthCenter {
                name: format!("{} {}", PREFIXES[k % PREFIXES.len()], suffix),
                address: format!("{street_number} {}", STREETS[k % STREETS.len()]),
                city: city.to_string(),
                state: "CA".to_string(),
                zip_code: zip_code.to_string(),
                center_type: if is_hospital {
                    CenterType::Hospital
                } else {
                    CenterType::Clinic
                },
                hours: if open_all_day { "Open 24/7" } else { "Open Today" }.to_string(),
                availability: availability.to_string(),
                rating: 4.5 + f64::from((seed + i) % 5) / 10.0,
                phone: format!(
                    "({}) {}-{}",
                    200 + seed % 800,
                    100 + (i * 111) % 900,
                    1000 + (seed + i * 234) % 9000
                ),
                distance: 0.5 + f64::from((seed + i * 7) % 100) / 10.0,
                cost_type: COSTS[k % COSTS.len()],
            }
        })
        .collect();

    centers.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    centers
}

// ═══════════════════════════════════════════
// Filtering
// ═══════════════════════════════════════════

/// Facility type filter on the map screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Clinic,
    Hospital,
}

impl TypeFilter {
    pub const LABELS: [&'static str; 3] = ["All", "Clinic", "Hospital"];

    fn matches(self, center_type: CenterType) -> bool {
        match self {
            Self::All => true,
            Self::Clinic => center_type == CenterType::Clinic,
            Self::Hospital => center_type == CenterType::Hospital,
        }
    }
}

/// Cost filter, keyed by the label shown on the filter chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostFilter {
    #[default]
    All,
    #[serde(rename = "Free Services")]
    FreeServices,
    #[serde(rename = "Low-Cost")]
    LowCost,
    #[serde(rename = "Sliding Scale")]
    SlidingScale,
    Standard,
}

impl CostFilter {
    pub const LABELS: [&'static str; 5] =
        ["All", "Free Services", "Low-Cost", "Sliding Scale", "Standard"];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::FreeServices => "Free Services",
            Self::LowCost => "Low-Cost",
            Self::SlidingScale => "Sliding Scale",
            Self::Standard => "Standard",
        }
    }

    /// Explanation shown under the selected filter.
    pub fn description(self) -> &'static str {
        match self {
            Self::FreeServices => "No charge for services. Care is provided at no cost to you.",
            Self::LowCost => {
                "Reduced fees for healthcare services. More affordable than standard rates."
            }
            Self::SlidingScale => {
                "Fees based on your income and family size. You pay what you can afford."
            }
            Self::Standard => {
                "Regular healthcare fees. Standard insurance and payment options accepted."
            }
            Self::All => "View all available health centers regardless of cost.",
        }
    }

    fn matches(self, cost: CostType) -> bool {
        match self {
            Self::All => true,
            Self::FreeServices => cost == CostType::Free,
            Self::LowCost => cost == CostType::LowCost,
            Self::SlidingScale => cost == CostType::SlidingScale,
            Self::Standard => cost == CostType::Standard,
        }
    }
}

/// Map screen filters. All criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterFilter {
    /// Case-insensitive substring of the name or street address.
    pub query: String,
    pub center_type: TypeFilter,
    pub cost: CostFilter,
}

impl CenterFilter {
    pub fn matches(&self, center: &HealthCenter) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search = center.name.to_lowercase().contains(&needle)
            || center.address.to_lowercase().contains(&needle);
        matches_search && self.center_type.matches(center.center_type) && self.cost.matches(center.cost_type)
    }

    pub fn apply<'a>(&self, centers: &'a [HealthCenter]) -> Vec<&'a HealthCenter> {
        centers.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Badge label for a center's cost type.
pub fn cost_label(cost: CostType) -> &'static str {
    match cost {
        CostType::Free => "Free Services",
        CostType::LowCost => "Low-Cost",
        CostType::SlidingScale => "Sliding Scale",
        CostType::Standard => "Standard Fees",
    }
}

// ═══════════════════════════════════════════
// Doctors
// ═══════════════════════════════════════════

/// Pick the doctor for a center: sum of UTF-16 code units, mod table size.
pub fn generate_doctor(center_name: &str, center_type: CenterType) -> Doctor {
    let hash: u64 = center_name.encode_utf16().map(u64::from).sum();
    let table = match center_type {
        CenterType::Hospital => &HOSPITAL_DOCTORS,
        CenterType::Clinic => &CLINIC_DOCTORS,
    };
    table[(hash % table.len() as u64) as usize]
}

// ═══════════════════════════════════════════
// Featured center (booking screen)
// ═══════════════════════════════════════════

const FEATURED_TYPES: [&str; 4] = [
    "Medical Center", "Health Clinic", "Community Hospital", "Urgent Care Center",
];
const FEATURED_STREETS: [&str; 7] = [
    "Main St", "Oak Ave", "Maple Dr", "Park Blvd", "Cedar Lane", "Elm Street", "Pine Road",
];
const FEATURED_CITIES: [&str; 6] = [
    "Springfield", "Riverside", "Fairview", "Georgetown", "Madison", "Clinton",
];
const FEATURED_STATES: [&str; 8] = ["NY", "CA", "TX", "FL", "IL", "PA", "OH", "GA"];

/// Leading decimal digits of `raw` as a number; `None` when there are none
/// or the value is zero.
fn leading_number(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(18)
        .collect();
    digits.parse().ok().filter(|n| *n != 0)
}

/// The single center highlighted on the booking screen for `zip`.
pub fn featured_center(zip: &str) -> FeaturedCenter {
    let zip = if zip.trim().is_empty() {
        FALLBACK_FEATURED_ZIP
    } else {
        zip.trim()
    };
    let seed = leading_number(zip).unwrap_or(FALLBACK_FEATURED_NUMBER) % 1000;
    let s = seed as usize;

    let city = FEATURED_CITIES[(s + 1) % FEATURED_CITIES.len()];
    let state = FEATURED_STATES[(s + 2) % FEATURED_STATES.len()];

    FeaturedCenter {
        name: format!("{city} {}", FEATURED_TYPES[s % FEATURED_TYPES.len()]),
        address: format!(
            "{} {}, {city}, {state} {zip}",
            100 + seed % 900,
            FEATURED_STREETS[s % FEATURED_STREETS.len()]
        ),
        email: format!("contact@{}health.com", city.to_lowercase()),
        phone: format!(
            "({}) {}-{}",
            200 + seed % 799,
            100 + seed % 899,
            1000 + seed % 8999
        ),
        hours: if seed % 2 == 0 {
            "Open Mon-Fri, 8AM-6PM"
        } else {
            "Open Mon-Sat, 7AM-7PM"
        }
        .to_string(),
    }
}
