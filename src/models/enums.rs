use serde::{Deserialize, Serialize};

/// Returned when a label does not name any variant of a fixed enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidLabel {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The label is also the serde representation.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidLabel {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    /// Facility kind of a generated health center.
    CenterType {
        Clinic => "Clinic",
        Hospital => "Hospital",
    }
);

str_enum!(
    /// Cost category of a generated health center.
    CostType {
        Free => "Free",
        LowCost => "Low-Cost",
        SlidingScale => "Sliding Scale",
        Standard => "Standard",
    }
);

str_enum!(
    Frequency {
        OnceDaily => "Once daily",
        TwiceDaily => "Twice daily",
        ThreeTimesDaily => "Three times daily",
        AsNeeded => "As needed",
    }
);

str_enum!(
    /// Weekday abbreviation used for prescription schedules. Ordered Mon..Sun.
    DayOfWeek {
        Mon => "Mon",
        Tue => "Tue",
        Wed => "Wed",
        Thu => "Thu",
        Fri => "Fri",
        Sat => "Sat",
        Sun => "Sun",
    }
);

str_enum!(
    InsuranceProvider {
        BlueCrossBlueShield => "Blue Cross Blue Shield",
        UnitedHealthcare => "UnitedHealthcare",
        Aetna => "Aetna",
        Cigna => "Cigna",
        Humana => "Humana",
        Medicare => "Medicare",
        Medicaid => "Medicaid",
    }
);

impl Default for Frequency {
    fn default() -> Self {
        Self::OnceDaily
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Mon,
            chrono::Weekday::Tue => Self::Tue,
            chrono::Weekday::Wed => Self::Wed,
            chrono::Weekday::Thu => Self::Thu,
            chrono::Weekday::Fri => Self::Fri,
            chrono::Weekday::Sat => Self::Sat,
            chrono::Weekday::Sun => Self::Sun,
        }
    }
}

/// Self-reported mood on a wellness entry.
///
/// The three labels offered by the form are variants; anything else is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Excellent,
    Good,
    Stressed,
    Other(String),
}

impl Mood {
    pub const CHOICES: [Mood; 3] = [Mood::Excellent, Mood::Good, Mood::Stressed];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Stressed => "Stressed",
            Self::Other(label) => label,
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::Good
    }
}

impl From<String> for Mood {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Excellent" => Self::Excellent,
            "Good" => Self::Good,
            "Stressed" => Self::Stressed,
            _ => Self::Other(label),
        }
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.as_str().to_string()
    }
}
