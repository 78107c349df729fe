//! My Healthcare hub and the insurance eligibility wizard.
//!
//! The wizard has three steps. Each forward move is gated on the fields of
//! the current step being present; every complete submission is eligible.

use serde::{Deserialize, Serialize};

use super::NavAction;
use crate::clock::parse_display_date;
use crate::models::InsuranceProvider;
use crate::navigation::Route;

// ═══════════════════════════════════════════
// My Healthcare
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthcareOption {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyHealthcareView {
    pub options: [HealthcareOption; 2],
    pub help: &'static str,
}

pub fn my_healthcare() -> MyHealthcareView {
    MyHealthcareView {
        options: [
            HealthcareOption {
                title: "Schedule an Appointment",
                description: "Book a visit with healthcare providers near you",
                path: Route::AppointmentBooking.path(),
            },
            HealthcareOption {
                title: "My Insurance Coverage",
                description: "View your insurance details and coverage information",
                path: Route::EligibilityCheck.path(),
            },
        ],
        help: "Contact our support team if you have questions about appointments or insurance coverage.",
    }
}

// ═══════════════════════════════════════════
// Eligibility wizard
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStep {
    #[default]
    PersonalInfo,
    InsuranceDetails,
    Results,
}

impl EligibilityStep {
    pub const ALL: [EligibilityStep; 3] = [
        EligibilityStep::PersonalInfo,
        EligibilityStep::InsuranceDetails,
        EligibilityStep::Results,
    ];

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::InsuranceDetails => 2,
            Self::Results => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::InsuranceDetails => "Insurance Details",
            Self::Results => "Eligibility Results",
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Results => Self::InsuranceDetails,
            _ => Self::PersonalInfo,
        }
    }

    fn checklist_label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Enter personal info",
            Self::InsuranceDetails => "Provide insurance details",
            Self::Results => "View eligibility results",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityForm {
    pub name: String,
    pub birthday: String,
    pub insurance_provider: Option<InsuranceProvider>,
    pub member_id: String,
}

impl EligibilityForm {
    fn personal_info_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.birthday.trim().is_empty()
    }

    fn insurance_complete(&self) -> bool {
        self.insurance_provider.is_some() && !self.member_id.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityWizard {
    pub step: EligibilityStep,
    pub form: EligibilityForm,
}

impl EligibilityWizard {
    pub fn new(form: EligibilityForm) -> Self {
        Self {
            step: EligibilityStep::PersonalInfo,
            form,
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            EligibilityStep::PersonalInfo => self.form.personal_info_complete(),
            EligibilityStep::InsuranceDetails => self.form.insurance_complete(),
            EligibilityStep::Results => false,
        }
    }

    /// Move forward one step if the current step is complete.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            EligibilityStep::PersonalInfo => EligibilityStep::InsuranceDetails,
            _ => EligibilityStep::Results,
        };
        true
    }

    pub fn back(&mut self) {
        self.step = self.step.previous();
    }

    /// Start at step one and advance towards `target` while the gates allow.
    pub fn walk_to(form: EligibilityForm, target: EligibilityStep) -> Self {
        let mut wizard = Self::new(form);
        while wizard.step < target && wizard.advance() {}
        wizard
    }
}

// ── View ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StepMarker {
    pub number: u8,
    pub label: &'static str,
    pub reached: bool,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Benefit {
    pub name: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageResult {
    pub eligible: bool,
    pub headline: &'static str,
    pub message: &'static str,
    pub name: String,
    pub date_of_birth: String,
    pub insurance_provider: Option<InsuranceProvider>,
    pub member_id: String,
    pub plan_type: &'static str,
    pub deductible: &'static str,
    pub coverage_period: &'static str,
    pub status: &'static str,
    pub benefits: [Benefit; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityView {
    pub step: EligibilityStep,
    pub step_number: u8,
    pub step_title: &'static str,
    pub steps: Vec<StepMarker>,
    pub form: EligibilityForm,
    pub providers: &'static [InsuranceProvider],
    pub can_advance: bool,
    pub result: Option<CoverageResult>,
    pub actions: Vec<NavAction>,
}

fn coverage(form: &EligibilityForm) -> CoverageResult {
    let name = match form.name.trim() {
        "" => "John Doe".to_string(),
        name => name.to_string(),
    };
    let date_of_birth = match form.birthday.trim() {
        "" => "MM/DD/YYYY".to_string(),
        raw => parse_display_date(raw)
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    };
    CoverageResult {
        eligible: true,
        headline: "You're eligible for coverage!",
        message: "Great news! Based on the information provided, you qualify for healthcare coverage.",
        name,
        date_of_birth,
        insurance_provider: form.insurance_provider,
        member_id: form.member_id.clone(),
        plan_type: "PPO Gold Plan",
        deductible: "$500 / $2,000",
        coverage_period: "Jan 1, 2025 - Dec 31, 2025",
        status: "Active",
        benefits: [
            Benefit { name: "Primary Care", cost: "$20 copay" },
            Benefit { name: "Specialist", cost: "$40 copay" },
            Benefit { name: "Prescriptions", cost: "$10-$50" },
        ],
    }
}

pub fn eligibility(wizard: &EligibilityWizard) -> EligibilityView {
    let step = wizard.step;
    let result = (step == EligibilityStep::Results).then(|| coverage(&wizard.form));
    let actions = if result.is_some() {
        vec![NavAction::to("Return to Dashboard", Route::Home)]
    } else {
        Vec::new()
    };
    EligibilityView {
        step,
        step_number: step.number(),
        step_title: step.title(),
        steps: EligibilityStep::ALL
            .into_iter()
            .map(|s| StepMarker {
                number: s.number(),
                label: s.checklist_label(),
                reached: s <= step,
                current: s == step,
            })
            .collect(),
        form: wizard.form.clone(),
        providers: InsuranceProvider::ALL,
        can_advance: wizard.can_advance(),
        result,
        actions,
    }
}
