//! Healthcare hub and the eligibility wizard.

use axum::Json;
use serde::Deserialize;

use crate::screens::healthcare::{
    self, EligibilityForm, EligibilityStep, EligibilityView, EligibilityWizard, MyHealthcareView,
};

/// `GET /my-healthcare`
pub async fn hub() -> Json<MyHealthcareView> {
    Json(healthcare::my_healthcare())
}

/// `GET /eligibility-check`: an empty wizard at step one.
pub async fn start() -> Json<EligibilityView> {
    Json(healthcare::eligibility(&EligibilityWizard::default()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EligibilityRequest {
    pub form: EligibilityForm,
    /// Step the client wants to show; the wizard stops at the first
    /// incomplete step before it.
    pub step: EligibilityStep,
}

/// `POST /eligibility-check`
pub async fn submit(Json(request): Json<EligibilityRequest>) -> Json<EligibilityView> {
    let wizard = EligibilityWizard::walk_to(request.form, request.step);
    Json(healthcare::eligibility(&wizard))
}
