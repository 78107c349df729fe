//! Health-center map: filters, result cards and booking links.

use serde::{Deserialize, Serialize};

use crate::generators::{cost_label, CenterFilter, CostFilter, TypeFilter};
use crate::map_search::MapResults;
use crate::models::HealthCenter;
use crate::navigation::Route;

/// Map screen input: the ZIP field plus the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapQuery {
    pub zip: String,
    pub query: String,
    pub center_type: TypeFilter,
    pub cost: CostFilter,
}

impl MapQuery {
    pub fn filter(&self) -> CenterFilter {
        CenterFilter {
            query: self.query.clone(),
            center_type: self.center_type,
            cost: self.cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityTone {
    Now,
    Tomorrow,
    NextWeek,
    Other,
}

impl AvailabilityTone {
    pub fn of(availability: &str) -> Self {
        if ["Same Day", "Immediate", "Walk-ins"]
            .iter()
            .any(|k| availability.contains(k))
        {
            Self::Now
        } else if availability.contains("Tomorrow") {
            Self::Tomorrow
        } else if availability.contains("Next Week") {
            Self::NextWeek
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CenterCard {
    /// Position in the unfiltered result list; the calendar re-derives the
    /// center from `(zip, index)`.
    pub index: usize,
    #[serde(flatten)]
    pub center: HealthCenter,
    pub cost_label: &'static str,
    pub availability_tone: AvailabilityTone,
    pub open_all_day: bool,
    pub book_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub zip_code: String,
    pub results_zip: String,
    pub type_filters: [&'static str; 3],
    pub cost_filters: [&'static str; 5],
    pub selected_type: TypeFilter,
    pub selected_cost: CostFilter,
    pub cost_description: &'static str,
    pub query: String,
    pub total: usize,
    pub centers: Vec<CenterCard>,
    pub can_book: bool,
}

pub fn book_path(zip: &str, index: usize) -> String {
    format!("{}?zip={zip}&center={index}", Route::CalendarSync.path())
}

pub fn map_view(results: &MapResults, query: &MapQuery) -> MapView {
    let filter = query.filter();
    let centers: Vec<CenterCard> = results
        .centers
        .iter()
        .enumerate()
        .filter(|(_, center)| filter.matches(center))
        .map(|(index, center)| CenterCard {
            index,
            cost_label: cost_label(center.cost_type),
            availability_tone: AvailabilityTone::of(&center.availability),
            open_all_day: center.hours.contains("24/7"),
            book_path: book_path(&results.zip, index),
            center: center.clone(),
        })
        .collect();

    MapView {
        zip_code: query.zip.clone(),
        results_zip: results.zip.clone(),
        type_filters: TypeFilter::LABELS,
        cost_filters: CostFilter::LABELS,
        selected_type: query.center_type,
        selected_cost: query.cost,
        cost_description: query.cost.description(),
        query: query.query.clone(),
        total: centers.len(),
        can_book: !centers.is_empty(),
        centers,
    }
}
