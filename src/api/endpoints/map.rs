//! Health-center map search.

use axum::extract::{Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::map_search::SearchOutcome;
use crate::screens::map::{self, MapQuery, MapView};

/// `GET /map?zip=&query=&center_type=&cost=`
///
/// A ZIP that differs from the shown results counts as an edit and goes
/// through the debounced search. A request overtaken by a newer one gets
/// `409 SUPERSEDED`.
pub async fn search(
    State(ctx): State<ApiContext>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapView>, ApiError> {
    let search = &ctx.map_search;
    let shown = search.current().map(|r| r.zip);
    let zip = query.zip.trim();

    let outcome = if zip.is_empty() || shown.as_deref() == Some(zip) {
        search.current_or_initial().await
    } else {
        match search.zip_edited(zip).await {
            SearchOutcome::Incomplete => search.current_or_initial().await,
            other => other,
        }
    };

    match outcome {
        SearchOutcome::Applied(results) => Ok(Json(map::map_view(&results, &query))),
        SearchOutcome::Superseded => Err(ApiError::Superseded),
        SearchOutcome::Incomplete => Err(ApiError::BadRequest("Incomplete ZIP code".into())),
    }
}
