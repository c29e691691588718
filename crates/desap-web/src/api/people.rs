use axum::extract::{Path, Query, State};
use axum::Json;
use desap_core::{normalize, Page, RawFilter};

use crate::dto::PersonDto;
use crate::error::AppError;
use crate::state::AppState;

/// Filtered, paginated search. Query parameters are the raw form values.
pub async fn search(
    State(state): State<AppState>,
    Query(raw): Query<RawFilter>,
) -> Result<Json<Page<PersonDto>>, AppError> {
    let request = normalize(&raw, state.page_size());
    tracing::debug!(?request, "search");

    let page = state.source.search(&request).await?;
    Ok(Json(page.map(PersonDto::from)))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PersonDto>, AppError> {
    let person = state.source.person(id).await?;
    Ok(Json(PersonDto::from(person)))
}
