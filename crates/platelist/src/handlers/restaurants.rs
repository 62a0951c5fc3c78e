use axum::{extract::State, Json};

use platelist_core::restaurant::Restaurant;

use crate::{handlers::AppError, state::AppState};

/// List restaurants (GET /restaurants).
///
/// Returns up to `defaultResults` records from the store as a JSON
/// array, in store order. The request itself carries no parameters; the
/// count and table come from configuration resolved at startup.
#[axum::debug_handler]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    let count = state.config.default_results;
    let restaurants = state.store.list_restaurants(count).await?;

    Ok(Json(restaurants))
}
