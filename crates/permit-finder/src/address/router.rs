use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{AddressLookup, AddressSuggestions};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuggestionQuery {
    pub q: String,
}

pub fn address_router(lookup: Arc<AddressLookup>) -> Router {
    Router::new()
        .route("/api/v1/address/suggestions", get(suggestions_handler))
        .with_state(lookup)
}

pub(crate) async fn suggestions_handler(
    State(lookup): State<Arc<AddressLookup>>,
    Query(query): Query<SuggestionQuery>,
) -> Json<AddressSuggestions> {
    Json(lookup.suggest(&query.q).await)
}
