use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::registry::SharedRegistry;
use crate::services::activities_service;

pub async fn activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&registry).await)
}
