use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::registry::SharedRegistry;
use crate::services::signup_service;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, ApiError> {
    let email = require_email(&query)?;

    let message = signup_service::signup(&registry, &activity_name, email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            ApiError::from(e)
        })?;

    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, ApiError> {
    let email = require_email(&query)?;

    let message = signup_service::unregister(&registry, &activity_name, email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            ApiError::from(e)
        })?;

    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(Json(json!({ "message": message })))
}

fn require_email(query: &ParticipantQuery) -> Result<&str, ApiError> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err(ApiError::Conflict("email must not be empty".to_string()));
    }
    Ok(email)
}
