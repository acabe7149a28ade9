use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::rubrics::domain::model::RubricEntity;

pub async fn add_rubric(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RubricEntity>, ServerError> {
    let rubric: RubricEntity = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = state.rubrics.save_rubric(&rubric).await?;
    Ok(Json(res))
}

pub async fn find_rubric_by_synonym(
    State(state): State<AppState>,
    Path(synonym): Path<String>) -> Result<Json<RubricEntity>, ServerError> {
    let res = state.rubrics.find_rubric_by_synonym(synonym.as_str()).await?;
    Ok(Json(res))
}
