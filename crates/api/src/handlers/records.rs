use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::instrument;

use crate::{dto::record::*, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", post(create_records).put(update_record))
        .route(
            "/records/{name}/{record_type}",
            get(get_records).put(replace_records).delete(delete_records),
        )
}

fn to_dtos<'a, I>(records: I) -> Vec<RecordDto>
where
    I: IntoIterator<Item = &'a recordbook_domain::ResourceRecord>,
{
    records.into_iter().map(RecordDto::from).collect()
}

#[instrument(skip(state), name = "api_get_records")]
async fn get_records(
    State(state): State<AppState>,
    Path((name, record_type)): Path<(String, String)>,
) -> Result<Json<Vec<RecordDto>>, ApiError> {
    let records = state.get_records.execute(&name, &record_type)?;
    Ok(Json(to_dtos(records.iter())))
}

#[instrument(skip(state), name = "api_create_records")]
async fn create_records(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordsRequest>,
) -> Result<(StatusCode, Json<Vec<RecordDto>>), ApiError> {
    let records = state.create_records.execute(
        &req.name,
        &req.record_type,
        req.class.as_deref(),
        req.ttl,
        &req.values,
    )?;
    Ok((StatusCode::CREATED, Json(to_dtos(&records))))
}

#[instrument(skip(state), name = "api_update_record")]
async fn update_record(
    State(state): State<AppState>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<RecordDto>, ApiError> {
    let record = state.update_record.execute(
        &req.name,
        &req.record_type,
        req.class.as_deref(),
        req.ttl,
        &req.old_value,
        &req.value,
    )?;
    Ok(Json(RecordDto::from(&record)))
}

#[instrument(skip(state), name = "api_replace_records")]
async fn replace_records(
    State(state): State<AppState>,
    Path((name, record_type)): Path<(String, String)>,
    Json(req): Json<ReplaceRecordsRequest>,
) -> Result<Json<Vec<RecordDto>>, ApiError> {
    let records = state.replace_records.execute(
        &name,
        &record_type,
        req.class.as_deref(),
        req.ttl,
        &req.values,
    )?;
    Ok(Json(to_dtos(&records)))
}

#[instrument(skip(state), name = "api_delete_records")]
async fn delete_records(
    State(state): State<AppState>,
    Path((name, record_type)): Path<(String, String)>,
    Query(query): Query<DeleteRecordQuery>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_records
        .execute(&name, &record_type, query.value.as_deref())?;
    Ok(StatusCode::NO_CONTENT)
}
