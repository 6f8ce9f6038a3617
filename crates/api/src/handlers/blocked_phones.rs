use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use phone_blocklist_domain::DomainError;
use tracing::debug;

use crate::{
    dto::{
        BlockPhoneRequest, BlockedPhoneResponse, MessageResponse, PhoneCheckRequest,
        PhoneCheckResponse,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blocked-phones", get(get_blocked_phones))
        .route("/blocked-phones", post(add_blocked_phone))
        .route("/blocked-phones/{id}", delete(remove_blocked_phone))
        .route(
            "/blocked-phones/history/{phone_number}",
            get(get_phone_history),
        )
        .route("/check-phone", post(check_phone))
}

async fn get_blocked_phones(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlockedPhoneResponse>>, ApiError> {
    let records = state.blocklist.get_blocked_phones.execute().await?;
    debug!(count = records.len(), "Blocked phones retrieved successfully");
    Ok(Json(
        records
            .into_iter()
            .map(BlockedPhoneResponse::from_record)
            .collect(),
    ))
}

async fn add_blocked_phone(
    State(state): State<AppState>,
    payload: Result<Json<BlockPhoneRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BlockedPhoneResponse>), ApiError> {
    let Json(req) = payload?;

    let record = state
        .blocklist
        .add_blocked_phone
        .execute(
            &req.phone_number,
            req.reason.as_deref(),
            req.blocked_by.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlockedPhoneResponse::from_record(record)),
    ))
}

async fn remove_blocked_phone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = id
        .parse::<i64>()
        .map_err(|_| ApiError(DomainError::InvalidInput("Invalid ID".to_string())))?;

    state.blocklist.remove_blocked_phone.execute(id).await?;

    Ok(Json(MessageResponse {
        message: "Phone number removed from blocked list".to_string(),
    }))
}

async fn check_phone(
    State(state): State<AppState>,
    payload: Result<Json<PhoneCheckRequest>, JsonRejection>,
) -> Result<Json<PhoneCheckResponse>, ApiError> {
    let Json(req) = payload?;
    let status = state.blocklist.check_phone.execute(&req.phone_number).await?;
    Ok(Json(PhoneCheckResponse::from_status(status)))
}

async fn get_phone_history(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> Result<Json<Vec<BlockedPhoneResponse>>, ApiError> {
    let records = state
        .blocklist
        .get_phone_history
        .execute(&phone_number)
        .await?;
    debug!(
        phone_number = %phone_number,
        count = records.len(),
        "Phone history retrieved successfully"
    );
    Ok(Json(
        records
            .into_iter()
            .map(BlockedPhoneResponse::from_record)
            .collect(),
    ))
}
