use super::AppState;
use super::error::ApiError;
use crate::domain::payment::{PaymentRequest, PaymentStatus, StoredPayment};
use crate::domain::validation::is_valid_request;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

fn rejected() -> Response {
    let body = serde_json::json!({ "status": PaymentStatus::Rejected.name() });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// `POST /api/payments`
pub async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::info!(reason = %rejection.body_text(), "Payment request rejected");
            return Ok(rejected());
        }
    };
    if !is_valid_request(&request) {
        tracing::info!("Payment request rejected");
        return Ok(rejected());
    }

    // Detached so a dropped connection cannot abort the bank call or the write.
    let processor = state.processor.clone();
    let id = tokio::spawn(async move { processor.submit(&request).await })
        .await
        .map_err(|e| ApiError::Internal(format!("payment task failed: {e}")))??;

    let payment = state.query.get_by_id(id).await?;
    Ok((StatusCode::CREATED, Json(payment)).into_response())
}

/// `GET /api/payments/{id}`
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredPayment>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;
    Ok(Json(state.query.get_by_id(id).await?))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
