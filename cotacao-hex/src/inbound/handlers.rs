//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cotacao_types::{AppError, ExchangeRateProvider, ExchangeRepository};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<P: ExchangeRateProvider, R: ExchangeRepository> {
    pub service: QuoteService<P, R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    /// Every failure is a gateway timeout with an empty body; the cause is
    /// only visible in the logs.
    fn into_response(self) -> Response {
        tracing::warn!(
            error = %self.0,
            deadline = self.0.is_deadline(),
            "quote request failed"
        );
        StatusCode::GATEWAY_TIMEOUT.into_response()
    }
}

/// `GET /cotacao`: fetch, persist and relay the current USD→BRL quote.
#[tracing::instrument(skip(state))]
pub async fn cotacao<P: ExchangeRateProvider, R: ExchangeRepository>(
    State(state): State<Arc<AppState<P, R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rate = state.service.fetch_and_record().await?;
    Ok(Json(rate))
}
