mod recommend;
mod score;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::{AppState, errors::AppError};

pub use self::recommend::recommend;
pub use self::score::score_vendor;

pub async fn not_found() -> impl IntoResponse {
  AppError::ResourceNotFound
}

pub async fn healthz() -> StatusCode {
  StatusCode::OK
}

pub async fn prometheus(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
  match state.prometheus {
    Some(handle) => Ok(handle.render()),
    None => Err(AppError::ResourceNotFound),
  }
}
