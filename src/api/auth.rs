use axum::http::StatusCode;

/// There is no login; every attempt is refused.
pub async fn login() -> StatusCode {
    tracing::warn!("Login attempt refused");
    StatusCode::UNAUTHORIZED
}
