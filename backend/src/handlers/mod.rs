pub mod items;

use axum::{http::StatusCode, Json};

use crate::models::HealthStatus;

pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    (
        StatusCode::OK,
        Json(HealthStatus {
            status: "OK",
            message: "Backend is running",
        }),
    )
}
