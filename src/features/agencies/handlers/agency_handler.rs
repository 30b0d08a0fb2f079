use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::agencies::dtos::ServiceReportDto;
use crate::features::agencies::services::AgencyService;
use crate::shared::types::ApiResponse;

/// Generate the agency service report
#[utoipa::path(
    get,
    path = "/agencies/report",
    tag = "agencies",
    responses(
        (status = 200, description = "Agency counts by service category and target region", body = ApiResponse<ServiceReportDto>),
        (status = 500, description = "Internal server error"),
        (status = 502, description = "Listings endpoint unavailable")
    )
)]
pub async fn get_service_report(
    State(service): State<Arc<AgencyService>>,
) -> Result<Json<ApiResponse<ServiceReportDto>>, AppError> {
    tracing::info!("Generating agency service report");
    let report = service.service_report().await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}
