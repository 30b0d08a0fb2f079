use utoipa::{Modify, OpenApi};

use crate::features::agencies::{dtos as agencies_dtos, handlers as agencies_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Agencies
        agencies_handlers::agency_handler::get_service_report,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Agencies
            agencies_dtos::RegionBreakdownDto,
            agencies_dtos::ReportSummaryDto,
            agencies_dtos::ServiceReportDto,
            ApiResponse<agencies_dtos::ServiceReportDto>,
        )
    ),
    tags(
        (name = "agencies", description = "Agency listings report"),
    ),
    info(
        title = "Agency Insights API",
        version = "0.1.0",
        description = "Agency listings report API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
