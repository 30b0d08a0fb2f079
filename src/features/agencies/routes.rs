use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::agencies::handlers;
use crate::features::agencies::services::AgencyService;

/// Create public agency report routes
pub fn routes(agency_service: Arc<AgencyService>) -> Router {
    Router::new()
        .route("/agencies/report", get(handlers::get_service_report))
        .with_state(agency_service)
}
