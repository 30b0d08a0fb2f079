mod agency_service;
pub mod report_service;

pub use agency_service::AgencyService;
