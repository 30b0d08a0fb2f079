mod agency;
mod category;

pub use agency::{Agency, AgencyLocation, AgencyServiceEntry, Service, ServiceGroup};
pub use category::{ServiceCategory, SERVICE_CATEGORIES, TARGET_REGIONS};
