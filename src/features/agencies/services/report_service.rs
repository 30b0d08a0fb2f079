//! Pure aggregation pass over the fetched agency list.
//!
//! Builds the fixed-shape service report: agency counts per
//! `(service category, target region)` plus a summary of how many agencies
//! were reported and how many were actually analyzed.

use crate::features::agencies::dtos::ServiceReportDto;
use crate::features::agencies::models::{Agency, ServiceCategory, SERVICE_CATEGORIES, TARGET_REGIONS};

/// Generate the service report from a full agency list.
///
/// Every agency lands in exactly one category. An agency with no regions
/// increments its category's Other counter; otherwise each distinct
/// recognized region it has is counted once, and unrecognized regions are
/// dropped.
pub fn generate_report(agencies: &[Agency]) -> ServiceReportDto {
    let mut report = ServiceReportDto::new(agencies.len() as u64);

    for agency in agencies {
        let regions = agency_regions(agency);
        let category = categorize_agency(agency);
        let breakdown = report.breakdown_mut(category);

        if regions.is_empty() {
            breakdown.other += 1;
        } else {
            for region in regions {
                // Regions outside the target set are dropped, not folded
                // into Other.
                if TARGET_REGIONS.contains(&region) {
                    breakdown.increment_region(region);
                }
            }
        }

        report.summary.agencies_analyzed += 1;
    }

    report
}

/// Distinct country codes across the agency's locations, in order of first
/// appearance
fn agency_regions(agency: &Agency) -> Vec<&str> {
    let mut regions: Vec<&str> = Vec::new();

    for location in &agency.locations {
        if let Some(code) = location.country_code.as_deref() {
            if !regions.contains(&code) {
                regions.push(code);
            }
        }
    }

    regions
}

/// First recognized category (in declared order) named by any of the
/// agency's service groups; Other when nothing matches.
///
/// Matching consults the service group name only. The wire format also
/// carries a serviceReportingGroup, but its intended role is unclear
/// upstream, so it is ignored here.
fn categorize_agency(agency: &Agency) -> ServiceCategory {
    if agency.agency_service.is_empty() {
        return ServiceCategory::Other;
    }

    for category in SERVICE_CATEGORIES {
        let has_category = agency.agency_service.iter().any(|entry| {
            entry
                .service
                .as_ref()
                .and_then(|service| service.service_group.as_ref())
                .is_some_and(|group| group.name == category.name())
        });

        if has_category {
            return category;
        }
    }

    ServiceCategory::Other
}
