use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::agencies::models::ServiceCategory;

/// Agency counts per target region for one service category
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegionBreakdownDto {
    #[serde(rename = "AU")]
    pub au: u64,
    #[serde(rename = "GB")]
    pub gb: u64,
    #[serde(rename = "US")]
    pub us: u64,
    /// Agencies in this category with no region at all
    #[serde(rename = "Other")]
    pub other: u64,
}

impl RegionBreakdownDto {
    /// Increment the counter for a recognized target region; anything else
    /// is ignored
    pub fn increment_region(&mut self, region: &str) {
        match region {
            "AU" => self.au += 1,
            "GB" => self.gb += 1,
            "US" => self.us += 1,
            _ => {}
        }
    }

    #[allow(dead_code)]
    pub fn total(&self) -> u64 {
        self.au + self.gb + self.us + self.other
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryDto {
    pub total_agencies: u64,
    pub agencies_analyzed: u64,
}

/// Fixed-shape report: one region breakdown per recognized service category
/// plus the Other catch-all, and an overall summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceReportDto {
    #[serde(rename = "Advertising, Brand & Creative")]
    pub advertising_brand_creative: RegionBreakdownDto,
    #[serde(rename = "Media")]
    pub media: RegionBreakdownDto,
    #[serde(rename = "Other")]
    pub other: RegionBreakdownDto,
    pub summary: ReportSummaryDto,
}

impl ServiceReportDto {
    /// Empty report with every counter at zero and the summary primed with
    /// the number of agencies about to be analyzed
    pub fn new(total_agencies: u64) -> Self {
        Self {
            advertising_brand_creative: RegionBreakdownDto::default(),
            media: RegionBreakdownDto::default(),
            other: RegionBreakdownDto::default(),
            summary: ReportSummaryDto {
                total_agencies,
                agencies_analyzed: 0,
            },
        }
    }

    pub fn breakdown_mut(&mut self, category: ServiceCategory) -> &mut RegionBreakdownDto {
        match category {
            ServiceCategory::AdvertisingBrandCreative => &mut self.advertising_brand_creative,
            ServiceCategory::Media => &mut self.media,
            ServiceCategory::Other => &mut self.other,
        }
    }
}
