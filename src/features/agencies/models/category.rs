/// Recognized service categories, in priority order.
///
/// Categorization is first-match-wins, so this order is a silent tie-break
/// for agencies whose services span more than one recognized category.
/// Do not reorder casually.
pub const SERVICE_CATEGORIES: [ServiceCategory; 2] = [
    ServiceCategory::AdvertisingBrandCreative,
    ServiceCategory::Media,
];

/// Country codes the report breaks out individually
pub const TARGET_REGIONS: [&str; 3] = ["AU", "GB", "US"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    AdvertisingBrandCreative,
    Media,
    Other,
}

impl ServiceCategory {
    /// Service group name as it appears in listing data and in the report
    pub fn name(&self) -> &'static str {
        match self {
            Self::AdvertisingBrandCreative => "Advertising, Brand & Creative",
            Self::Media => "Media",
            Self::Other => "Other",
        }
    }
}
