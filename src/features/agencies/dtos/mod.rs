mod report_dto;

pub use report_dto::{RegionBreakdownDto, ReportSummaryDto, ServiceReportDto};
