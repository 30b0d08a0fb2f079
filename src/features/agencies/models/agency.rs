use serde::{Deserialize, Serialize};

/// Wire types for the remote listings API.
///
/// Deserialization is deliberately lenient: unknown fields are ignored and
/// missing collections default to empty, since the upstream payload carries
/// far more fields than this report consumes.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct Agency {
    pub id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub locations: Vec<AgencyLocation>,
    #[serde(default)]
    pub agency_service: Vec<AgencyServiceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct AgencyLocation {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyServiceEntry {
    #[serde(default)]
    pub service: Option<Service>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct Service {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub service_group: Option<ServiceGroup>,
    // Present on the wire but not consulted when categorizing agencies.
    #[serde(default)]
    pub service_reporting_group: Option<ServiceGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(dead_code)]
pub struct ServiceGroup {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}
