use serde_json::Value;

use crate::core::config::ListingsConfig;
use crate::core::error::{AppError, Result};
use crate::features::agencies::dtos::ServiceReportDto;
use crate::features::agencies::models::Agency;
use crate::features::agencies::services::report_service;
use crate::modules::cache::PageCache;

/// Service for fetching agency listings page by page.
///
/// Pages are requested sequentially at a fixed size via a `skip` offset.
/// A page with a cache file on disk is read from there instead of the
/// network; freshly fetched pages are persisted back keyed by their offset.
pub struct AgencyService {
    client: reqwest::Client,
    base_url: String,
    page_size: usize,
    cache: PageCache,
}

impl AgencyService {
    pub fn new(config: ListingsConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("AgencyInsights/0.1 (listings-report)")
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url,
            page_size: config.page_size,
            cache: PageCache::new(config.cache_dir),
        }
    }

    /// Fetch every agency the listings endpoint reports, one page at a time.
    ///
    /// Loops until the accumulated count reaches the server-reported total.
    /// There is no iteration bound beyond that total, so an endpoint that
    /// keeps reporting more than it returns would never terminate.
    pub async fn fetch_all_agencies(&self) -> Result<Vec<Agency>> {
        let mut all_agencies: Vec<Agency> = Vec::new();
        let mut skip = 0usize;
        let mut total;

        loop {
            let (batch, total_count) = match self.cache.load(skip).await? {
                Some(raw) => {
                    tracing::info!("Using cached page for skip={}", skip);
                    parse_page(raw).map_err(|e| {
                        AppError::Cache(format!(
                            "Invalid cached agency list response for skip={}: {}",
                            skip, e
                        ))
                    })?
                }
                None => {
                    tracing::info!("Fetching agencies with skip={}", skip);
                    let raw = self.fetch_page(skip).await?;

                    // Cache the raw response; a write failure only costs us
                    // the cache, the in-memory page is still good.
                    match self.cache.store(skip, &raw).await {
                        Ok(()) => tracing::info!("Saved raw response for skip={}", skip),
                        Err(e) => {
                            tracing::error!("Failed to save raw response for skip={}: {}", skip, e)
                        }
                    }

                    parse_page(raw).map_err(|e| {
                        AppError::ExternalServiceError(format!(
                            "Invalid agency list response for skip={}: {}",
                            skip, e
                        ))
                    })?
                }
            };

            all_agencies.extend(batch);
            total = total_count;
            skip += self.page_size;

            tracing::info!("Fetched {} of {} agencies", all_agencies.len(), total);

            if all_agencies.len() >= total {
                break;
            }
        }

        Ok(all_agencies)
    }

    /// Fetch all agencies and aggregate them into the service report
    pub async fn service_report(&self) -> Result<ServiceReportDto> {
        let agencies = self.fetch_all_agencies().await?;
        Ok(report_service::generate_report(&agencies))
    }

    async fn fetch_page(&self, skip: usize) -> Result<Value> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("skip", skip)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Listings request failed: {:?}", e);
                AppError::ExternalServiceError(format!("Listings request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Listings endpoint returned status {}",
                response.status()
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to read listings response: {}", e))
        })
    }
}

/// Split a raw `[batch, total]` page into its typed parts.
///
/// Anything other than an array of exactly two elements is rejected.
fn parse_page(raw: Value) -> std::result::Result<(Vec<Agency>, usize), String> {
    let Value::Array(mut parts) = raw else {
        return Err("expected a two-element array".to_string());
    };

    if parts.len() != 2 {
        return Err(format!(
            "expected a two-element array, got {} elements",
            parts.len()
        ));
    }

    let total_value = parts.remove(1);
    let batch_value = parts.remove(0);

    let batch: Vec<Agency> =
        serde_json::from_value(batch_value).map_err(|e| format!("invalid agency batch: {}", e))?;

    let total = total_value
        .as_u64()
        .ok_or_else(|| "total count is not a non-negative integer".to_string())?;

    Ok((batch, total as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn service_for(base_url: String, cache_dir: &std::path::Path) -> AgencyService {
        AgencyService::new(ListingsConfig {
            base_url,
            page_size: 12,
            cache_dir: cache_dir.to_string_lossy().into_owned(),
        })
    }

    fn page_body(count: usize, start: usize, total: usize) -> String {
        let batch: Vec<Value> = (0..count)
            .map(|i| serde_json::json!({ "id": format!("agency-{}", start + i) }))
            .collect();
        serde_json::json!([batch, total]).to_string()
    }

    #[tokio::test]
    async fn fetches_pages_until_reported_total_is_reached() {
        let mut server = mockito::Server::new_async().await;
        let cache_dir = tempfile::tempdir().unwrap();

        let first_page = server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::UrlEncoded("skip".into(), "0".into()))
            .with_header("content-type", "application/json")
            .with_body(page_body(12, 0, 13))
            .expect(1)
            .create_async()
            .await;
        let second_page = server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::UrlEncoded("skip".into(), "12".into()))
            .with_header("content-type", "application/json")
            .with_body(page_body(1, 12, 13))
            .expect(1)
            .create_async()
            .await;

        let service = service_for(
            format!("{}/listings/list-agencies", server.url()),
            cache_dir.path(),
        );
        let agencies = service.fetch_all_agencies().await.unwrap();

        assert_eq!(agencies.len(), 13);
        assert_eq!(agencies[12].id, "agency-12");
        first_page.assert_async().await;
        second_page.assert_async().await;
    }

    #[tokio::test]
    async fn cached_empty_page_short_circuits_the_network() {
        let mut server = mockito::Server::new_async().await;
        let cache_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            cache_dir.path().join("agencies_response_skip_0.json"),
            "[[], 0]",
        )
        .unwrap();

        let never_called = server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let service = service_for(
            format!("{}/listings/list-agencies", server.url()),
            cache_dir.path(),
        );
        let agencies = service.fetch_all_agencies().await.unwrap();

        assert!(agencies.is_empty());
        never_called.assert_async().await;
    }

    #[tokio::test]
    async fn malformed_cache_content_is_a_hard_error() {
        let server = mockito::Server::new_async().await;
        let cache_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            cache_dir.path().join("agencies_response_skip_0.json"),
            r#"{"batch": [], "total": 0}"#,
        )
        .unwrap();

        let service = service_for(
            format!("{}/listings/list-agencies", server.url()),
            cache_dir.path(),
        );
        let err = service.fetch_all_agencies().await.unwrap_err();

        assert!(matches!(err, AppError::Cache(_)));
    }

    #[tokio::test]
    async fn unreadable_cache_entry_falls_back_to_the_network() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        // Occupy the cache directory path with a regular file: reads under
        // it fail with NotADirectory rather than NotFound, and writes fail
        // too.
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "not a directory").unwrap();

        let page = server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::UrlEncoded("skip".into(), "0".into()))
            .with_header("content-type", "application/json")
            .with_body(page_body(1, 0, 1))
            .expect(1)
            .create_async()
            .await;

        let service = service_for(format!("{}/listings/list-agencies", server.url()), &blocked);
        let agencies = service.fetch_all_agencies().await.unwrap();

        assert_eq!(agencies.len(), 1);
        page.assert_async().await;
    }

    #[tokio::test]
    async fn cache_write_failure_is_swallowed() {
        let mut server = mockito::Server::new_async().await;
        let dir = tempfile::tempdir().unwrap();
        // create_dir_all on a path whose parent is a regular file fails, so
        // persisting the fetched page cannot succeed.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let cache_dir = blocker.join("cache");

        server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::UrlEncoded("skip".into(), "0".into()))
            .with_header("content-type", "application/json")
            .with_body(page_body(1, 0, 1))
            .create_async()
            .await;

        let service = service_for(
            format!("{}/listings/list-agencies", server.url()),
            &cache_dir,
        );
        let agencies = service.fetch_all_agencies().await.unwrap();

        assert_eq!(agencies.len(), 1);
        assert_eq!(agencies[0].id, "agency-0");
        assert!(!cache_dir.exists());
    }

    #[tokio::test]
    async fn fetched_pages_are_persisted_to_the_cache() {
        let mut server = mockito::Server::new_async().await;
        let cache_dir = tempfile::tempdir().unwrap();

        server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::UrlEncoded("skip".into(), "0".into()))
            .with_header("content-type", "application/json")
            .with_body(page_body(1, 0, 1))
            .create_async()
            .await;

        let service = service_for(
            format!("{}/listings/list-agencies", server.url()),
            cache_dir.path(),
        );
        service.fetch_all_agencies().await.unwrap();

        let cached =
            std::fs::read_to_string(cache_dir.path().join("agencies_response_skip_0.json"))
                .unwrap();
        let value: Value = serde_json::from_str(&cached).unwrap();
        assert_eq!(value.as_array().map(|parts| parts.len()), Some(2));
        assert_eq!(value[1], 1);
    }

    #[tokio::test]
    async fn upstream_failure_propagates_as_external_service_error() {
        let mut server = mockito::Server::new_async().await;
        let cache_dir = tempfile::tempdir().unwrap();

        server
            .mock("GET", "/listings/list-agencies")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let service = service_for(
            format!("{}/listings/list-agencies", server.url()),
            cache_dir.path(),
        );
        let err = service.fetch_all_agencies().await.unwrap_err();

        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }

    #[test]
    fn parse_page_rejects_non_arrays_and_wrong_lengths() {
        assert!(parse_page(serde_json::json!({"total": 2})).is_err());
        assert!(parse_page(serde_json::json!([[], 0, "extra"])).is_err());
        assert!(parse_page(serde_json::json!([[]])).is_err());
        assert!(parse_page(serde_json::json!([[], -1])).is_err());
        assert!(parse_page(serde_json::json!([[], 0])).is_ok());
    }
}
