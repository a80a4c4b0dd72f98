use crate::adapters::http::{build_client, send_with_retry, RetryPolicy};
use crate::config::AppConfig;
use crate::domain::model::{Listing, SalaryRange, VacancyPage};
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const TARGET_CURRENCY: &str = "rub";

/// SuperJob vacancy search API. Only reports a total match count, so the
/// page count is derived from it and the configured page size.
pub struct SuperJobBoard {
    client: reqwest::Client,
    base_url: String,
    app_key: String,
    count: u32,
    town: u32,
    catalogue: u32,
    retry: RetryPolicy,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    objects: Vec<VacancyItem>,
}

#[derive(Debug, Deserialize)]
struct VacancyItem {
    payment_from: Option<u64>,
    payment_to: Option<u64>,
    currency: Option<String>,
}

impl SuperJobBoard {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(config.timeout_secs))?,
            base_url: config.sj_base_url.trim_end_matches('/').to_string(),
            app_key: config.sj_app_key.clone(),
            count: config.page_size,
            town: config.town,
            catalogue: config.catalogue,
            retry: RetryPolicy::new(config.retry_attempts),
        })
    }
}

#[async_trait]
impl JobBoard for SuperJobBoard {
    fn title(&self) -> &str {
        "SuperJob"
    }

    fn target_currency(&self) -> &str {
        TARGET_CURRENCY
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/2.0/vacancies/", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("keyword", language), ("app_key", self.app_key.as_str())])
            .query(&[
                ("count", self.count),
                ("town", self.town),
                ("catalogues", self.catalogue),
                ("page", page),
            ]);

        let response = send_with_retry(request, &self.retry).await?;
        let body: SearchResponse = response.json().await?;

        let listings = body
            .objects
            .into_iter()
            .map(|item| Listing {
                currency: item.currency,
                salary: SalaryRange::new(item.payment_from, item.payment_to),
            })
            .collect();

        Ok(VacancyPage {
            found: body.total,
            pages: body.total.div_ceil(self.count as u64) as u32,
            listings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::test_config;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_page_derives_page_count() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2.0/vacancies/")
                .query_param("keyword", "Python")
                .query_param("app_key", "test-key")
                .query_param("count", "100")
                .query_param("town", "4")
                .query_param("catalogues", "48")
                .query_param("page", "0");
            then.status(200).json_body(serde_json::json!({
                "total": 250,
                "objects": [
                    {"payment_from": 0, "payment_to": 50000, "currency": "rub"},
                    {"payment_from": 80000, "payment_to": 0, "currency": "rub"}
                ]
            }));
        });

        let mut config = test_config();
        config.sj_base_url = server.url("");
        let board = SuperJobBoard::new(&config).unwrap();

        let page = board.fetch_page("Python", 0).await.unwrap();

        mock.assert();
        assert_eq!(page.found, 250);
        assert_eq!(page.pages, 3); // ceil(250 / 100)
        // Zero payment bounds normalize to absent.
        assert_eq!(page.listings[0].salary.from, None);
        assert_eq!(page.listings[0].salary.to, Some(50_000));
        assert_eq!(page.listings[1].salary.from, Some(80_000));
        assert_eq!(page.listings[1].salary.to, None);
    }

    #[tokio::test]
    async fn test_fetch_page_with_no_matches() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200)
                .json_body(serde_json::json!({"total": 0, "objects": []}));
        });

        let mut config = test_config();
        config.sj_base_url = server.url("");
        let board = SuperJobBoard::new(&config).unwrap();

        let page = board.fetch_page("Fortran", 0).await.unwrap();

        assert_eq!(page.found, 0);
        assert_eq!(page.pages, 0);
        assert!(page.listings.is_empty());
    }
}
