use crate::adapters::http::{build_client, send_with_retry, RetryPolicy};
use crate::config::AppConfig;
use crate::domain::model::{Listing, SalaryRange, VacancyPage};
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const TARGET_CURRENCY: &str = "RUR";
const SEARCH_PREFIX: &str = "Разработчик";

/// HeadHunter vacancy search API. Reports its own total page count.
pub struct HeadHunterBoard {
    client: reqwest::Client,
    base_url: String,
    area: u32,
    period: u32,
    per_page: u32,
    retry: RetryPolicy,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    found: u64,
    pages: u32,
    items: Vec<VacancyItem>,
}

#[derive(Debug, Deserialize)]
struct VacancyItem {
    salary: Option<WireSalary>,
}

#[derive(Debug, Deserialize)]
struct WireSalary {
    from: Option<u64>,
    to: Option<u64>,
    currency: Option<String>,
}

impl HeadHunterBoard {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(config.timeout_secs))?,
            base_url: config.hh_base_url.trim_end_matches('/').to_string(),
            area: config.area,
            period: config.period,
            per_page: config.page_size,
            retry: RetryPolicy::new(config.retry_attempts),
        })
    }
}

#[async_trait]
impl JobBoard for HeadHunterBoard {
    fn title(&self) -> &str {
        "HeadHunter"
    }

    fn target_currency(&self) -> &str {
        TARGET_CURRENCY
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/vacancies", self.base_url);
        let text = format!("{} {}", SEARCH_PREFIX, language);
        // Fresh descriptor per page, nothing carried across iterations.
        let request = self
            .client
            .get(&url)
            .query(&[("text", text.as_str())])
            .query(&[
                ("area", self.area),
                ("period", self.period),
                ("per_page", self.per_page),
                ("page", page),
            ]);

        let response = send_with_retry(request, &self.retry).await?;
        let body: SearchResponse = response.json().await?;

        let listings = body
            .items
            .into_iter()
            .map(|item| match item.salary {
                Some(salary) => Listing {
                    currency: salary.currency,
                    salary: SalaryRange::new(salary.from, salary.to),
                },
                None => Listing {
                    currency: None,
                    salary: SalaryRange::default(),
                },
            })
            .collect();

        Ok(VacancyPage {
            found: body.found,
            pages: body.pages,
            listings,
        })
    }
}
