use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One external job-search platform. Implementations own their HTTP client
/// and translate the platform's wire format into `VacancyPage`.
#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Title used for the rendered table.
    fn title(&self) -> &str;

    /// Currency code a listing must carry to be counted.
    fn target_currency(&self) -> &str;

    /// Fetch one page (zero-indexed) of search results for a language.
    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}
