use crate::core::salary;
use crate::domain::model::{LanguageStat, VacancyPage};
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;

/// Walks every result page for one language on one source and accumulates
/// salary estimates. Page requests run strictly one at a time.
pub struct Paginator {
    max_pages: u32,
}

impl Paginator {
    pub fn new(max_pages: u32) -> Self {
        Self { max_pages }
    }

    /// Returns `Ok(None)` when the source reports zero matches. The page
    /// limit comes from the first response, capped by `max_pages` so an
    /// inconsistent server cannot keep us fetching forever.
    pub async fn collect_language_stat(
        &self,
        board: &dyn JobBoard,
        language: &str,
    ) -> Result<Option<LanguageStat>> {
        let first = board.fetch_page(language, 0).await?;
        if first.found == 0 {
            tracing::debug!("{}: no matches for {}", board.title(), language);
            return Ok(None);
        }

        let page_limit = first.pages.min(self.max_pages);
        if first.pages > self.max_pages {
            tracing::warn!(
                "{}: {} reports {} pages, capping at {}",
                board.title(),
                language,
                first.pages,
                self.max_pages
            );
        }

        let (mut sum, mut processed) = page_totals(board.target_currency(), &first);
        for page in 1..page_limit {
            tracing::debug!("{}: {} page {}/{}", board.title(), language, page, page_limit);
            let next = board.fetch_page(language, page).await?;
            let (page_sum, page_count) = page_totals(board.target_currency(), &next);
            sum += page_sum;
            processed += page_count;
        }

        // Every listing may lack usable salary data even when found > 0.
        let average_salary = if processed > 0 {
            Some((sum / processed as f64).floor() as u64)
        } else {
            None
        };

        Ok(Some(LanguageStat {
            language: language.to_string(),
            vacancies_found: first.found,
            vacancies_processed: processed,
            average_salary,
        }))
    }
}

fn page_totals(target_currency: &str, page: &VacancyPage) -> (f64, u64) {
    let mut sum = 0.0;
    let mut count = 0u64;
    for listing in &page.listings {
        if listing.currency.as_deref() != Some(target_currency) {
            continue;
        }
        if !listing.salary.has_bound() {
            continue;
        }
        if let Some(value) = salary::estimate_range(&listing.salary) {
            sum += value;
            count += 1;
        }
    }
    (sum, count)
}
