use crate::core::paginator::Paginator;
use crate::domain::model::SourceReport;
use crate::domain::ports::JobBoard;
use crate::utils::error::Result;

/// Runs the configured language list against one source at a time. No state
/// is shared between languages or sources; a failed request aborts the run.
pub struct StatsEngine {
    languages: Vec<String>,
    paginator: Paginator,
}

impl StatsEngine {
    pub fn new(languages: Vec<String>, max_pages: u32) -> Self {
        Self {
            languages,
            paginator: Paginator::new(max_pages),
        }
    }

    pub async fn run_source(&self, board: &dyn JobBoard) -> Result<SourceReport> {
        let mut stats = Vec::with_capacity(self.languages.len());
        for language in &self.languages {
            tracing::info!("{}: collecting stats for {}", board.title(), language);
            if let Some(stat) = self.paginator.collect_language_stat(board, language).await? {
                tracing::debug!(
                    "{}: {} found={} processed={}",
                    board.title(),
                    language,
                    stat.vacancies_found,
                    stat.vacancies_processed
                );
                stats.push(stat);
            }
        }
        Ok(SourceReport {
            title: board.title().to_string(),
            stats,
        })
    }
}
