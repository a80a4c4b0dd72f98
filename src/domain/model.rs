/// Lower/upper compensation bounds as reported by a listing. Either side may
/// be absent; a reported zero means "unspecified" and is normalized to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl SalaryRange {
    pub fn new(from: Option<u64>, to: Option<u64>) -> Self {
        Self {
            from: from.filter(|v| *v > 0),
            to: to.filter(|v| *v > 0),
        }
    }

    pub fn has_bound(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// One job posting as normalized from a source's wire format.
#[derive(Debug, Clone)]
pub struct Listing {
    pub currency: Option<String>,
    pub salary: SalaryRange,
}

/// One page of search results. `found` and `pages` describe the whole result
/// set; sources that only report a total get `pages` computed by the adapter.
#[derive(Debug, Clone)]
pub struct VacancyPage {
    pub found: u64,
    pub pages: u32,
    pub listings: Vec<Listing>,
}

/// Aggregate for one language from one source. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStat {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<u64>,
}

/// All stats collected from one source, in input language order. Languages
/// with no matches are simply not present.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub title: String,
    pub stats: Vec<LanguageStat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_range_normalizes_zero_to_absent() {
        let range = SalaryRange::new(Some(0), Some(50_000));
        assert_eq!(range.from, None);
        assert_eq!(range.to, Some(50_000));
        assert!(range.has_bound());
    }

    #[test]
    fn test_salary_range_without_bounds() {
        assert!(!SalaryRange::new(None, None).has_bound());
        assert!(!SalaryRange::new(Some(0), Some(0)).has_bound());
    }
}
