pub mod engine;
pub mod paginator;
pub mod salary;

pub use crate::domain::model::{LanguageStat, Listing, SalaryRange, SourceReport, VacancyPage};
pub use crate::domain::ports::JobBoard;
pub use crate::utils::error::Result;
