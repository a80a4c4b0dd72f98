pub mod headhunter;
pub mod http;
pub mod superjob;

pub use headhunter::HeadHunterBoard;
pub use superjob::SuperJobBoard;
