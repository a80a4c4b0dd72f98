pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use adapters::{HeadHunterBoard, SuperJobBoard};
pub use config::{AppConfig, CliConfig};
pub use domain::ports::JobBoard;
pub use self::core::engine::StatsEngine;
pub use utils::error::{Result, StatsError};
