pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::render::ConsoleRenderer;
pub use config::CliConfig;
pub use core::{engine::RecommendationEngine, pipeline::BooksPipeline};
pub use utils::error::{RecError, Result};
