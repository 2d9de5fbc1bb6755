pub mod engine;
pub mod filter;
pub mod pipeline;
pub mod query;
pub mod selection;

pub use crate::domain::model::{BookCard, CurationOutcome, Volume, VolumeInfo, VolumeList};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Renderer};
pub use crate::utils::error::Result;
