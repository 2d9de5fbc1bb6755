use crate::domain::model::{BookCard, CurationOutcome, Volume};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Display collaborator. The pipeline hands it a finished batch of cards and
/// never inspects what it does with them.
pub trait Renderer: Send + Sync {
    fn render(&self, cards: &[BookCard]) -> Result<()>;

    /// Shown when every attempt came back with too few acceptable books.
    fn render_empty(&self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn max_results(&self) -> u32;
    fn min_acceptable(&self) -> usize;
    fn selection_count(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Volume>>;
    fn curate(&self, batch: Vec<Volume>) -> CurationOutcome;
    async fn publish(&self, selection: &[Volume]) -> Result<()>;
}
