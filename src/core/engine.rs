use crate::core::{CurationOutcome, Pipeline, Volume};
use crate::utils::error::{RecError, Result};

/// Drives fetch → curate → publish cycles. A batch that loses too many
/// volumes to filtering is discarded and fetched again with a fresh query,
/// up to `max_attempts` times.
pub struct RecommendationEngine<P: Pipeline> {
    pipeline: P,
    max_attempts: u32,
}

impl<P: Pipeline> RecommendationEngine<P> {
    pub fn new(pipeline: P, max_attempts: u32) -> Self {
        Self {
            pipeline,
            max_attempts: max_attempts.max(1),
        }
    }

    pub async fn run(&self) -> Result<Vec<Volume>> {
        for attempt in 1..=self.max_attempts {
            tracing::info!(
                "📡 Fetching catalog results (attempt {}/{})",
                attempt,
                self.max_attempts
            );
            let batch = self.pipeline.fetch().await?;
            tracing::info!("📚 Received {} volumes", batch.len());

            match self.pipeline.curate(batch) {
                CurationOutcome::Selected(selection) => {
                    tracing::info!("🎯 Selected {} volumes for rendering", selection.len());
                    self.pipeline.publish(&selection).await?;
                    return Ok(selection);
                }
                CurationOutcome::TooFew { survivors } => {
                    tracing::warn!(
                        "🔁 Too few acceptable books ({} survivors). Refreshing query...",
                        survivors
                    );
                }
            }
        }

        Err(RecError::ResultsExhausted {
            attempts: self.max_attempts,
        })
    }
}
