use crate::core::filter::ContentFilter;
use crate::core::query::QueryGenerator;
use crate::core::selection::{select_diverse, shuffle};
use crate::core::{ConfigProvider, CurationOutcome, Pipeline, Renderer, Volume};
use crate::domain::model::{BookCard, VolumeList};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

pub struct BooksPipeline<R: Renderer, C: ConfigProvider> {
    renderer: R,
    config: C,
    client: Client,
    queries: QueryGenerator,
    filter: ContentFilter,
}

impl<R: Renderer, C: ConfigProvider> BooksPipeline<R, C> {
    pub fn new(renderer: R, config: C) -> Self {
        Self {
            renderer,
            config,
            client: Client::new(),
            queries: QueryGenerator::new(),
            filter: ContentFilter::new(),
        }
    }
}

#[async_trait::async_trait]
impl<R: Renderer, C: ConfigProvider> Pipeline for BooksPipeline<R, C> {
    async fn fetch(&self) -> Result<Vec<Volume>> {
        // 每次請求都產生新的隨機查詢
        let query = self.queries.generate(&mut rand::thread_rng());
        let max_results = self.config.max_results().to_string();

        tracing::debug!(
            "Making catalog request to: {} (q: {})",
            self.config.api_endpoint(),
            query
        );

        let mut request = self
            .client
            .get(self.config.api_endpoint())
            .query(&[
                ("q", query.as_str()),
                ("maxResults", max_results.as_str()),
                ("orderBy", "newest"),
            ])
            .timeout(Duration::from_secs(self.config.timeout_seconds()));

        // 沒有金鑰也能呼叫，只是配額較低
        if !self.config.api_key().is_empty() {
            request = request.query(&[("key", self.config.api_key())]);
        }

        let response = request.send().await?;
        tracing::debug!("Catalog response status: {}", response.status());

        let body: VolumeList = response.error_for_status()?.json().await?;
        Ok(body.items)
    }

    fn curate(&self, batch: Vec<Volume>) -> CurationOutcome {
        // 過濾黑名單書籍
        let mut survivors: Vec<Volume> = batch
            .into_iter()
            .filter(|volume| !self.filter.is_blacklisted(volume))
            .collect();

        tracing::debug!("{} volumes survived content filtering", survivors.len());

        if survivors.len() < self.config.min_acceptable() {
            return CurationOutcome::TooFew {
                survivors: survivors.len(),
            };
        }

        shuffle(&mut survivors, &mut rand::thread_rng());
        CurationOutcome::Selected(select_diverse(&survivors, self.config.selection_count()))
    }

    async fn publish(&self, selection: &[Volume]) -> Result<()> {
        let cards: Vec<BookCard> = selection.iter().map(BookCard::from).collect();
        self.renderer.render(&cards)
    }
}
