use crate::core::ConfigProvider;
use crate::utils::error::{RecError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "book-rec")]
#[command(about = "Fetches and curates upbeat book recommendations")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "", help = "Catalog API key (keyless calls get a lower quota)")]
    pub api_key: String,

    #[arg(long, default_value = "40", help = "Results requested per fetch (catalog caps at 40)")]
    pub max_results: u32,

    #[arg(long, default_value = "5", help = "Minimum acceptable volumes before rendering")]
    pub min_acceptable: usize,

    #[arg(long, default_value = "10", help = "Number of recommendation cards to render")]
    pub count: usize,

    #[arg(long, default_value = "5", help = "Fetch attempts before giving up")]
    pub max_attempts: u32,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn max_results(&self) -> u32 {
        self.max_results
    }

    fn min_acceptable(&self) -> usize {
        self.min_acceptable
    }

    fn selection_count(&self) -> usize {
        self.count
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_range("max_results", self.max_results, 1, 40)?;
        validation::validate_positive_number("min_acceptable", self.min_acceptable, 1)?;
        validation::validate_positive_number("count", self.count, 1)?;
        validation::validate_range("max_attempts", self.max_attempts, 1, 20)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;

        if self.min_acceptable > self.max_results as usize {
            return Err(RecError::InvalidConfigValueError {
                field: "min_acceptable".to_string(),
                value: self.min_acceptable.to_string(),
                reason: format!("Cannot exceed max_results ({})", self.max_results),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("book-rec").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_catalog_contract() {
        let config = parse(&[]);

        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.max_results, 40);
        assert_eq!(config.min_acceptable, 5);
        assert_eq!(config.count, 10);
        assert_eq!(config.max_attempts, 5);
        assert!(config.api_key.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_max_results() {
        let config = parse(&["--max-results", "0"]);
        assert!(config.validate().is_err());

        let config = parse(&["--max-results", "41"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_threshold_above_fetch_size() {
        let config = parse(&["--max-results", "10", "--min-acceptable", "11"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let config = parse(&["--api-endpoint", "ftp://books.example"]);
        assert!(config.validate().is_err());
    }
}
