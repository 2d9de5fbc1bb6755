use book_rec::domain::ports::Renderer;
use book_rec::utils::{logger, validation::Validate};
use book_rec::{BooksPipeline, CliConfig, ConsoleRenderer, RecError, RecommendationEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting book-rec CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let max_attempts = config.max_attempts;

    // 創建渲染器和管道
    let renderer = ConsoleRenderer::new();
    let pipeline = BooksPipeline::new(renderer.clone(), config);

    // 創建推薦引擎並運行
    let engine = RecommendationEngine::new(pipeline, max_attempts);

    match engine.run().await {
        Ok(selection) => {
            tracing::info!("✅ Recommendation run completed successfully!");
            tracing::info!("📚 {} cards rendered", selection.len());
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Recommendation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            if let RecError::ResultsExhausted { .. } = e {
                // 顯示空狀態，不視為錯誤
                renderer.render_empty()?;
            } else {
                // 輸出用戶友好的錯誤信息
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 建議: {}", e.recovery_suggestion());
            }

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                book_rec::utils::error::ErrorSeverity::Low => 0,
                book_rec::utils::error::ErrorSeverity::Medium => 2,
                book_rec::utils::error::ErrorSeverity::High => 1,
                book_rec::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
