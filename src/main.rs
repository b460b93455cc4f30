use article_counts::utils::{logger, validation::Validate};
use article_counts::{app, collect_counts, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting article-counts");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    for line in article_counts::config::describe(&config) {
        tracing::debug!("{}", line);
    }

    if config.dry_run {
        app::log_dry_run(&config)?;
        return Ok(());
    }

    match collect_counts(config).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} rows ({} hits in total)",
                summary.rows.len(),
                summary.total_hits()
            );
            tracing::info!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Collection failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
