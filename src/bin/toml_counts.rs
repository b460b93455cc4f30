use anyhow::Context;
use article_counts::utils::{logger, validation::Validate};
use article_counts::{app, collect_counts, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-counts")]
#[command(about = "Collect yearly article counts using a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "article-counts.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the request delay from the config, in seconds
    #[arg(long)]
    request_delay: Option<u64>,

    /// Dry run - show what would be requested without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 命令列覆蓋設定
    if let Some(delay) = args.request_delay {
        config.rate_limit = Some(article_counts::config::toml_config::RateLimitConfig {
            request_delay_seconds: delay,
        });
        tracing::info!("🔧 Request delay overridden to {}s", delay);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        app::log_dry_run(&config)?;
        return Ok(());
    }

    match collect_counts(config).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} rows ({} hits in total) to {}",
                summary.rows.len(),
                summary.total_hits(),
                summary.output_path
            );
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
