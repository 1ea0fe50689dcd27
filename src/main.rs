use anyhow::Context;
use clap::Parser;
use covid_choropleth::adapters::http;
use covid_choropleth::core::ConfigProvider;
use covid_choropleth::utils::{logger, validation::Validate};
use covid_choropleth::{AggregationService, CliConfig, NameMap, ResilientFetcher, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting covid-choropleth");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            run(&config).await
        }
        None => run(&cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = ResilientFetcher::from_config(config)?;
    tracing::info!(
        "Upstream: {} (max attempts: {}, retry delay: {:?})",
        fetcher.url(),
        fetcher.policy().max_attempts(),
        fetcher.policy().delay()
    );

    // 名稱對照表只在啟動時建立一次
    let names = Arc::new(NameMap::thai_provinces());
    let service = AggregationService::new(fetcher, names);

    if let Err(e) = http::serve(&config.listen_addr(), Arc::new(service)).await {
        tracing::error!("❌ Server stopped: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}
