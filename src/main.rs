use clap::Parser;
use enterprise_adapter::utils::error::{AdapterError, ErrorSeverity};
use enterprise_adapter::utils::{logger, validation::Validate};
use enterprise_adapter::{AdapterEngine, CliConfig, EnterpriseHandler, LocalStorage};

fn exit_code(e: &AdapterError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2, // 可重試
        ErrorSeverity::High => 1,   // 設定或輸入錯誤
    }
}

fn fail(e: &AdapterError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 設定檔要在日誌初始化之前載入，才能套用 [logging]
    let toml = match config.load_and_merge() {
        Ok(toml) => toml,
        Err(e) => fail(&e),
    };

    logger::init_logger(config.log_format(), config.verbose, config.log_level.as_deref());

    tracing::info!("Starting enterprise-adapter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let validation = match &toml {
        Some(toml) => toml.validate().and_then(|_| config.validate()),
        None => config.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    if let Some(toml) = &toml {
        tracing::info!(adapter = toml.name(), "Loaded adapter config");
    }

    let engine = AdapterEngine::new(EnterpriseHandler::new(), LocalStorage::default());

    match engine.run(&config).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Handled {} request(s), {} bytes written to {}",
                summary.requests,
                summary.bytes_out,
                summary.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Adapter run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    }

    Ok(())
}
