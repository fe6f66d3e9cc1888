use clap::Parser;
use festival_config::utils::{logger, validation::Validate};
use festival_config::{
    CliConfig, GeneratorEngine, GeneratorError, HeaderPipeline, LocalStorage, Settings,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // 缺少輸入路徑時印出用法並以狀態碼 2 結束，不會進行任何檔案 I/O
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let err = GeneratorError::from(e);
            eprint!("{}", err.user_friendly_message());
            std::process::exit(err.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting festival-config");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = match Settings::from_cli(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let pipeline = HeaderPipeline::new(LocalStorage::current_dir(), settings);
    let engine = GeneratorEngine::new(pipeline);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let result = engine.render().unwrap_or_else(|e| exit_with(e));

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(result.header.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Generated {}", output_path.display());
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: GeneratorError) -> ! {
    tracing::error!("❌ Generation failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
