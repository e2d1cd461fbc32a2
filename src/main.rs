use clap::Parser;
use iss_flyover::config::OutputFormat;
use iss_flyover::utils::{logger, validation::Validate};
use iss_flyover::{report, CliArgs, FlyoverError, HttpFlyoverEngine, PassList};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(config.logging.verbose, config.logging.json);
    tracing::debug!("Effective config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let engine = match HttpFlyoverEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => exit_with(&e),
    };

    match engine.get_upcoming_passes().await {
        Ok(passes) => {
            if let Err(e) = print_passes(&passes, args.format) {
                exit_with(&e);
            }
        }
        Err(e) => {
            tracing::error!("❌ Could not determine upcoming passes: {}", e);
            exit_with(&e);
        }
    }
}

fn print_passes(passes: &PassList, format: OutputFormat) -> iss_flyover::Result<()> {
    let output = match format {
        OutputFormat::Text => report::render_text(passes, &chrono::Local),
        OutputFormat::Json => report::render_json(passes)?,
        OutputFormat::Csv => report::render_csv(passes)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn exit_with(e: &FlyoverError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
