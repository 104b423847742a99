use clap::Parser;
use small_store::core::ConfigProvider;
use small_store::utils::logger;
use small_store::{CliConfig, FileCatalog, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.log_filter(), settings.log_format());

    tracing::info!("Starting small-store");
    tracing::debug!("Resolved settings: {:?}", settings);

    let catalog = FileCatalog::new(settings.catalog_path());
    tracing::info!("Using catalog {}", catalog.path().display());
    let stdout = std::io::stdout();
    let mut session = Session::new(catalog, stdout.lock());

    session.load()?;
    session.run(std::io::stdin().lock())?;

    tracing::info!("Session ended");
    Ok(())
}
