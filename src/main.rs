use clap::Parser;
use multi_catch_demo::utils::{logger, validation::Validate};
use multi_catch_demo::{CliConfig, ConsoleSink, DemoEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting multi-catch-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let roster = match config.validate().and_then(|_| config.resolve_roster()) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let mut engine = DemoEngine::new(ConsoleSink);
    let outcome = engine.run(&roster)?;

    tracing::debug!(
        "Printed {} names, handler: {:?}",
        outcome.elements_printed,
        outcome.handled_by
    );

    Ok(())
}
