use std::process::ExitCode;

use dotenv::dotenv;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use portfolio_pnl::{
    functions::build_report,
    parsing::{import_prices, import_transactions},
    structs::{Config, PriceMap, TransactionManager},
};

fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let mut transactions_manager = TransactionManager::new();
    import_transactions(&config.transactions_path, &mut transactions_manager)?;

    let prices = match &config.prices_path {
        Some(path) => import_prices(path)?,
        None => PriceMap::new(),
    };

    let report = build_report(
        transactions_manager.get(),
        &prices,
        config.asset_id.as_deref(),
    );
    if report.oversell_count() > 0 {
        warn!(
            "{} sells exceed the recorded buys, their extra units have a zero cost basis",
            report.oversell_count()
        );
    }

    println!("{}", report.to_json()?);
    if let Some(path) = &config.report_path {
        report.save(path)?;
    }
    Ok(())
}
