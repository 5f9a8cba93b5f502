use std::env;

use crate::errors::ConfigError;

/* Settings of the command line report, read from the environment (a `.env` file is loaded first by the binary) */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub transactions_path: String,
    pub prices_path: Option<String>,
    pub asset_id: Option<String>, // When set, the report is the stats of this asset only
    pub report_path: Option<String>,
}

impl Config {
    pub const TRANSACTIONS_PATH: &'static str = "PORTFOLIO_TRANSACTIONS_PATH";
    pub const PRICES_PATH: &'static str = "PORTFOLIO_PRICES_PATH";
    pub const ASSET: &'static str = "PORTFOLIO_ASSET";
    pub const REPORT_PATH: &'static str = "PORTFOLIO_REPORT_PATH";

    pub fn from_env() -> Result<Self, ConfigError> {
        let transactions_path = optional_var(Self::TRANSACTIONS_PATH)
            .ok_or(ConfigError::MissingVar(Self::TRANSACTIONS_PATH))?;

        Ok(Config {
            transactions_path,
            prices_path: optional_var(Self::PRICES_PATH),
            asset_id: optional_var(Self::ASSET),
            report_path: optional_var(Self::REPORT_PATH),
        })
    }
}

/* Unset and blank variables are the same thing */
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear() {
        for key in [
            Config::TRANSACTIONS_PATH,
            Config::PRICES_PATH,
            Config::ASSET,
            Config::REPORT_PATH,
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_missing_transactions_path() {
        clear();
        assert_eq!(
            Config::from_env(),
            Err(ConfigError::MissingVar(Config::TRANSACTIONS_PATH))
        );
    }

    #[test]
    #[serial]
    fn test_full_config() {
        clear();
        env::set_var(Config::TRANSACTIONS_PATH, "data/txs.csv");
        env::set_var(Config::PRICES_PATH, "data/prices.json");
        env::set_var(Config::ASSET, "  ");
        env::set_var(Config::REPORT_PATH, "out/report.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.transactions_path, "data/txs.csv");
        assert_eq!(config.prices_path.as_deref(), Some("data/prices.json"));
        assert_eq!(config.asset_id, None);
        assert_eq!(config.report_path.as_deref(), Some("out/report.json"));
        clear();
    }
}
