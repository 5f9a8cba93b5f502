use hashbrown::HashMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    errors::{ImportError, ValidationError},
    structs::PriceMap,
    utils::read_file,
};

/* Prices come as a json object: {"btc": 64000.5, "eth": "3100.25"}. Numbers and strings are both accepted */
pub fn parse_prices(json: &str) -> Result<PriceMap, ImportError> {
    let raw: HashMap<String, Decimal> = serde_json::from_str(json)?;

    let mut prices = PriceMap::new();
    for (asset_id, price) in raw {
        let asset_id = asset_id.trim().to_string();
        if price < Decimal::ZERO {
            return Err(ImportError::InvalidPrice {
                asset_id: asset_id.clone(),
                error: ValidationError::Negative {
                    id: asset_id,
                    field: "price",
                },
            });
        }
        prices.insert(asset_id, price);
    }
    debug!("Parsed {} prices", prices.len());
    Ok(prices)
}

pub fn import_prices(path: &str) -> Result<PriceMap, ImportError> {
    let contents = read_file(path)?;
    parse_prices(&contents)
}
