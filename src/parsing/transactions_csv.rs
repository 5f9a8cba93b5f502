use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::{ImportError, ValidationError},
    structs::{Transaction, TransactionManager},
    utils::read_file,
};

use super::{
    parse_decimal, parse_kind, parse_optional_decimal, parse_optional_timestamp,
    validate_transaction,
};

/* One line of the transactions csv, as written by the user or exported by another tool.
Every field is read as text and converted afterwards so a bad value gives a readable error. */
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    #[serde(default)]
    id: Option<String>,
    asset_id: String,
    kind: String,
    quantity: String,
    #[serde(default)]
    amount_usd: Option<String>,
    price_per_unit: String,
    #[serde(default)]
    fees: Option<String>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    occurred_at: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl TransactionRecord {
    /* Missing id: a new one is generated. Missing amount: quantity x price */
    fn into_transaction(self) -> Result<Transaction, ValidationError> {
        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let quantity = parse_decimal("quantity", &self.quantity)?;
        let price_per_unit = parse_decimal("price_per_unit", &self.price_per_unit)?;
        let amount_usd = match parse_optional_decimal("amount_usd", self.amount_usd.as_deref())? {
            Some(amount) => amount,
            None => quantity
                .checked_mul(price_per_unit)
                .ok_or_else(|| ValidationError::Overflow {
                    id: id.clone(),
                    field: "amount_usd",
                })?,
        };

        let tx = Transaction {
            id,
            asset_id: self.asset_id.trim().to_string(),
            quantity,
            amount_usd,
            price_per_unit,
            kind: parse_kind(&self.kind)?,
            fees: parse_optional_decimal("fees", self.fees.as_deref())?,
            note: self.note.filter(|note| !note.trim().is_empty()),
            occurred_at: parse_optional_timestamp("occurred_at", self.occurred_at.as_deref())?,
            created_at: parse_optional_timestamp("created_at", self.created_at.as_deref())?,
        };
        validate_transaction(&tx)?;
        Ok(tx)
    }
}

/* Parse and validate every row. The first bad row stops the import, rows are numbered from 1 (header excluded) */
pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, ImportError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut transactions = Vec::new();
    for (index, result) in rdr.deserialize::<TransactionRecord>().enumerate() {
        let record = result?;
        let tx = record
            .into_transaction()
            .map_err(|error| ImportError::InvalidRecord {
                row: index + 1,
                error,
            })?;
        transactions.push(tx);
    }
    debug!("Parsed {} transactions", transactions.len());
    Ok(transactions)
}

/* Read a csv file into the manager, duplicates (same id) are skipped. Return the number of new transactions */
pub fn import_transactions(
    path: &str,
    manager: &mut TransactionManager,
) -> Result<usize, ImportError> {
    let contents = read_file(path)?;
    let transactions = parse_transactions(contents.as_bytes())?;
    let total = transactions.len();
    let added = manager.extend(transactions);
    info!("Imported {added} transactions from {path} ({} duplicates skipped)", total - added);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::structs::TransactionKind;

    const HEADER: &str =
        "id,asset_id,kind,quantity,amount_usd,price_per_unit,fees,note,occurred_at,created_at\n";

    #[test]
    fn test_parse_rows() {
        let csv = format!(
            "{HEADER}\
             b1,btc,BUY,0.5,15010,30000,10,first buy,2024-01-01T00:00:00Z,\n\
             s1, btc ,sell,0.5,,40000,,,1704153600,\n"
        );

        let txs = parse_transactions(csv.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);

        assert_eq!(txs[0].id, "b1");
        assert_eq!(txs[0].kind, TransactionKind::Buy);
        assert_eq!(txs[0].amount_usd, dec!(15010));
        assert_eq!(txs[0].fees, Some(dec!(10)));
        assert_eq!(txs[0].note.as_deref(), Some("first buy"));
        assert_eq!(
            txs[0].occurred_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );

        assert_eq!(txs[1].asset_id, "btc");
        assert_eq!(txs[1].kind, TransactionKind::Sell);
        assert_eq!(txs[1].amount_usd, dec!(20000));
        assert_eq!(txs[1].fees, None);
        assert_eq!(txs[1].note, None);
        assert_eq!(
            txs[1].occurred_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_id_is_generated() {
        let csv = format!("{HEADER},eth,buy,1,,2000,,,,\n,eth,buy,1,,2000,,,,\n");

        let txs = parse_transactions(csv.as_bytes()).unwrap();
        assert!(Uuid::parse_str(&txs[0].id).is_ok());
        assert_ne!(txs[0].id, txs[1].id);
    }

    #[test]
    fn test_invalid_row_is_reported() {
        let csv = format!("{HEADER}b1,btc,buy,1,,30000,,,,\nb2,btc,buy,-1,,30000,,,,\n");

        let error = parse_transactions(csv.as_bytes()).unwrap_err();
        assert_eq!(
            error,
            ImportError::InvalidRecord {
                row: 2,
                error: ValidationError::NonPositiveQuantity { id: "b2".to_string() }
            }
        );
    }

    #[test]
    fn test_bad_timestamp() {
        let csv = format!("{HEADER}b1,btc,buy,1,,30000,,,last tuesday,\n");

        let error = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            ImportError::InvalidRecord {
                row: 1,
                error: ValidationError::InvalidTimestamp { field: "occurred_at", .. }
            }
        ));
    }

    #[test]
    fn test_huge_values_are_rejected() {
        let csv = "asset_id,kind,quantity,price_per_unit\nbtc,buy,100000000000000000000,10000000000\n";

        let error = parse_transactions(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            ImportError::InvalidRecord {
                row: 1,
                error: ValidationError::Overflow { field: "amount_usd", .. }
            }
        ));

        let csv = format!("{HEADER}b1,btc,buy,100000000000000000000,1,1,,,,\n");
        let error = parse_transactions(csv.as_bytes()).unwrap_err();
        assert_eq!(
            error,
            ImportError::InvalidRecord {
                row: 1,
                error: ValidationError::Overflow {
                    id: "b1".to_string(),
                    field: "quantity"
                }
            }
        );
    }

    #[test]
    fn test_minimal_columns() {
        let csv = "asset_id,kind,quantity,price_per_unit\nbtc,buy,2,100\n";

        let txs = parse_transactions(csv.as_bytes()).unwrap();
        assert_eq!(txs[0].amount_usd, dec!(200));
        assert_eq!(txs[0].occurred_at, None);
    }
}
