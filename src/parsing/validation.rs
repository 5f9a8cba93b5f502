use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    errors::ValidationError,
    structs::{Transaction, TransactionKind},
    utils::parse_timestamp,
};

/* Largest quantity, price, amount or fee accepted. Products and sums of such values stay far below Decimal::MAX */
pub const MAX_MAGNITUDE: Decimal = dec!(1000000000000);

/* The calculations trust their input: quantities, prices and fees are checked here, once, when the data comes in */
pub fn validate_transaction(tx: &Transaction) -> Result<(), ValidationError> {
    if tx.id.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "id" });
    }
    if tx.asset_id.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "asset_id" });
    }
    if tx.quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity { id: tx.id.clone() });
    }

    let non_negative = [
        ("amount_usd", tx.amount_usd),
        ("price_per_unit", tx.price_per_unit),
        ("fees", tx.fee()),
    ];
    for (field, value) in non_negative {
        if value < Decimal::ZERO {
            return Err(ValidationError::Negative {
                id: tx.id.clone(),
                field,
            });
        }
    }

    let bounded = [("quantity", tx.quantity)].into_iter().chain(non_negative);
    for (field, value) in bounded {
        if value > MAX_MAGNITUDE {
            return Err(ValidationError::Overflow {
                id: tx.id.clone(),
                field,
            });
        }
    }
    Ok(())
}

pub fn parse_kind(value: &str) -> Result<TransactionKind, ValidationError> {
    match value.trim().to_uppercase().as_str() {
        "BUY" => Ok(TransactionKind::Buy),
        "SELL" => Ok(TransactionKind::Sell),
        _ => Err(ValidationError::UnknownKind(value.to_string())),
    }
}

pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::InvalidDecimal {
            field,
            value: value.to_string(),
        })
}

/* Blank means absent */
pub fn parse_optional_decimal(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Decimal>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_decimal(field, v).map(Some),
        None => Ok(None),
    }
}

pub fn parse_optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_timestamp(v)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidTimestamp {
                field,
                value: v.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_valid_transaction() {
        let tx = Transaction::new_buy("b1", "btc", dec!(0.5), dec!(30000), None).with_fees(dec!(0));
        assert_eq!(validate_transaction(&tx), Ok(()));
    }

    #[test]
    fn test_rejects_bad_values() {
        let tx = Transaction::new_buy("b1", "btc", dec!(0), dec!(30000), None);
        assert_eq!(
            validate_transaction(&tx),
            Err(ValidationError::NonPositiveQuantity { id: "b1".to_string() })
        );

        let tx = Transaction::new_sell("s1", "btc", dec!(1), dec!(-3), None);
        assert_eq!(
            validate_transaction(&tx),
            Err(ValidationError::Negative {
                id: "s1".to_string(),
                field: "amount_usd"
            })
        );

        let tx = Transaction::new_sell("s1", "btc", dec!(1), dec!(3), None).with_fees(dec!(-1));
        assert_eq!(
            validate_transaction(&tx),
            Err(ValidationError::Negative {
                id: "s1".to_string(),
                field: "fees"
            })
        );

        let tx = Transaction::new_sell("s1", " ", dec!(1), dec!(3), None);
        assert_eq!(
            validate_transaction(&tx),
            Err(ValidationError::EmptyField { field: "asset_id" })
        );
    }

    #[test]
    fn test_rejects_huge_values() {
        let tx = Transaction::new_buy("b1", "btc", dec!(1), dec!(30000), None)
            .with_amount(dec!(10000000000000));
        assert_eq!(
            validate_transaction(&tx),
            Err(ValidationError::Overflow {
                id: "b1".to_string(),
                field: "amount_usd"
            })
        );

        let tx = Transaction::new_buy("b2", "btc", dec!(1), dec!(1), None)
            .with_amount(dec!(1))
            .with_fees(MAX_MAGNITUDE);
        assert_eq!(validate_transaction(&tx), Ok(()));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind(" buy "), Ok(TransactionKind::Buy));
        assert_eq!(parse_kind("SELL"), Ok(TransactionKind::Sell));
        assert_eq!(
            parse_kind("swap"),
            Err(ValidationError::UnknownKind("swap".to_string()))
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("quantity", "0.00012"), Ok(dec!(0.00012)));
        assert_eq!(parse_decimal("quantity", "1e-3"), Ok(dec!(0.001)));
        assert!(parse_decimal("quantity", "one").is_err());
        assert_eq!(parse_optional_decimal("fees", Some("  ")), Ok(None));
    }
}
