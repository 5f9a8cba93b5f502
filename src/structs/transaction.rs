use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type TransactionId = String;
pub type AssetId = String;

/* A Transaction is a single trade of one asset against USD.

Transactions come from outside (an import, a database...) and are never mutated by the calculations:
every function takes a slice and builds its own state from it.

The effective time of a transaction is `occurred_at`, then `created_at`, then the unix epoch.
Two transactions can share the same effective time (bulk imports do that a lot), the position in the
input slice is then used to order them.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub asset_id: AssetId,
    pub quantity: Decimal,
    pub amount_usd: Decimal, // Gross value of the trade
    pub price_per_unit: Decimal,
    pub kind: TransactionKind,
    pub fees: Option<Decimal>,
    pub note: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl Transaction {
    pub fn new_buy(
        id: &str,
        asset_id: &str,
        quantity: Decimal,
        price_per_unit: Decimal,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self::new(id, asset_id, TransactionKind::Buy, quantity, price_per_unit, occurred_at)
    }

    pub fn new_sell(
        id: &str,
        asset_id: &str,
        quantity: Decimal,
        price_per_unit: Decimal,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self::new(id, asset_id, TransactionKind::Sell, quantity, price_per_unit, occurred_at)
    }

    /* amount_usd is deduced from the quantity and the price, use `with_amount` when the trade value differs */
    fn new(
        id: &str,
        asset_id: &str,
        kind: TransactionKind,
        quantity: Decimal,
        price_per_unit: Decimal,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Self {
        Transaction {
            id: id.to_string(),
            asset_id: asset_id.to_string(),
            quantity,
            amount_usd: quantity.saturating_mul(price_per_unit),
            price_per_unit,
            kind,
            fees: None,
            note: None,
            occurred_at,
            created_at: None,
        }
    }

    pub fn with_fees(mut self, fees: Decimal) -> Self {
        self.fees = Some(fees);
        self
    }

    pub fn with_amount(mut self, amount_usd: Decimal) -> Self {
        self.amount_usd = amount_usd;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_buy(&self) -> bool {
        self.kind == TransactionKind::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.kind == TransactionKind::Sell
    }

    pub fn fee(&self) -> Decimal {
        self.fees.unwrap_or(Decimal::ZERO)
    }

    pub fn effective_time(&self) -> DateTime<Utc> {
        self.occurred_at
            .or(self.created_at)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}
