use rust_decimal::Decimal;
use serde::Serialize;

/* Average cost view of what is currently held for one asset.

`total_invested` is the money still tied up in the remaining quantity, not the lifetime amount put in.
`total_fees` counts both buy and sell fees. */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Holding {
    pub quantity: Decimal,
    pub avg_cost_basis: Decimal,
    pub total_invested: Decimal,
    pub total_fees: Decimal,
}

impl Holding {
    pub fn is_held(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}
