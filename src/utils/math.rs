use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/* numerator / denominator * 100, or 0 when the denominator is 0 (never a division by zero) */
pub fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}
