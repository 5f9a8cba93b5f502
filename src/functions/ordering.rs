use crate::structs::Transaction;

/* Transactions by effective time. The sort is stable: transactions with the same time keep their input order,
which is the only tie-break we have for bulk imports. */
pub fn chronological(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.effective_time());
    ordered
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_ties_keep_input_order() {
        let day1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let txs = vec![
            Transaction::new_buy("late", "btc", dec!(1), dec!(1), Some(day2)),
            Transaction::new_buy("first", "btc", dec!(1), dec!(1), Some(day1)),
            Transaction::new_buy("second", "btc", dec!(1), dec!(1), Some(day1)),
            Transaction::new_buy("no-date", "btc", dec!(1), dec!(1), None),
        ];

        let ids: Vec<&str> = chronological(&txs).iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["no-date", "first", "second", "late"]);
    }
}
