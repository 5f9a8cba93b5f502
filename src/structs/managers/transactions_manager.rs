use hashbrown::HashMap;

use crate::structs::{Transaction, TransactionId};

/* This transaction manager merges transactions coming from several sources (csv files, manual entries...) while
preventing duplicates. It only lives in memory.

The insertion order is kept as is: it is the tie-break between transactions with the same timestamp, so the
manager never sorts its content. */
#[derive(Debug, Default, Clone)]
pub struct TransactionManager {
    transactions: Vec<Transaction>,
    index_by_id: HashMap<TransactionId, usize>, // the ID must come from external sources OR be generated once at import
}

impl TransactionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    /* Add transaction by avoiding duplicates, return false if the id was already known */
    pub fn push(&mut self, tx: Transaction) -> bool {
        if self.index_by_id.contains_key(&tx.id) {
            return false;
        }
        self.index_by_id.insert(tx.id.clone(), self.transactions.len());
        self.transactions.push(tx);
        true
    }

    /* Extends transaction by avoiding duplicates, return the number of transactions added */
    pub fn extend(&mut self, txs: Vec<Transaction>) -> usize {
        let mut added = 0;
        for tx in txs {
            if self.push(tx) {
                added += 1;
            }
        }
        added
    }

    /* Add transaction by replacing the one with the same id, at its original position */
    pub fn push_update(&mut self, tx: Transaction) {
        if let Some(index) = self.index_by_id.get(&tx.id).copied() {
            self.transactions[index] = tx;
        } else {
            self.push(tx);
        }
    }

    /* Extends transaction by updating duplicates */
    pub fn extend_update(&mut self, txs: Vec<Transaction>) {
        for tx in txs {
            self.push_update(tx);
        }
    }

    pub fn for_asset(&self, asset_id: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.asset_id == asset_id)
            .cloned()
            .collect()
    }
}
