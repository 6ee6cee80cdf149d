use chrono::{DateTime, Utc};

/// One block row, ready for insertion. Numeric fields are canonical decimal
/// strings decoded from the RPC hex quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    pub number: String,
    pub hash: String,
    pub timestamp: DateTime<Utc>,
}

/// One transaction row. `sender` is absent only for malformed entries,
/// `receiver` for contract creations. `value` is denominated in ether.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub hash: String,
    pub block_hash: String,
    pub block_number: String,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub value: f64,
}
