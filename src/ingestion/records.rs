use crate::codec;
use crate::error::CrawlError;
use crate::models::{BlockRecord, TransactionRecord};
use crate::rpc::{RawBlock, RawTransaction};

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CrawlError> {
    value.ok_or_else(|| CrawlError::MalformedHex(format!("{field} absent")))
}

/// Builds the block row and one transaction row per entry. A decode failure
/// anywhere discards the whole block; there is no partial persistence.
pub fn build_records(raw: &RawBlock) -> Result<(BlockRecord, Vec<TransactionRecord>), CrawlError> {
    let block = BlockRecord {
        number: codec::decode_quantity(required("block number", raw.number.as_deref())?)?,
        hash: codec::decode_quantity(required("block hash", raw.hash.as_deref())?)?,
        timestamp: codec::decode_timestamp(required("block timestamp", raw.timestamp.as_deref())?)?,
    };

    let transactions = raw
        .transactions
        .iter()
        .map(build_transaction)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((block, transactions))
}

fn build_transaction(raw: &RawTransaction) -> Result<TransactionRecord, CrawlError> {
    // `from` and `to` are the only optional fields: no `to` on contract
    // creation, no `from` on malformed entries.
    let sender = raw.from.as_deref().map(codec::decode_quantity).transpose()?;
    let receiver = raw.to.as_deref().map(codec::decode_quantity).transpose()?;

    Ok(TransactionRecord {
        hash: codec::decode_quantity(required("transaction hash", raw.hash.as_deref())?)?,
        block_hash: codec::decode_quantity(required("transaction blockHash", raw.block_hash.as_deref())?)?,
        block_number: codec::decode_quantity(required("transaction blockNumber", raw.block_number.as_deref())?)?,
        sender,
        receiver,
        value: codec::decode_wei_to_ether(required("transaction value", raw.value.as_deref())?)?,
    })
}
