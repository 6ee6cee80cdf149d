use anyhow::Result;
use tracing::{debug, info};

use crate::db::Database;
use crate::error::CrawlError;
use crate::rpc::RpcClient;

pub mod range;
pub mod records;

/// Totals for one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub blocks: u64,
    pub transactions: u64,
}

/// Drives one ingestion run: validate the range once, then fetch, build and
/// stage each block strictly in order, committing only when the whole range
/// succeeded. Any failure aborts the run and leaves storage unchanged.
pub struct IngestionService<C> {
    client: C,
    db: Database,
}

impl<C: RpcClient> IngestionService<C> {
    pub fn new(client: C, db: Database) -> Self {
        Self { client, db }
    }

    pub async fn run(&mut self, range_spec: &str) -> Result<RunStats> {
        let head = self.client.head_block_number().await?;
        let (start, end) = range::validate_range(range_spec, head)?;

        info!(start, end, head, "starting ingestion run");

        self.db.init_schema().await?;
        self.db.begin_run().await?;

        let mut stats = RunStats {
            blocks: 0,
            transactions: 0,
        };

        for number in start..=end {
            let raw = self.client.block_by_number(number).await?.ok_or_else(|| {
                CrawlError::RpcResponse(format!("node returned no block at height {number}"))
            })?;

            let (block, transactions) = records::build_records(&raw)?;

            self.db.insert_block(&block).await?;
            for tx in &transactions {
                self.db.insert_transaction(tx).await?;
            }

            stats.blocks += 1;
            stats.transactions += transactions.len() as u64;

            debug!(block = number, transactions = transactions.len(), "staged block");
        }

        self.db.commit_run().await?;

        info!(
            blocks = stats.blocks,
            transactions = stats.transactions,
            "ingestion run committed"
        );

        Ok(stats)
    }
}
