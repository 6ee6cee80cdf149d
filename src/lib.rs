pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod ingestion;
pub mod models;
pub mod rpc;
