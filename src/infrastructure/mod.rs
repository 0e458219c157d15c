//! Source adapters for the payment system table.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
