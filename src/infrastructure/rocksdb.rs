use crate::domain::ports::{PaymentSystemSource, RowCursor};
use crate::domain::table::PaymentSystemRow;
use crate::error::{DirectoryError, Result};
use rocksdb::{DB, DBIteratorWithThreadMode, IteratorMode, Options, WriteBatch};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding the payment system table.
pub const CF_PAYMENT_SYSTEMS: &str = "payment_systems";

/// A persistent payment system table stored in RocksDB.
///
/// Rows are JSON values keyed by a big-endian `u64` sequence number, so
/// iteration returns them in insertion order.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBPaymentSource {
    db: Arc<DB>,
}

impl RocksDBPaymentSource {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "payment_systems" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, path, [CF_PAYMENT_SYSTEMS])?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Appends `rows` after the last stored row in a single batch, so either
    /// every row is stored or none is. Returns how many were written.
    pub fn insert_rows<I>(&self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = PaymentSystemRow>,
    {
        let cf = self.db.cf_handle(CF_PAYMENT_SYSTEMS).ok_or_else(|| {
            DirectoryError::InternalError(Box::new(std::io::Error::other(
                "Payment systems column family not found",
            )))
        })?;

        let mut next = match self.db.iterator_cf(cf, IteratorMode::End).next() {
            Some(item) => decode_key(&item?.0)? + 1,
            None => 0,
        };

        let mut batch = WriteBatch::default();
        for row in rows {
            let value = serde_json::to_vec(&row)?;
            batch.put_cf(cf, next.to_be_bytes(), value);
            next += 1;
        }

        let written = batch.len();
        self.db.write(batch)?;

        log::debug!("Stored {} payment system rows", written);
        Ok(written)
    }
}

fn decode_key(key: &[u8]) -> Result<u64> {
    let bytes: [u8; 8] = key.try_into().map_err(|_| {
        DirectoryError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Invalid row key of {} bytes", key.len()),
        )))
    })?;
    Ok(u64::from_be_bytes(bytes))
}

impl PaymentSystemSource for RocksDBPaymentSource {
    fn query(&self, _uri: &str) -> Result<Option<Box<dyn RowCursor + '_>>> {
        let Some(cf) = self.db.cf_handle(CF_PAYMENT_SYSTEMS) else {
            return Ok(None);
        };

        let iter = self.db.iterator_cf(cf, IteratorMode::Start);
        Ok(Some(Box::new(RocksDBCursor {
            iter: Some(iter),
            current: None,
        })))
    }
}

struct RocksDBCursor<'a> {
    iter: Option<DBIteratorWithThreadMode<'a, DB>>,
    current: Option<PaymentSystemRow>,
}

impl RowCursor for RocksDBCursor<'_> {
    fn move_to_next(&mut self) -> Result<bool> {
        self.current = None;
        let Some(iter) = self.iter.as_mut() else {
            return Ok(false);
        };

        match iter.next() {
            Some(item) => {
                let (_key, value) = item?;
                self.current = Some(serde_json::from_slice(&value)?);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        let row = self.current.as_ref().ok_or_else(|| {
            DirectoryError::InternalError(Box::new(std::io::Error::other(
                "Cursor is not positioned on a row",
            )))
        })?;
        Ok(row.column(column)?.map(str::to_string))
    }

    fn close(&mut self) {
        self.iter = None;
        self.current = None;
    }
}
