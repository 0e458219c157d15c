use crate::domain::directory::PaymentDirectory;
use crate::domain::payment::{PaymentAccount, PaymentSystem, PaymentType, parse_enum};
use crate::domain::ports::{CursorGuard, PaymentSystemSourceArc, RowCursor};
use crate::domain::table::PaymentSystemTable;
use crate::error::{DirectoryError, Result};

/// Read-only access to the payment systems and accounts configured on the device.
///
/// Every call issues a fresh query against the source; nothing is cached
/// between calls.
#[derive(Clone)]
pub struct PaymentDirectoryReader {
    source: PaymentSystemSourceArc,
}

impl PaymentDirectoryReader {
    /// Creates a new `PaymentDirectoryReader` over `source`.
    pub fn new(source: PaymentSystemSourceArc) -> Self {
        Self { source }
    }

    /// Returns the payment systems with the accounts registered under each.
    ///
    /// Blocks on the source for the whole scan, so it belongs on a worker
    /// thread; see [`Self::get_payment_systems_off_thread`]. A source that
    /// yields no cursor produces an empty directory. Any failure while
    /// querying or reading a column is returned as-is, and the cursor is
    /// closed before it is.
    pub fn get_payment_systems(&self) -> Result<PaymentDirectory> {
        let mut directory = PaymentDirectory::new();

        let Some(cursor) = self.source.query(PaymentSystemTable::URI)? else {
            log::debug!("No cursor returned for {}", PaymentSystemTable::URI);
            return Ok(directory);
        };
        let mut cursor = CursorGuard::new(cursor);

        let mut rows = 0usize;
        while cursor.move_to_next()? {
            let (system, account) = decode_row(&*cursor)?;
            directory.add(system, account);
            rows += 1;
        }

        log::debug!(
            "Read {} rows into {} payment systems",
            rows,
            directory.len()
        );
        Ok(directory)
    }

    /// Runs [`Self::get_payment_systems`] on the blocking thread pool.
    pub async fn get_payment_systems_off_thread(&self) -> Result<PaymentDirectory> {
        let reader = self.clone();
        tokio::task::spawn_blocking(move || reader.get_payment_systems())
            .await
            .map_err(|e| DirectoryError::InternalError(Box::new(e)))?
    }
}

fn decode_row(cursor: &dyn RowCursor) -> Result<(PaymentSystem, PaymentAccount)> {
    let payment_type = cursor.get_string(PaymentSystemTable::COLUMN_PAYMENT_TYPE)?;
    let system = PaymentSystem::new(
        parse_enum(payment_type.as_deref(), PaymentType::Unknown),
        cursor.get_string(PaymentSystemTable::COLUMN_PAYMENT_SYSTEM_USER_DESCRIPTION)?,
        cursor.get_string(PaymentSystemTable::COLUMN_PAYMENT_SYSTEM_ID)?,
    );
    let account = PaymentAccount::new(
        cursor.get_string(PaymentSystemTable::COLUMN_ACCOUNT_USER_DESCRIPTION)?,
        cursor.get_string(PaymentSystemTable::COLUMN_ACCOUNT_ID)?,
    );
    Ok((system, account))
}
