use crate::domain::ports::{PaymentSystemSource, RowCursor};
use crate::domain::table::PaymentSystemRow;
use crate::error::{DirectoryError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A payment system source backed by rows held in memory.
///
/// Counts how many cursors it handed out were closed, which makes it
/// suitable for verifying release behaviour in tests.
#[derive(Default, Clone)]
pub struct InMemoryPaymentSource {
    rows: Option<Arc<Vec<PaymentSystemRow>>>,
    closes: Arc<AtomicUsize>,
}

impl InMemoryPaymentSource {
    /// Creates a source whose queries return `rows` in order.
    pub fn new(rows: Vec<PaymentSystemRow>) -> Self {
        Self {
            rows: Some(Arc::new(rows)),
            closes: Arc::default(),
        }
    }

    /// Creates a source whose queries return no cursor.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Number of cursor closes observed so far.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl PaymentSystemSource for InMemoryPaymentSource {
    fn query(&self, _uri: &str) -> Result<Option<Box<dyn RowCursor + '_>>> {
        Ok(self.rows.as_ref().map(|rows| {
            Box::new(InMemoryCursor {
                rows: rows.as_slice(),
                position: None,
                closed: false,
                closes: &self.closes,
            }) as Box<dyn RowCursor + '_>
        }))
    }
}

struct InMemoryCursor<'a> {
    rows: &'a [PaymentSystemRow],
    position: Option<usize>,
    closed: bool,
    closes: &'a AtomicUsize,
}

impl RowCursor for InMemoryCursor<'_> {
    fn move_to_next(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |p| p + 1);
        self.position = Some(next.min(self.rows.len()));
        Ok(next < self.rows.len())
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        let row = self
            .position
            .and_then(|p| self.rows.get(p))
            .ok_or_else(|| {
                DirectoryError::InternalError(Box::new(std::io::Error::other(
                    "Cursor is not positioned on a row",
                )))
            })?;
        Ok(row.column(column)?.map(str::to_string))
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ty: &str, account_id: &str) -> PaymentSystemRow {
        PaymentSystemRow {
            payment_type: Some(ty.to_string()),
            account_id: Some(account_id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_in_memory_cursor_walks_rows_in_order() {
        let source = InMemoryPaymentSource::new(vec![row("CARD", "acc1"), row("CASH", "acc2")]);
        let mut cursor = source.query("any").unwrap().unwrap();

        assert!(cursor.move_to_next().unwrap());
        assert_eq!(cursor.get_string("account_id").unwrap().as_deref(), Some("acc1"));
        assert!(cursor.move_to_next().unwrap());
        assert_eq!(cursor.get_string("payment_type").unwrap().as_deref(), Some("CASH"));
        assert!(!cursor.move_to_next().unwrap());
        assert!(!cursor.move_to_next().unwrap());
        assert!(cursor.get_string("account_id").is_err());
    }

    #[test]
    fn test_in_memory_close_is_idempotent() {
        let source = InMemoryPaymentSource::new(vec![]);
        let mut cursor = source.query("any").unwrap().unwrap();
        cursor.close();
        cursor.close();
        drop(cursor);

        assert_eq!(source.close_count(), 1);
    }

    #[test]
    fn test_unavailable_source_returns_no_cursor() {
        let source = InMemoryPaymentSource::unavailable();
        assert!(source.query("any").unwrap().is_none());
        assert_eq!(source.close_count(), 0);
    }
}
