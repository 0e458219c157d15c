#![allow(dead_code)]

use payment_directory::domain::ports::{PaymentSystemSource, RowCursor};
use payment_directory::domain::table::PaymentSystemRow;
use payment_directory::error::{DirectoryError, Result};
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn row(
    ty: &str,
    sys_desc: &str,
    sys_id: &str,
    acc_desc: &str,
    acc_id: &str,
) -> PaymentSystemRow {
    PaymentSystemRow {
        payment_type: Some(ty.to_string()),
        payment_system_user_description: Some(sys_desc.to_string()),
        payment_system_id: Some(sys_id.to_string()),
        account_user_description: Some(acc_desc.to_string()),
        account_id: Some(acc_id.to_string()),
    }
}

/// A source whose cursor fails to read the row at `fail_at`.
#[derive(Default)]
pub struct FailingSource {
    pub rows: Vec<PaymentSystemRow>,
    pub fail_at: usize,
    pub missing_column: Option<&'static str>,
    pub closes: Arc<AtomicUsize>,
}

impl FailingSource {
    pub fn new(rows: Vec<PaymentSystemRow>, fail_at: usize) -> Self {
        Self {
            rows,
            fail_at,
            missing_column: None,
            closes: Arc::default(),
        }
    }

    /// A source whose result lacks `column` on every row.
    pub fn without_column(rows: Vec<PaymentSystemRow>, column: &'static str) -> Self {
        Self {
            missing_column: Some(column),
            ..Self::new(rows, usize::MAX)
        }
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl PaymentSystemSource for FailingSource {
    fn query(&self, _uri: &str) -> Result<Option<Box<dyn RowCursor + '_>>> {
        Ok(Some(Box::new(FailingCursor {
            source: self,
            position: None,
        })))
    }
}

struct FailingCursor<'a> {
    source: &'a FailingSource,
    position: Option<usize>,
}

impl RowCursor for FailingCursor<'_> {
    fn move_to_next(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |p| p + 1);
        self.position = Some(next);
        Ok(next < self.source.rows.len())
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        if self.source.missing_column == Some(column) {
            return Err(DirectoryError::MissingColumn {
                column: column.to_string(),
            });
        }
        let position = self.position.unwrap_or_default();
        if position == self.source.fail_at {
            return Err(DirectoryError::IoError(std::io::Error::other(
                "provider connection lost",
            )));
        }
        Ok(self.source.rows[position].column(column)?.map(str::to_string))
    }

    fn close(&mut self) {
        self.source.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// A source whose query itself fails.
pub struct BrokenSource;

impl PaymentSystemSource for BrokenSource {
    fn query(&self, _uri: &str) -> Result<Option<Box<dyn RowCursor + '_>>> {
        Err(DirectoryError::IoError(std::io::Error::other(
            "provider not reachable",
        )))
    }
}

pub fn generate_csv(path: &Path, rows: &[PaymentSystemRow]) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
