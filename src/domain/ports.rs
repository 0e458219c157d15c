use crate::error::Result;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// A forward-only view over the rows returned by a query.
pub trait RowCursor {
    /// Advances to the next row. Returns `false` once the rows are exhausted.
    fn move_to_next(&mut self) -> Result<bool>;
    /// Reads a column of the current row. Fails if the result has no such column.
    fn get_string(&self, column: &str) -> Result<Option<String>>;
    /// Releases whatever the cursor holds open.
    fn close(&mut self);
}

/// A tabular data source identified by URI.
pub trait PaymentSystemSource: Send + Sync {
    /// Runs an unfiltered query over the table behind `uri`.
    ///
    /// `Ok(None)` means the source produced no cursor at all.
    fn query(&self, uri: &str) -> Result<Option<Box<dyn RowCursor + '_>>>;
}

pub type PaymentSystemSourceArc = Arc<dyn PaymentSystemSource>;

/// Owns a cursor and closes it exactly once when dropped.
pub struct CursorGuard<'a> {
    cursor: Box<dyn RowCursor + 'a>,
}

impl<'a> CursorGuard<'a> {
    pub fn new(cursor: Box<dyn RowCursor + 'a>) -> Self {
        Self { cursor }
    }
}

impl<'a> Deref for CursorGuard<'a> {
    type Target = dyn RowCursor + 'a;

    fn deref(&self) -> &Self::Target {
        self.cursor.as_ref()
    }
}

impl<'a> DerefMut for CursorGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor.as_mut()
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        self.cursor.close();
    }
}
