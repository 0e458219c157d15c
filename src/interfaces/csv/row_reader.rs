use crate::domain::ports::{PaymentSystemSource, RowCursor};
use crate::domain::table::PaymentSystemRow;
use crate::error::{DirectoryError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;

// Only headers are trimmed; descriptions and type names are compared verbatim.
fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::Headers).flexible(true);
    builder
}

/// Reads payment system rows from a CSV export of the table.
///
/// The header row names the columns; their order does not matter.
pub struct RowReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RowReader<R> {
    /// Creates a new `RowReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_builder().from_reader(source),
        }
    }

    /// Returns an iterator that lazily deserializes rows. Empty fields become `None`.
    pub fn rows(self) -> impl Iterator<Item = Result<PaymentSystemRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DirectoryError::from))
    }
}

/// A cursor over CSV records, addressing fields by header name.
///
/// Empty fields and fields missing from short records read as null.
pub struct CsvRowCursor<R: Read> {
    reader: Option<csv::Reader<R>>,
    headers: csv::StringRecord,
    record: Option<csv::StringRecord>,
}

impl<R: Read> CsvRowCursor<R> {
    pub fn new(source: R) -> Result<Self> {
        let mut reader = reader_builder().from_reader(source);
        let headers = reader.headers()?.clone();
        Ok(Self {
            reader: Some(reader),
            headers,
            record: None,
        })
    }
}

impl<R: Read> RowCursor for CsvRowCursor<R> {
    fn move_to_next(&mut self) -> Result<bool> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };

        let mut record = self.record.take().unwrap_or_default();
        if reader.read_record(&mut record)? {
            self.record = Some(record);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        let index = self
            .headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| DirectoryError::MissingColumn {
                column: column.to_string(),
            })?;
        let record = self.record.as_ref().ok_or_else(|| {
            DirectoryError::InternalError(Box::new(std::io::Error::other(
                "Cursor is not positioned on a row",
            )))
        })?;

        Ok(record
            .get(index)
            .filter(|value| !value.is_empty())
            .map(str::to_string))
    }

    fn close(&mut self) {
        self.reader = None;
        self.record = None;
    }
}

/// A payment system source reading a CSV export from disk.
///
/// A missing file yields no cursor; other I/O failures are returned.
pub struct CsvPaymentSource {
    path: PathBuf,
}

impl CsvPaymentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaymentSystemSource for CsvPaymentSource {
    fn query(&self, uri: &str) -> Result<Option<Box<dyn RowCursor + '_>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, no rows for {}", self.path.display(), uri);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(Box::new(CsvRowCursor::new(file)?)))
    }
}
