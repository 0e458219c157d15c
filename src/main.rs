use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_directory::application::reader::PaymentDirectoryReader;
use payment_directory::domain::ports::PaymentSystemSourceArc;
use payment_directory::interfaces::csv::row_reader::CsvPaymentSource;
use payment_directory::interfaces::json::directory_writer::DirectoryWriter;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV export of the payment system table
    input: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[cfg(feature = "storage-rocksdb")]
fn rocksdb_source(db_path: PathBuf, input: Option<PathBuf>) -> Result<PaymentSystemSourceArc> {
    use payment_directory::infrastructure::rocksdb::RocksDBPaymentSource;
    use payment_directory::interfaces::csv::row_reader::RowReader;

    let store = RocksDBPaymentSource::open(db_path).into_diagnostic()?;

    // Import the export before reading so the database reflects it
    if let Some(input) = input {
        let file = std::fs::File::open(input).into_diagnostic()?;
        let rows = RowReader::new(file)
            .rows()
            .collect::<payment_directory::error::Result<Vec<_>>>()
            .into_diagnostic()?;
        let written = store.insert_rows(rows).into_diagnostic()?;
        log::info!("Imported {} rows", written);
    }

    Ok(Arc::new(store))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn rocksdb_source(_db_path: PathBuf, input: Option<PathBuf>) -> Result<PaymentSystemSourceArc> {
    eprintln!(
        "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to CSV input."
    );
    csv_source(input)
}

fn csv_source(input: Option<PathBuf>) -> Result<PaymentSystemSourceArc> {
    let input = input.ok_or_else(|| miette::miette!("An input CSV or --db-path is required"))?;
    Ok(Arc::new(CsvPaymentSource::new(input)))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let source = match cli.db_path {
        Some(db_path) => rocksdb_source(db_path, cli.input)?,
        None => csv_source(cli.input)?,
    };

    let reader = PaymentDirectoryReader::new(source);
    let directory = reader
        .get_payment_systems_off_thread()
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = DirectoryWriter::new(stdout.lock());
    writer.write_directory(&directory).into_diagnostic()?;

    Ok(())
}
