use crate::domain::directory::PaymentDirectory;
use crate::domain::payment::{PaymentAccount, PaymentSystem};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PaymentSystemEntry<'a> {
    payment_system: &'a PaymentSystem,
    accounts: &'a [PaymentAccount],
}

/// Writes a `PaymentDirectory` as a JSON array of payment systems and their accounts.
pub struct DirectoryWriter<W: Write> {
    writer: W,
}

impl<W: Write> DirectoryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_directory(&mut self, directory: &PaymentDirectory) -> Result<()> {
        let entries: Vec<PaymentSystemEntry<'_>> = directory
            .iter()
            .map(|(payment_system, accounts)| PaymentSystemEntry {
                payment_system,
                accounts,
            })
            .collect();

        serde_json::to_writer_pretty(&mut self.writer, &entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentType;

    #[test]
    fn test_write_directory() {
        let mut directory = PaymentDirectory::new();
        directory.add(
            PaymentSystem::new(PaymentType::Card, Some("Visa".into()), Some("sys1".into())),
            PaymentAccount::new(Some("Main".into()), None),
        );

        let mut buffer = Vec::new();
        DirectoryWriter::new(&mut buffer).write_directory(&directory).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["payment_system"]["payment_type"], "CARD");
        assert_eq!(value[0]["payment_system"]["id"], "sys1");
        assert_eq!(value[0]["accounts"][0]["user_description"], "Main");
        assert!(value[0]["accounts"][0]["id"].is_null());
    }

    #[test]
    fn test_write_empty_directory() {
        let mut buffer = Vec::new();
        DirectoryWriter::new(&mut buffer)
            .write_directory(&PaymentDirectory::new())
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
