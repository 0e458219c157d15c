use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};

/// Authority under which the device exposes its payment systems.
pub const AUTHORITY: &str = "ru.evotor.evotorpos.paymentSystem";
pub const BASE_URI: &str = "content://ru.evotor.evotorpos.paymentSystem";

/// Column layout of the payment system table.
///
/// One row per account; payment system columns repeat for every account
/// the system owns.
pub struct PaymentSystemTable;

impl PaymentSystemTable {
    pub const PATH: &'static str = "paymentSystem";
    pub const URI: &'static str = "content://ru.evotor.evotorpos.paymentSystem/paymentSystem";

    pub const COLUMN_PAYMENT_TYPE: &'static str = "payment_type";
    pub const COLUMN_PAYMENT_SYSTEM_USER_DESCRIPTION: &'static str =
        "payment_system_user_description";
    pub const COLUMN_PAYMENT_SYSTEM_ID: &'static str = "payment_system_id";
    pub const COLUMN_ACCOUNT_USER_DESCRIPTION: &'static str = "account_user_description";
    pub const COLUMN_ACCOUNT_ID: &'static str = "account_id";
}

/// One raw, undecoded row of the payment system table.
///
/// Field names match the column names so the row can be loaded from CSV
/// exports and stored as JSON.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct PaymentSystemRow {
    pub payment_type: Option<String>,
    pub payment_system_user_description: Option<String>,
    pub payment_system_id: Option<String>,
    pub account_user_description: Option<String>,
    pub account_id: Option<String>,
}

impl PaymentSystemRow {
    /// Looks a value up by column name.
    pub fn column(&self, column: &str) -> Result<Option<&str>> {
        let value = match column {
            PaymentSystemTable::COLUMN_PAYMENT_TYPE => &self.payment_type,
            PaymentSystemTable::COLUMN_PAYMENT_SYSTEM_USER_DESCRIPTION => {
                &self.payment_system_user_description
            }
            PaymentSystemTable::COLUMN_PAYMENT_SYSTEM_ID => &self.payment_system_id,
            PaymentSystemTable::COLUMN_ACCOUNT_USER_DESCRIPTION => &self.account_user_description,
            PaymentSystemTable::COLUMN_ACCOUNT_ID => &self.account_id,
            other => {
                return Err(DirectoryError::MissingColumn {
                    column: other.to_string(),
                });
            }
        };
        Ok(value.as_deref())
    }
}
