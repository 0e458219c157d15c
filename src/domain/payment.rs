use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The kind of payment a payment system accepts.
///
/// Stored in the table as the exact upper-case variant name.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Electron,
    Cash,
    Card,
    Credit,
    Advance,
    Counteroffer,
    #[default]
    Unknown,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Electron => "ELECTRON",
            PaymentType::Cash => "CASH",
            PaymentType::Card => "CARD",
            PaymentType::Credit => "CREDIT",
            PaymentType::Advance => "ADVANCE",
            PaymentType::Counteroffer => "COUNTEROFFER",
            PaymentType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no `PaymentType` variant.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownPaymentType(pub String);

impl fmt::Display for UnknownPaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown payment type '{}'", self.0)
    }
}

impl std::error::Error for UnknownPaymentType {}

impl FromStr for PaymentType {
    type Err = UnknownPaymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ELECTRON" => Ok(PaymentType::Electron),
            "CASH" => Ok(PaymentType::Cash),
            "CARD" => Ok(PaymentType::Card),
            "CREDIT" => Ok(PaymentType::Credit),
            "ADVANCE" => Ok(PaymentType::Advance),
            "COUNTEROFFER" => Ok(PaymentType::Counteroffer),
            "UNKNOWN" => Ok(PaymentType::Unknown),
            other => Err(UnknownPaymentType(other.to_string())),
        }
    }
}

/// Parses `raw` into `T`, returning `default` when the value is absent or
/// does not name a variant. Never fails.
pub fn parse_enum<T>(raw: Option<&str>, default: T) -> T
where
    T: FromStr,
{
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognized enum value '{}', using default", value);
            default
        }),
        None => default,
    }
}

/// A payment method or provider configured on the device.
///
/// Equality covers every field, which makes the whole value the grouping key.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentSystem {
    pub payment_type: PaymentType,
    pub user_description: Option<String>,
    pub id: Option<String>,
}

impl PaymentSystem {
    pub fn new(
        payment_type: PaymentType,
        user_description: Option<String>,
        id: Option<String>,
    ) -> Self {
        Self {
            payment_type,
            user_description,
            id,
        }
    }
}

/// An account registered under a payment system.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentAccount {
    pub user_description: Option<String>,
    pub id: Option<String>,
}

impl PaymentAccount {
    pub fn new(user_description: Option<String>, id: Option<String>) -> Self {
        Self {
            user_description,
            id,
        }
    }
}
