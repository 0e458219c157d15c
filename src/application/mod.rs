//! Application layer exposing the payment directory to callers.
//!
//! This module defines the `PaymentDirectoryReader` which queries a
//! `PaymentSystemSource` and folds the returned rows into a grouped
//! `PaymentDirectory`.

pub mod reader;
