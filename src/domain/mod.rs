//! Domain layer: payment value types, the table contract and the ports
//! through which rows are read.

pub mod directory;
pub mod payment;
pub mod ports;
pub mod table;
