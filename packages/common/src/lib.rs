//! Common - Shared Wire Types for the BTS Core and its Transport
//!
//! This package provides the type definitions exchanged between the BTS
//! contract and the BMC (message transport) contract that relays its
//! service messages to other chains.

pub mod asset;
pub mod btp_address;
pub mod transport;

pub use asset::Asset;
pub use btp_address::BtpAddress;
pub use transport::{BmcExecuteMsg, ResponseCode, ServiceMessage, SERVICE_NAME};
