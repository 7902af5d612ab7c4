//! BTS Contract - Cross-Chain Token Service Core
//!
//! Keeps per-account balances of registered coins and moves them to and from
//! remote chains through a BMC transport contract.
//!
//! # Outgoing Flow
//! 1. Client calls `Transfer`; `value` (net amount + fee) is locked
//! 2. A `TransferRequest` is sent to the BMC under the next serial number
//! 3. The remote chain answers with a `Response` for the same serial number
//! 4. `Ok` settles the locked value and accrues the fee, `Err` makes it
//!    refundable; the client later calls `Reclaim`
//! 5. Usable native coin leaves the contract through `WithdrawNativeCoin`
//!
//! # Incoming Flow
//! 1. The BMC delivers a `TransferRequest` from a remote chain
//! 2. The receiver address is decoded to its local bech32 account and every
//!    coin is resolved
//! 3. The receiver is credited and an `Ok` response is sent back
//!
//! # Fee Gathering
//! The BMC triggers `HandleFeeGathering`; all accumulated fees are shipped to
//! a BTP address as a transfer requested by the contract itself.

pub mod address_codec;
pub mod auth;
pub mod coin_registry;
pub mod contract;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;
pub mod transport;

pub use crate::address_codec::{address_to_string, string_to_address, Address};
pub use crate::error::ContractError;
pub use crate::fee_manager::{calculate_fee, FeeConfig};
