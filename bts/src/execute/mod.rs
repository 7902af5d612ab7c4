//! Execute handlers for the BTS contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `transfer` - Outbound transfers and reclaim
//! - `protocol` - Transport callbacks (requests, responses, fee gathering)
//! - `config` - Coin registration and fee settings
//! - `owners` - Owner set management

mod config;
mod owners;
mod protocol;
mod transfer;

pub use config::*;
pub use owners::*;
pub use protocol::*;
pub use transfer::*;
