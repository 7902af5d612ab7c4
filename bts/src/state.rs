//! State definitions for the BTS contract
//!
//! Storage is split by owning component: the coin registry, owner set and
//! protocol state live here, balances are written only through
//! [`crate::ledger`] and fee counters only through [`crate::fee_manager`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// BMC transport contract, the only sender allowed to deliver messages
    pub bmc: Addr,
    /// This chain's network id as known to the transport
    pub network: String,
    /// Name of the native coin in the registry
    pub native_coin: String,
    /// Bank denom accepted by `TransferNativeCoin`
    pub native_denom: String,
    /// Bech32 prefix of local accounts (e.g., "terra")
    pub address_prefix: String,
}

/// Registered coin metadata
#[cw_serde]
pub struct Coin {
    /// Identifier derived from the name (EIP-55 formatted 20-byte hash)
    pub id: String,
    /// Unique coin name
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Whether this is the chain's own asset
    pub is_native: bool,
}

/// Per-account, per-coin balance in its three states
#[cw_serde]
#[derive(Default)]
pub struct Balance {
    /// Freely transferable
    pub usable: Uint128,
    /// Committed to an in-flight outbound transfer
    pub locked: Uint128,
    /// Returned by a failed transfer, claimable via `Reclaim`
    pub refundable: Uint128,
}

/// One asset of an in-flight request
#[cw_serde]
pub struct PendingAsset {
    pub coin_name: String,
    /// Net amount delivered to the receiver
    pub amount: Uint128,
    /// Fee charged on top of `amount`
    pub fee: Uint128,
}

impl PendingAsset {
    /// Amount held in the requester's locked balance for this asset
    pub fn gross(&self) -> Uint128 {
        self.amount + self.fee
    }
}

/// Outbound transfer awaiting a response
#[cw_serde]
pub struct PendingRequest {
    pub serial_number: u64,
    /// Destination network
    pub network: String,
    /// Account whose locked balance backs the request
    pub requester: Addr,
    /// Receiver BTP address
    pub to: String,
    pub assets: Vec<PendingAsset>,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bts";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coin id reported for names that are not registered
pub const ZERO_COIN_ID: &str = "0x0000000000000000000000000000000000000000";

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Owner set in insertion order
pub const OWNERS: Item<Vec<Addr>> = Item::new("owners");

/// Registered coins
/// Key: coin name, Value: Coin
pub const COINS: Map<&str, Coin> = Map::new("coins");

/// Coin names in registration order, native first
pub const COIN_NAMES: Item<Vec<String>> = Item::new("coin_names");

/// Balances
/// Key: (account, coin name), Value: Balance
pub const BALANCES: Map<(&Addr, &str), Balance> = Map::new("balances");

/// Last serial number issued per destination network
pub const SERIAL_NUMBERS: Map<&str, u64> = Map::new("serial_numbers");

/// In-flight requests
/// Key: (destination network, serial number), Value: PendingRequest
pub const PENDING_REQUESTS: Map<(&str, u64), PendingRequest> = Map::new("pending_requests");
