//! Message types for the BTS contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{Coin, PendingRequest};
use common::Asset;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The instantiating account becomes the first owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Name of the native coin (e.g., "PARA")
    pub native_coin_name: String,
    /// Decimals of the native coin
    pub native_decimals: u8,
    /// Bank denom accepted by `TransferNativeCoin` (e.g., "upara")
    pub native_denom: String,
    /// This chain's network id as known to the transport
    pub network: String,
    /// Bech32 prefix of local accounts, used to map inbound receivers
    pub address_prefix: String,
    /// BMC transport contract address
    pub bmc: String,
    /// Proportional fee numerator over 10000
    pub fee_numerator: u64,
    /// Flat fee per transfer (must be non-zero)
    pub fixed_fee: Uint128,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Outgoing Transfers
    // ========================================================================
    /// Transfer `value` of a coin from the caller's usable balance to a BTP
    /// address. `value` includes the fee.
    Transfer {
        coin_name: String,
        value: Uint128,
        /// Receiver as `btp://<network>/<address>`
        to: String,
    },

    /// Deposit the attached native funds and transfer them in one step
    TransferNativeCoin { to: String },

    /// Transfer several coins under one serial number
    TransferBatch {
        coin_names: Vec<String>,
        values: Vec<Uint128>,
        to: String,
    },

    /// Move refundable balance back to usable
    Reclaim { coin_name: String, value: Uint128 },

    /// Pay `value` of the caller's usable native balance out as bank coins
    WithdrawNativeCoin { value: Uint128 },

    // ========================================================================
    // Transport Callbacks
    // ========================================================================
    /// Messages delivered by the BMC transport contract
    ///
    /// Authorization: BMC only
    Transport(TransportMsg),

    // ========================================================================
    // Administration
    // ========================================================================
    /// Register a wrapped coin
    ///
    /// Authorization: Owner only
    Register {
        name: String,
        symbol: String,
        decimals: u8,
    },

    /// Authorization: Owner only
    AddOwner { owner: String },

    /// Authorization: Owner only
    RemoveOwner { owner: String },

    /// Authorization: Owner only
    SetFeeRatio { fee_numerator: u64 },

    /// Authorization: Owner only
    SetFixedFee { fixed_fee: Uint128 },

    /// Replace the BMC transport contract
    ///
    /// Authorization: Owner only
    SetBmc { bmc: String },
}

/// Inbound messages from the BMC transport
#[cw_serde]
pub enum TransportMsg {
    /// A service message from network `src` (request or response)
    HandleBtpMessage {
        src: String,
        svc: String,
        sn: u64,
        /// JSON-encoded `common::ServiceMessage`
        msg: Binary,
    },
    /// The transport failed to deliver the message we sent as `sn`
    HandleBtpError {
        src: String,
        svc: String,
        sn: u64,
        code: u32,
        msg: String,
    },
    /// Send all accumulated fees to `fee_address`
    HandleFeeGathering {
        /// Receiver as `btp://<network>/<address>`
        fee_address: String,
        svc: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnersResponse)]
    Owners {},

    #[returns(IsOwnerResponse)]
    IsOwner { address: String },

    /// Registered coin names, native first
    #[returns(CoinNamesResponse)]
    CoinNames {},

    /// Coin id, all-zero for unregistered names
    #[returns(CoinIdResponse)]
    CoinId { name: String },

    #[returns(CoinResponse)]
    Coin { name: String },

    #[returns(BalanceResponse)]
    Balance { account: String, coin_name: String },

    #[returns(BalanceBatchResponse)]
    BalanceBatch {
        account: String,
        coin_names: Vec<String>,
    },

    /// Accumulated fees per coin, native first
    #[returns(AccumulatedFeesResponse)]
    AccumulatedFees {},

    #[returns(FeeConfigResponse)]
    FeeConfig {},

    /// Fee charged on a transfer of `amount`
    #[returns(CalculateFeeResponse)]
    CalculateFee { amount: Uint128 },

    #[returns(PendingRequestResponse)]
    PendingRequest { network: String, sn: u64 },

    /// Last serial number issued for `network` (0 if none)
    #[returns(SerialNumberResponse)]
    SerialNumber { network: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub bmc: Addr,
    pub network: String,
    pub native_denom: String,
    pub native_coin_name: String,
    pub address_prefix: String,
}

#[cw_serde]
pub struct OwnersResponse {
    pub owners: Vec<Addr>,
}

#[cw_serde]
pub struct IsOwnerResponse {
    pub is_owner: bool,
}

#[cw_serde]
pub struct CoinNamesResponse {
    pub names: Vec<String>,
}

#[cw_serde]
pub struct CoinIdResponse {
    pub id: String,
}

#[cw_serde]
pub struct CoinResponse {
    pub coin: Option<Coin>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub usable: Uint128,
    pub locked: Uint128,
    pub refundable: Uint128,
}

#[cw_serde]
pub struct BalanceBatchResponse {
    pub balances: Vec<BalanceResponse>,
}

#[cw_serde]
pub struct AccumulatedFeesResponse {
    pub fees: Vec<Asset>,
}

#[cw_serde]
pub struct FeeConfigResponse {
    pub fee_numerator: u64,
    pub fee_denominator: u64,
    pub fixed_fee: Uint128,
}

#[cw_serde]
pub struct CalculateFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct PendingRequestResponse {
    pub request: Option<PendingRequest>,
}

#[cw_serde]
pub struct SerialNumberResponse {
    pub sn: u64,
}
