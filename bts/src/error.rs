//! Error types for the BTS contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized")]
    Unauthorized,

    // ========================================================================
    // Owner Errors
    // ========================================================================

    #[error("Owner already exists: {owner}")]
    OwnerAlreadyExists { owner: String },

    #[error("Not an owner: {owner}")]
    NotOwner { owner: String },

    #[error("Cannot remove last owner")]
    CannotRemoveLastOwner,

    // ========================================================================
    // Coin Registry Errors
    // ========================================================================

    #[error("Coin already exists: {name}")]
    CoinAlreadyExists { name: String },

    #[error("Unknown coin: {name}")]
    UnknownCoin { name: String },

    // ========================================================================
    // Balance Errors
    // ========================================================================

    #[error("Insufficient balance: usable {usable}, requested {requested}")]
    InsufficientBalance { usable: Uint128, requested: Uint128 },

    #[error("Imbalance: available {available}, requested {requested}")]
    Imbalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Invalid setting: {reason}")]
    InvalidSetting { reason: String },

    // ========================================================================
    // Protocol Errors
    // ========================================================================

    #[error("Unknown request: network {network}, sn {sn}")]
    UnknownRequest { network: String, sn: u64 },

    #[error("Invalid service: {svc}")]
    InvalidService { svc: String },

    #[error("Invalid BTP address: {reason}")]
    InvalidBtpAddress { reason: String },

    // ========================================================================
    // Address Codec Errors
    // ========================================================================

    #[error("Invalid address format: {address}")]
    InvalidAddressFormat { address: String },

    #[error("Invalid checksum: {address}")]
    InvalidChecksum { address: String },
}
