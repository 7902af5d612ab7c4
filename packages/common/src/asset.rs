//! Asset amounts carried in cross-chain transfer requests.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// A coin name paired with an amount, as it travels between chains.
#[cw_serde]
pub struct Asset {
    /// Registered coin name (e.g., "ICON")
    pub coin_name: String,
    /// Amount in the coin's smallest unit
    pub value: Uint128,
}

impl Asset {
    pub fn new(coin_name: impl Into<String>, value: impl Into<Uint128>) -> Self {
        Self {
            coin_name: coin_name.into(),
            value: value.into(),
        }
    }
}
