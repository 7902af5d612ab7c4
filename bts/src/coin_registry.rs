//! Coin Registry
//!
//! Maps coin names to their metadata. Names are unique and permanent; the
//! native coin is registered at instantiation and is always listed first.

use cosmwasm_std::{StdResult, Storage};

use crate::address_codec::{address_to_string, keccak256};
use crate::error::ContractError;
use crate::state::{Coin, COINS, COIN_NAMES, ZERO_COIN_ID};

/// Stable id for a coin name: the last 20 bytes of `keccak256(name)`,
/// formatted as a checksummed address.
pub fn derive_coin_id(name: &str) -> String {
    let hash = keccak256(name.as_bytes());
    let mut id = [0u8; 20];
    id.copy_from_slice(&hash[12..32]);
    address_to_string(&id)
}

/// Register a new coin and append it to the ordered name list
pub fn register_coin(
    storage: &mut dyn Storage,
    name: &str,
    symbol: &str,
    decimals: u8,
    is_native: bool,
) -> Result<Coin, ContractError> {
    if COINS.has(storage, name) {
        return Err(ContractError::CoinAlreadyExists {
            name: name.to_string(),
        });
    }

    let coin = Coin {
        id: derive_coin_id(name),
        name: name.to_string(),
        symbol: symbol.to_string(),
        decimals,
        is_native,
    };
    COINS.save(storage, name, &coin)?;

    let mut names = COIN_NAMES.may_load(storage)?.unwrap_or_default();
    names.push(name.to_string());
    COIN_NAMES.save(storage, &names)?;

    Ok(coin)
}

pub fn resolve_coin(storage: &dyn Storage, name: &str) -> StdResult<Option<Coin>> {
    COINS.may_load(storage, name)
}

/// Resolve a coin, failing with `UnknownCoin` if it is not registered
pub fn require_coin(storage: &dyn Storage, name: &str) -> Result<Coin, ContractError> {
    resolve_coin(storage, name)?.ok_or_else(|| ContractError::UnknownCoin {
        name: name.to_string(),
    })
}

/// Coin id, or the all-zero id for unknown names
pub fn coin_id(storage: &dyn Storage, name: &str) -> StdResult<String> {
    Ok(resolve_coin(storage, name)?
        .map(|coin| coin.id)
        .unwrap_or_else(|| ZERO_COIN_ID.to_string()))
}

pub fn coin_names(storage: &dyn Storage) -> StdResult<Vec<String>> {
    Ok(COIN_NAMES.may_load(storage)?.unwrap_or_default())
}
