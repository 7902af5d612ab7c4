//! Balance Ledger
//!
//! Each (account, coin) pair holds value in three states:
//!
//! | State      | Meaning                                      |
//! |------------|----------------------------------------------|
//! | usable     | freely transferable                          |
//! | locked     | committed to an in-flight outbound transfer  |
//! | refundable | returned by a failed transfer, reclaimable   |
//!
//! ## Transitions
//!
//! ```text
//! credit          -> usable
//! debit           usable ->            (native coin paid out)
//! lock            usable -> locked
//! settle_success  locked ->            (value left the chain)
//! settle_failure  locked -> refundable
//! reclaim         refundable -> usable
//! ```
//!
//! These functions are the only writers of [`BALANCES`]. Each one checks its
//! precondition before writing, so an `Err` never leaves a partial update.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Balance, BALANCES};

/// Load a balance, defaulting to all-zero for unseen pairs
pub fn load_balance(storage: &dyn Storage, account: &Addr, coin_name: &str) -> StdResult<Balance> {
    Ok(BALANCES
        .may_load(storage, (account, coin_name))?
        .unwrap_or_default())
}

/// Load balances for several coins, in the order given
pub fn load_balances(
    storage: &dyn Storage,
    account: &Addr,
    coin_names: &[String],
) -> StdResult<Vec<Balance>> {
    coin_names
        .iter()
        .map(|name| load_balance(storage, account, name))
        .collect()
}

fn save_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    balance: &Balance,
) -> StdResult<()> {
    BALANCES.save(storage, (account, coin_name), balance)
}

/// Increase usable balance (inbound transfer or native deposit)
pub fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    amount: Uint128,
) -> Result<Balance, ContractError> {
    let mut balance = load_balance(storage, account, coin_name)?;
    balance.usable = balance.usable.checked_add(amount)?;
    save_balance(storage, account, coin_name, &balance)?;
    Ok(balance)
}

/// Decrease usable balance (native coin withdrawal)
pub fn debit(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    amount: Uint128,
) -> Result<Balance, ContractError> {
    let mut balance = load_balance(storage, account, coin_name)?;
    take_usable(&mut balance, amount)?;
    save_balance(storage, account, coin_name, &balance)?;
    Ok(balance)
}

/// Reserve usable balance for an outbound transfer
pub fn lock(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    amount: Uint128,
) -> Result<Balance, ContractError> {
    let mut balance = load_balance(storage, account, coin_name)?;
    take_usable(&mut balance, amount)?;
    balance.locked = balance.locked.checked_add(amount)?;
    save_balance(storage, account, coin_name, &balance)?;
    Ok(balance)
}

/// Release locked balance after the remote chain accepted the transfer
pub fn settle_success(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    amount: Uint128,
) -> Result<Balance, ContractError> {
    let mut balance = load_balance(storage, account, coin_name)?;
    take_locked(&mut balance, amount)?;
    save_balance(storage, account, coin_name, &balance)?;
    Ok(balance)
}

/// Move locked balance to refundable after the remote chain rejected the transfer
pub fn settle_failure(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    amount: Uint128,
) -> Result<Balance, ContractError> {
    let mut balance = load_balance(storage, account, coin_name)?;
    take_locked(&mut balance, amount)?;
    balance.refundable = balance.refundable.checked_add(amount)?;
    save_balance(storage, account, coin_name, &balance)?;
    Ok(balance)
}

/// Move refundable balance back to usable (client-invoked)
pub fn reclaim(
    storage: &mut dyn Storage,
    account: &Addr,
    coin_name: &str,
    amount: Uint128,
) -> Result<Balance, ContractError> {
    let mut balance = load_balance(storage, account, coin_name)?;
    if balance.refundable < amount {
        return Err(ContractError::Imbalance {
            available: balance.refundable,
            requested: amount,
        });
    }

    balance.refundable -= amount;
    balance.usable = balance.usable.checked_add(amount)?;
    save_balance(storage, account, coin_name, &balance)?;
    Ok(balance)
}

fn take_usable(balance: &mut Balance, amount: Uint128) -> Result<(), ContractError> {
    if balance.usable < amount {
        return Err(ContractError::InsufficientBalance {
            usable: balance.usable,
            requested: amount,
        });
    }
    balance.usable -= amount;
    Ok(())
}

fn take_locked(balance: &mut Balance, amount: Uint128) -> Result<(), ContractError> {
    if balance.locked < amount {
        return Err(ContractError::Imbalance {
            available: balance.locked,
            requested: amount,
        });
    }
    balance.locked -= amount;
    Ok(())
}
