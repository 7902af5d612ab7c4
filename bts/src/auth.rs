//! Caller authorization.
//!
//! Every mutating handler names the role it requires and checks it with
//! [`ensure`] before touching any other state.

use cosmwasm_std::{Addr, Deps, Env, StdResult};

use crate::error::ContractError;
use crate::state::{CONFIG, OWNERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Member of the owner set
    Owner,
    /// The registered BMC transport contract
    Transport,
    /// This contract itself
    Contract,
}

impl Role {
    /// Whether `addr` holds this role
    pub fn holds(&self, deps: Deps, env: &Env, addr: &Addr) -> StdResult<bool> {
        match self {
            Role::Owner => Ok(OWNERS.load(deps.storage)?.contains(addr)),
            Role::Transport => Ok(CONFIG.load(deps.storage)?.bmc == *addr),
            Role::Contract => Ok(env.contract.address == *addr),
        }
    }
}

/// Fail with `Unauthorized` unless `sender` holds `role`.
pub fn ensure(deps: Deps, env: &Env, sender: &Addr, role: Role) -> Result<(), ContractError> {
    if role.holds(deps, env, sender)? {
        Ok(())
    } else {
        Err(ContractError::Unauthorized)
    }
}
