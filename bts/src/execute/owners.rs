//! Owner set management.
//!
//! Any owner may add or remove owners. The set can never become empty.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::auth::{ensure, Role};
use crate::error::ContractError;
use crate::state::OWNERS;

/// Add a new owner.
pub fn execute_add_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Owner)?;

    let owner_addr = deps.api.addr_validate(&owner)?;
    let mut owners = OWNERS.load(deps.storage)?;
    if owners.contains(&owner_addr) {
        return Err(ContractError::OwnerAlreadyExists { owner });
    }

    owners.push(owner_addr);
    OWNERS.save(deps.storage, &owners)?;

    Ok(Response::new()
        .add_attribute("method", "add_owner")
        .add_attribute("owner", owner)
        .add_attribute("owner_count", owners.len().to_string()))
}

/// Remove an owner.
pub fn execute_remove_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Owner)?;

    let owner_addr = deps.api.addr_validate(&owner)?;
    let mut owners = OWNERS.load(deps.storage)?;
    if !owners.contains(&owner_addr) {
        return Err(ContractError::NotOwner { owner });
    }
    if owners.len() <= 1 {
        return Err(ContractError::CannotRemoveLastOwner);
    }

    owners.retain(|o| *o != owner_addr);
    OWNERS.save(deps.storage, &owners)?;

    Ok(Response::new()
        .add_attribute("method", "remove_owner")
        .add_attribute("owner", owner)
        .add_attribute("owner_count", owners.len().to_string()))
}
