//! Configuration management handlers.
//!
//! This module handles:
//! - Wrapped coin registration
//! - Fee ratio and fixed fee
//! - BMC transport address

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::auth::{ensure, Role};
use crate::coin_registry::register_coin;
use crate::error::ContractError;
use crate::fee_manager::{validate_fee_numerator, validate_fixed_fee, FEE_CONFIG};
use crate::state::CONFIG;

// ============================================================================
// Coin Registration
// ============================================================================

/// Register a wrapped coin.
pub fn execute_register(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    symbol: String,
    decimals: u8,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Owner)?;

    let coin = register_coin(deps.storage, &name, &symbol, decimals, false)?;

    Ok(Response::new()
        .add_attribute("method", "register")
        .add_attribute("name", coin.name)
        .add_attribute("symbol", coin.symbol)
        .add_attribute("decimals", coin.decimals.to_string())
        .add_attribute("coin_id", coin.id))
}

// ============================================================================
// Fee Configuration
// ============================================================================

/// Set the proportional fee numerator.
pub fn execute_set_fee_ratio(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    fee_numerator: u64,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Owner)?;
    validate_fee_numerator(fee_numerator)?;

    let mut fee_config = FEE_CONFIG.load(deps.storage)?;
    fee_config.fee_numerator = fee_numerator;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_ratio")
        .add_attribute("fee_numerator", fee_numerator.to_string())
        .add_attribute("fee_denominator", fee_config.fee_denominator.to_string()))
}

/// Set the fixed per-transfer fee.
pub fn execute_set_fixed_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    fixed_fee: Uint128,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Owner)?;
    validate_fixed_fee(fixed_fee)?;

    let mut fee_config = FEE_CONFIG.load(deps.storage)?;
    fee_config.fixed_fee = fixed_fee;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fixed_fee")
        .add_attribute("fixed_fee", fixed_fee.to_string()))
}

// ============================================================================
// Transport
// ============================================================================

/// Point the contract at a new BMC. Callbacks from the previous BMC are
/// rejected from then on.
pub fn execute_set_bmc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    bmc: String,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Owner)?;
    let bmc = deps.api.addr_validate(&bmc)?;

    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.bmc, bmc);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_bmc")
        .add_attribute("previous", previous)
        .add_attribute("bmc", config.bmc))
}
