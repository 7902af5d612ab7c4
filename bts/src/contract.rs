//! BTS Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::address_codec::local_account;
use crate::coin_registry::register_coin;
use crate::error::ContractError;
use crate::execute::{
    execute_add_owner, execute_reclaim, execute_register, execute_remove_owner, execute_set_bmc,
    execute_set_fee_ratio, execute_set_fixed_fee, execute_transfer, execute_transfer_batch,
    execute_transfer_native_coin, execute_transport, execute_withdraw_native_coin,
};
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_accumulated_fees, query_balance, query_balance_batch, query_calculate_fee, query_coin,
    query_coin_id, query_coin_names, query_config, query_fee_config, query_is_owner,
    query_owners, query_pending_request, query_serial_number,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OWNERS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for (field, value) in [
        ("native_coin_name", &msg.native_coin_name),
        ("native_denom", &msg.native_denom),
        ("network", &msg.network),
    ] {
        if value.is_empty() {
            return Err(ContractError::InvalidSetting {
                reason: format!("{} must not be empty", field),
            });
        }
    }

    // Inbound receivers are rendered with this prefix
    if msg.address_prefix != msg.address_prefix.to_ascii_lowercase() {
        return Err(ContractError::InvalidSetting {
            reason: "address_prefix must be lowercase".to_string(),
        });
    }
    local_account(&[0u8; 20], &msg.address_prefix)?;

    let bmc = deps.api.addr_validate(&msg.bmc)?;
    let fee_config = FeeConfig::new(msg.fee_numerator, msg.fixed_fee)?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    // Native coin is always first in the registry
    let native = register_coin(
        deps.storage,
        &msg.native_coin_name,
        &msg.native_coin_name,
        msg.native_decimals,
        true,
    )?;

    let config = Config {
        bmc,
        network: msg.network,
        native_coin: native.name,
        native_denom: msg.native_denom,
        address_prefix: msg.address_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    // The instantiator is the first owner
    OWNERS.save(deps.storage, &vec![info.sender.clone()])?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("bmc", config.bmc)
        .add_attribute("network", config.network)
        .add_attribute("address_prefix", config.address_prefix)
        .add_attribute("native_coin", config.native_coin)
        .add_attribute("native_coin_id", native.id)
        .add_attribute("fee_numerator", fee_config.fee_numerator.to_string())
        .add_attribute("fixed_fee", fee_config.fixed_fee.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Outgoing transfers
        ExecuteMsg::Transfer {
            coin_name,
            value,
            to,
        } => execute_transfer(deps, info, coin_name, value, to),
        ExecuteMsg::TransferNativeCoin { to } => execute_transfer_native_coin(deps, info, to),
        ExecuteMsg::TransferBatch {
            coin_names,
            values,
            to,
        } => execute_transfer_batch(deps, info, coin_names, values, to),
        ExecuteMsg::Reclaim { coin_name, value } => execute_reclaim(deps, info, coin_name, value),
        ExecuteMsg::WithdrawNativeCoin { value } => execute_withdraw_native_coin(deps, info, value),

        // Transport callbacks
        ExecuteMsg::Transport(transport_msg) => execute_transport(deps, env, info, transport_msg),

        // Administration
        ExecuteMsg::Register {
            name,
            symbol,
            decimals,
        } => execute_register(deps, env, info, name, symbol, decimals),
        ExecuteMsg::AddOwner { owner } => execute_add_owner(deps, env, info, owner),
        ExecuteMsg::RemoveOwner { owner } => execute_remove_owner(deps, env, info, owner),
        ExecuteMsg::SetFeeRatio { fee_numerator } => {
            execute_set_fee_ratio(deps, env, info, fee_numerator)
        }
        ExecuteMsg::SetFixedFee { fixed_fee } => execute_set_fixed_fee(deps, env, info, fixed_fee),
        ExecuteMsg::SetBmc { bmc } => execute_set_bmc(deps, env, info, bmc),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owners {} => to_json_binary(&query_owners(deps)?),
        QueryMsg::IsOwner { address } => to_json_binary(&query_is_owner(deps, address)?),

        // Coins
        QueryMsg::CoinNames {} => to_json_binary(&query_coin_names(deps)?),
        QueryMsg::CoinId { name } => to_json_binary(&query_coin_id(deps, name)?),
        QueryMsg::Coin { name } => to_json_binary(&query_coin(deps, name)?),

        // Balances
        QueryMsg::Balance { account, coin_name } => {
            to_json_binary(&query_balance(deps, account, coin_name)?)
        }
        QueryMsg::BalanceBatch {
            account,
            coin_names,
        } => to_json_binary(&query_balance_batch(deps, account, coin_names)?),

        // Fees
        QueryMsg::AccumulatedFees {} => to_json_binary(&query_accumulated_fees(deps)?),
        QueryMsg::FeeConfig {} => to_json_binary(&query_fee_config(deps)?),
        QueryMsg::CalculateFee { amount } => to_json_binary(&query_calculate_fee(deps, amount)?),

        // Protocol
        QueryMsg::PendingRequest { network, sn } => {
            to_json_binary(&query_pending_request(deps, network, sn)?)
        }
        QueryMsg::SerialNumber { network } => {
            to_json_binary(&query_serial_number(deps, network)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
