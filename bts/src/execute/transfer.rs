//! Outbound transfer handlers (Transfer, TransferNativeCoin, TransferBatch),
//! Reclaim and native coin withdrawal.
//!
//! An outbound transfer locks `value` (net amount + fee) in the requester's
//! balance, records a pending request under a fresh serial number for the
//! destination network and relays the net amounts through the BMC.

use std::collections::HashSet;

use cosmwasm_std::{
    coins, Addr, BankMsg, CosmosMsg, DepsMut, MessageInfo, Response, Storage, Uint128,
};

use crate::address_codec::parse_btp_address;
use crate::coin_registry::require_coin;
use crate::error::ContractError;
use crate::fee_manager::{charge_for, FEE_CONFIG};
use crate::ledger;
use crate::state::{Config, PendingAsset, PendingRequest, CONFIG, PENDING_REQUESTS};
use crate::transport::{next_serial_number, send_message};
use common::{Asset, BtpAddress, ServiceMessage};

// ============================================================================
// Transfer
// ============================================================================

/// Transfer a registered coin from the caller's usable balance.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    coin_name: String,
    value: Uint128,
    to: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let to = parse_btp_address(&to)?;

    let assets = plan_transfer(deps.storage, &[(coin_name, value)])?;
    lock_assets(deps.storage, &info.sender, &assets)?;
    let (sn, msg) = emit_request(deps.storage, &config, &info.sender, &to, assets.clone())?;

    Ok(transfer_response("transfer", sn, &info.sender, &to, &assets).add_message(msg))
}

/// Deposit attached native funds and transfer them.
pub fn execute_transfer_native_coin(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let to = parse_btp_address(&to)?;
    let value = native_deposit(&config, &info)?;

    let assets = plan_transfer(deps.storage, &[(config.native_coin.clone(), value)])?;
    ledger::credit(deps.storage, &info.sender, &config.native_coin, value)?;
    lock_assets(deps.storage, &info.sender, &assets)?;
    let (sn, msg) = emit_request(deps.storage, &config, &info.sender, &to, assets.clone())?;

    Ok(
        transfer_response("transfer_native_coin", sn, &info.sender, &to, &assets)
            .add_message(msg),
    )
}

/// Transfer several coins under a single serial number.
pub fn execute_transfer_batch(
    deps: DepsMut,
    info: MessageInfo,
    coin_names: Vec<String>,
    values: Vec<Uint128>,
    to: String,
) -> Result<Response, ContractError> {
    if coin_names.len() != values.len() {
        return Err(ContractError::InvalidAmount {
            reason: format!(
                "{} coin names but {} values",
                coin_names.len(),
                values.len()
            ),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let to = parse_btp_address(&to)?;

    let items: Vec<(String, Uint128)> = coin_names.into_iter().zip(values).collect();
    let assets = plan_transfer(deps.storage, &items)?;
    lock_assets(deps.storage, &info.sender, &assets)?;
    let (sn, msg) = emit_request(deps.storage, &config, &info.sender, &to, assets.clone())?;

    Ok(transfer_response("transfer_batch", sn, &info.sender, &to, &assets).add_message(msg))
}

// ============================================================================
// Reclaim
// ============================================================================

/// Move the caller's refundable balance back to usable.
pub fn execute_reclaim(
    deps: DepsMut,
    info: MessageInfo,
    coin_name: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    require_coin(deps.storage, &coin_name)?;
    if value.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let balance = ledger::reclaim(deps.storage, &info.sender, &coin_name, value)?;

    Ok(Response::new()
        .add_attribute("method", "reclaim")
        .add_attribute("account", info.sender)
        .add_attribute("coin_name", coin_name)
        .add_attribute("value", value.to_string())
        .add_attribute("refundable", balance.refundable.to_string()))
}

// ============================================================================
// Native Withdrawal
// ============================================================================

/// Pay usable native balance out of the contract as bank coins.
///
/// Native funds enter the ledger through `TransferNativeCoin` and, after a
/// failed transfer and `Reclaim`, leave through here.
pub fn execute_withdraw_native_coin(
    deps: DepsMut,
    info: MessageInfo,
    value: Uint128,
) -> Result<Response, ContractError> {
    if value.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let balance = ledger::debit(deps.storage, &info.sender, &config.native_coin, value)?;

    let payout = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(value.u128(), config.native_denom.clone()),
    };

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("method", "withdraw_native_coin")
        .add_attribute("account", info.sender)
        .add_attribute("coin_name", config.native_coin)
        .add_attribute("denom", config.native_denom)
        .add_attribute("value", value.to_string())
        .add_attribute("usable", balance.usable.to_string()))
}

// ============================================================================
// Helpers
// ============================================================================

/// Validate a transfer and split each value into net amount and fee.
/// Writes nothing.
fn plan_transfer(
    storage: &dyn Storage,
    items: &[(String, Uint128)],
) -> Result<Vec<PendingAsset>, ContractError> {
    if items.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "No assets to transfer".to_string(),
        });
    }

    let fee_config = FEE_CONFIG.load(storage)?;
    let mut seen = HashSet::new();
    let mut assets = Vec::with_capacity(items.len());

    for (coin_name, value) in items {
        if !seen.insert(coin_name.as_str()) {
            return Err(ContractError::InvalidAmount {
                reason: format!("Duplicate coin in batch: {}", coin_name),
            });
        }
        require_coin(storage, coin_name)?;
        let fee = charge_for(&fee_config, *value)?;
        assets.push(PendingAsset {
            coin_name: coin_name.clone(),
            amount: *value - fee,
            fee,
        });
    }

    Ok(assets)
}

/// Lock the gross amount of every asset, checking all balances first.
fn lock_assets(
    storage: &mut dyn Storage,
    requester: &Addr,
    assets: &[PendingAsset],
) -> Result<(), ContractError> {
    for asset in assets {
        let balance = ledger::load_balance(storage, requester, &asset.coin_name)?;
        if balance.usable < asset.gross() {
            return Err(ContractError::InsufficientBalance {
                usable: balance.usable,
                requested: asset.gross(),
            });
        }
    }

    for asset in assets {
        ledger::lock(storage, requester, &asset.coin_name, asset.gross())?;
    }
    Ok(())
}

/// Record a pending request under the next serial number for the
/// destination network and build the BMC message carrying it.
pub(super) fn emit_request(
    storage: &mut dyn Storage,
    config: &Config,
    requester: &Addr,
    to: &BtpAddress,
    assets: Vec<PendingAsset>,
) -> Result<(u64, CosmosMsg), ContractError> {
    let sn = next_serial_number(storage, &to.network)?;

    let message = ServiceMessage::TransferRequest {
        from: requester.to_string(),
        to: to.account.clone(),
        assets: assets
            .iter()
            .map(|asset| Asset::new(asset.coin_name.clone(), asset.amount))
            .collect(),
    };

    let request = PendingRequest {
        serial_number: sn,
        network: to.network.clone(),
        requester: requester.clone(),
        to: to.to_string(),
        assets,
    };
    PENDING_REQUESTS.save(storage, (to.network.as_str(), sn), &request)?;

    let msg = send_message(config, &to.network, sn, &message)?;
    Ok((sn, msg))
}

/// Exactly one coin of the native denom, non-zero
fn native_deposit(config: &Config, info: &MessageInfo) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [coin] if coin.denom == config.native_denom && !coin.amount.is_zero() => Ok(coin.amount),
        [] => Err(ContractError::InvalidFunds {
            reason: format!("No {} sent", config.native_denom),
        }),
        _ => Err(ContractError::InvalidFunds {
            reason: format!("Only {} may be sent", config.native_denom),
        }),
    }
}

pub(super) fn transfer_response(
    method: &str,
    sn: u64,
    requester: &Addr,
    to: &BtpAddress,
    assets: &[PendingAsset],
) -> Response {
    let mut response = Response::new()
        .add_attribute("method", method)
        .add_attribute("sn", sn.to_string())
        .add_attribute("from", requester.to_string())
        .add_attribute("to", to.to_string());

    for asset in assets {
        response = response.add_attribute(
            "asset",
            format!("{}:{}:{}", asset.coin_name, asset.amount, asset.fee),
        );
    }
    response
}
