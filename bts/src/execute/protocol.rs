//! Transport callbacks.
//!
//! Every message the BMC delivers enters through [`execute_transport`], which
//! checks the transport role once and dispatches:
//!
//! - `HandleBtpMessage` carrying a `TransferRequest` credits the receiver (the
//!   local bech32 account of its 20 address bytes) and answers with an `Ok`
//!   response under the same serial number.
//! - `HandleBtpMessage` carrying a `Response` resolves the pending request
//!   recorded under `(src, sn)`.
//! - `HandleBtpError` resolves the pending request as a failure.
//! - `HandleFeeGathering` ships all accumulated fees to a BTP address.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use super::transfer::{emit_request, transfer_response};
use crate::address_codec::{
    address_to_string, btp_account_address, local_account, parse_btp_address,
};
use crate::auth::{ensure, Role};
use crate::coin_registry::require_coin;
use crate::error::ContractError;
use crate::fee_manager::{accrue_fee, take_accumulated_fees};
use crate::ledger;
use crate::msg::TransportMsg;
use crate::state::{PendingAsset, CONFIG, PENDING_REQUESTS};
use crate::transport::{decode_message, send_message};
use common::{Asset, BtpAddress, ResponseCode, ServiceMessage, SERVICE_NAME};

/// Entry point for all transport callbacks. Authorization: BMC only.
pub fn execute_transport(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TransportMsg,
) -> Result<Response, ContractError> {
    ensure(deps.as_ref(), &env, &info.sender, Role::Transport)?;

    match msg {
        TransportMsg::HandleBtpMessage { src, svc, sn, msg } => {
            check_service(&svc)?;
            match decode_message(&msg)? {
                ServiceMessage::TransferRequest { from, to, assets } => {
                    handle_inbound_transfer(deps, &src, sn, from, to, assets)
                }
                ServiceMessage::Response { code, message } => {
                    handle_response(deps, env, &src, sn, code, message)
                }
            }
        }
        TransportMsg::HandleBtpError {
            src,
            svc,
            sn,
            code,
            msg,
        } => {
            check_service(&svc)?;
            let message = format!("transport error {}: {}", code, msg);
            handle_response(deps, env, &src, sn, ResponseCode::Err, message)
        }
        TransportMsg::HandleFeeGathering { fee_address, svc } => {
            check_service(&svc)?;
            handle_fee_gathering(deps, env, fee_address)
        }
    }
}

fn check_service(svc: &str) -> Result<(), ContractError> {
    if svc != SERVICE_NAME {
        return Err(ContractError::InvalidService {
            svc: svc.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Inbound Transfer
// ============================================================================

fn handle_inbound_transfer(
    deps: DepsMut,
    src: &str,
    sn: u64,
    from: String,
    to: String,
    assets: Vec<Asset>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let raw = btp_account_address(&BtpAddress::new(src, to))?;
    let receiver = deps
        .api
        .addr_validate(&local_account(&raw, &config.address_prefix)?)?;

    // Every coin must be known before anything is credited
    for asset in &assets {
        require_coin(deps.storage, &asset.coin_name)?;
    }
    for asset in &assets {
        ledger::credit(deps.storage, &receiver, &asset.coin_name, asset.value)?;
    }

    let reply = send_message(
        &config,
        src,
        sn,
        &ServiceMessage::Response {
            code: ResponseCode::Ok,
            message: String::new(),
        },
    )?;

    let mut response = Response::new()
        .add_message(reply)
        .add_attribute("method", "handle_transfer_request")
        .add_attribute("src", src)
        .add_attribute("sn", sn.to_string())
        .add_attribute("from", from)
        .add_attribute("to", receiver.to_string())
        .add_attribute("to_hex", address_to_string(&raw));
    for asset in &assets {
        response = response.add_attribute("asset", format!("{}:{}", asset.coin_name, asset.value));
    }
    Ok(response)
}

// ============================================================================
// Response Handling
// ============================================================================

fn handle_response(
    deps: DepsMut,
    env: Env,
    src: &str,
    sn: u64,
    code: ResponseCode,
    message: String,
) -> Result<Response, ContractError> {
    let request = PENDING_REQUESTS
        .may_load(deps.storage, (src, sn))?
        .ok_or_else(|| ContractError::UnknownRequest {
            network: src.to_string(),
            sn,
        })?;

    let fee_gathering = Role::Contract.holds(deps.as_ref(), &env, &request.requester)?;

    match (code, fee_gathering) {
        (ResponseCode::Ok, false) => {
            for asset in &request.assets {
                ledger::settle_success(
                    deps.storage,
                    &request.requester,
                    &asset.coin_name,
                    asset.gross(),
                )?;
                accrue_fee(deps.storage, &asset.coin_name, asset.fee)?;
            }
        }
        (ResponseCode::Err, false) => {
            for asset in &request.assets {
                ledger::settle_failure(
                    deps.storage,
                    &request.requester,
                    &asset.coin_name,
                    asset.gross(),
                )?;
            }
        }
        (ResponseCode::Ok, true) => {}
        (ResponseCode::Err, true) => {
            for asset in &request.assets {
                accrue_fee(deps.storage, &asset.coin_name, asset.amount)?;
            }
        }
    }

    PENDING_REQUESTS.remove(deps.storage, (src, sn));

    Ok(Response::new()
        .add_attribute("method", "handle_response")
        .add_attribute("src", src)
        .add_attribute("sn", sn.to_string())
        .add_attribute("code", code.code().to_string())
        .add_attribute("message", message)
        .add_attribute("requester", request.requester))
}

// ============================================================================
// Fee Gathering
// ============================================================================

fn handle_fee_gathering(
    deps: DepsMut,
    env: Env,
    fee_address: String,
) -> Result<Response, ContractError> {
    let to = parse_btp_address(&fee_address)?;
    let fees = take_accumulated_fees(deps.storage)?;

    if fees.is_empty() {
        return Ok(Response::new()
            .add_attribute("method", "handle_fee_gathering")
            .add_attribute("fee_address", fee_address)
            .add_attribute("assets", "0"));
    }

    let config = CONFIG.load(deps.storage)?;
    let assets: Vec<PendingAsset> = fees
        .into_iter()
        .map(|fee| PendingAsset {
            coin_name: fee.coin_name,
            amount: fee.value,
            fee: Uint128::zero(),
        })
        .collect();
    let requester = env.contract.address;
    let (sn, msg) = emit_request(deps.storage, &config, &requester, &to, assets.clone())?;

    Ok(
        transfer_response("handle_fee_gathering", sn, &requester, &to, &assets)
            .add_attribute("assets", assets.len().to_string())
            .add_message(msg),
    )
}
