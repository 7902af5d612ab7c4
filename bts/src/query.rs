//! Query handlers for the BTS contract.
//!
//! Queries never fail on unknown names: unregistered coins report the zero
//! id and accounts without history report all-zero balances.

use cosmwasm_std::{Addr, Deps, StdResult, Uint128};

use crate::coin_registry::{coin_id, coin_names, resolve_coin};
use crate::fee_manager::{calculate_fee, load_accumulated_fees, FEE_CONFIG};
use crate::ledger::{load_balance, load_balances};
use crate::msg::{
    AccumulatedFeesResponse, BalanceBatchResponse, BalanceResponse, CalculateFeeResponse,
    CoinIdResponse, CoinNamesResponse, CoinResponse, ConfigResponse, FeeConfigResponse,
    IsOwnerResponse, OwnersResponse, PendingRequestResponse, SerialNumberResponse,
};
use crate::state::{Balance, CONFIG, OWNERS, PENDING_REQUESTS};
use crate::transport::current_serial_number;

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        bmc: config.bmc,
        network: config.network,
        native_denom: config.native_denom,
        native_coin_name: config.native_coin,
        address_prefix: config.address_prefix,
    })
}

pub fn query_owners(deps: Deps) -> StdResult<OwnersResponse> {
    Ok(OwnersResponse {
        owners: OWNERS.load(deps.storage)?,
    })
}

pub fn query_is_owner(deps: Deps, address: String) -> StdResult<IsOwnerResponse> {
    let owners = OWNERS.load(deps.storage)?;
    Ok(IsOwnerResponse {
        is_owner: owners.iter().any(|owner| owner.as_str() == address),
    })
}

// ============================================================================
// Coin Queries
// ============================================================================

pub fn query_coin_names(deps: Deps) -> StdResult<CoinNamesResponse> {
    Ok(CoinNamesResponse {
        names: coin_names(deps.storage)?,
    })
}

pub fn query_coin_id(deps: Deps, name: String) -> StdResult<CoinIdResponse> {
    Ok(CoinIdResponse {
        id: coin_id(deps.storage, &name)?,
    })
}

pub fn query_coin(deps: Deps, name: String) -> StdResult<CoinResponse> {
    Ok(CoinResponse {
        coin: resolve_coin(deps.storage, &name)?,
    })
}

// ============================================================================
// Balance Queries
// ============================================================================

/// Query one balance. Accounts are matched verbatim against the stored
/// address.
pub fn query_balance(
    deps: Deps,
    account: String,
    coin_name: String,
) -> StdResult<BalanceResponse> {
    let balance = load_balance(deps.storage, &Addr::unchecked(account), &coin_name)?;
    Ok(balance.into())
}

pub fn query_balance_batch(
    deps: Deps,
    account: String,
    coin_names: Vec<String>,
) -> StdResult<BalanceBatchResponse> {
    let balances = load_balances(deps.storage, &Addr::unchecked(account), &coin_names)?;
    Ok(BalanceBatchResponse {
        balances: balances.into_iter().map(Into::into).collect(),
    })
}

impl From<Balance> for BalanceResponse {
    fn from(balance: Balance) -> Self {
        BalanceResponse {
            usable: balance.usable,
            locked: balance.locked,
            refundable: balance.refundable,
        }
    }
}

// ============================================================================
// Fee Queries
// ============================================================================

pub fn query_accumulated_fees(deps: Deps) -> StdResult<AccumulatedFeesResponse> {
    Ok(AccumulatedFeesResponse {
        fees: load_accumulated_fees(deps.storage)?,
    })
}

pub fn query_fee_config(deps: Deps) -> StdResult<FeeConfigResponse> {
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(FeeConfigResponse {
        fee_numerator: fee_config.fee_numerator,
        fee_denominator: fee_config.fee_denominator,
        fixed_fee: fee_config.fixed_fee,
    })
}

/// Fee a transfer of `amount` would be charged
pub fn query_calculate_fee(deps: Deps, amount: Uint128) -> StdResult<CalculateFeeResponse> {
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(CalculateFeeResponse {
        fee: calculate_fee(&fee_config, amount)?,
    })
}

// ============================================================================
// Protocol Queries
// ============================================================================

pub fn query_pending_request(
    deps: Deps,
    network: String,
    sn: u64,
) -> StdResult<PendingRequestResponse> {
    Ok(PendingRequestResponse {
        request: PENDING_REQUESTS.may_load(deps.storage, (network.as_str(), sn))?,
    })
}

pub fn query_serial_number(deps: Deps, network: String) -> StdResult<SerialNumberResponse> {
    Ok(SerialNumberResponse {
        sn: current_serial_number(deps.storage, &network)?,
    })
}
