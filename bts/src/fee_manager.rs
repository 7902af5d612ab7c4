//! Fee Manager Module
//!
//! Fee calculation and per-coin fee aggregation.
//!
//! ## Fee Structure
//!
//! ```text
//! fee = fixed_fee + floor(amount * fee_numerator / FEE_DENOMINATOR)
//! ```
//!
//! The same rule applies to every coin and every destination. A transfer is
//! only accepted when its amount is strictly greater than its fee.
//!
//! ## Aggregation
//!
//! Fees of successful transfers accrue per coin in [`ACCUMULATED_FEES`] until
//! the transport asks for them with a fee-gathering message, which drains all
//! counters into a single outbound transfer.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use crate::state::COIN_NAMES;
use common::Asset;

// ============================================================================
// Constants
// ============================================================================

/// Fee ratio denominator (10000 = 100%)
pub const FEE_DENOMINATOR: u64 = 10_000;

// ============================================================================
// Data Structures
// ============================================================================

/// Fee configuration parameters
#[cw_serde]
pub struct FeeConfig {
    /// Proportional fee numerator, at most `fee_denominator`
    pub fee_numerator: u64,
    pub fee_denominator: u64,
    /// Flat fee added to every transfer, never zero
    pub fixed_fee: Uint128,
}

impl FeeConfig {
    pub fn new(fee_numerator: u64, fixed_fee: Uint128) -> Result<Self, ContractError> {
        validate_fee_numerator(fee_numerator)?;
        validate_fixed_fee(fixed_fee)?;
        Ok(Self {
            fee_numerator,
            fee_denominator: FEE_DENOMINATOR,
            fixed_fee,
        })
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Fee configuration storage
pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

/// Collected fees awaiting gathering (coin name -> amount)
pub const ACCUMULATED_FEES: Map<&str, Uint128> = Map::new("accumulated_fees");

// ============================================================================
// Fee Calculation Functions
// ============================================================================

/// Calculate the fee charged on a transfer of `amount`
pub fn calculate_fee(config: &FeeConfig, amount: Uint128) -> StdResult<Uint128> {
    let proportional = amount.multiply_ratio(config.fee_numerator, config.fee_denominator);
    Ok(config.fixed_fee.checked_add(proportional)?)
}

/// Fee for `amount`, failing with `InvalidAmount` unless `amount > fee`
pub fn charge_for(config: &FeeConfig, amount: Uint128) -> Result<Uint128, ContractError> {
    let fee = calculate_fee(config, amount)?;
    if amount <= fee {
        return Err(ContractError::InvalidAmount {
            reason: format!("amount {} does not exceed fee {}", amount, fee),
        });
    }
    Ok(fee)
}

// ============================================================================
// Validation
// ============================================================================

pub fn validate_fee_numerator(fee_numerator: u64) -> Result<(), ContractError> {
    if fee_numerator > FEE_DENOMINATOR {
        return Err(ContractError::InvalidSetting {
            reason: format!(
                "fee numerator {} exceeds denominator {}",
                fee_numerator, FEE_DENOMINATOR
            ),
        });
    }
    Ok(())
}

pub fn validate_fixed_fee(fixed_fee: Uint128) -> Result<(), ContractError> {
    if fixed_fee.is_zero() {
        return Err(ContractError::InvalidSetting {
            reason: "fixed fee must be greater than zero".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Aggregation
// ============================================================================

/// Add a collected fee to the coin's counter
pub fn accrue_fee(storage: &mut dyn Storage, coin_name: &str, amount: Uint128) -> StdResult<()> {
    if amount.is_zero() {
        return Ok(());
    }
    ACCUMULATED_FEES.update(storage, coin_name, |current| -> StdResult<_> {
        Ok(current.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

/// Accumulated fees for every registered coin, in registration order
pub fn load_accumulated_fees(storage: &dyn Storage) -> StdResult<Vec<Asset>> {
    COIN_NAMES
        .load(storage)?
        .into_iter()
        .map(|name| {
            let value = ACCUMULATED_FEES
                .may_load(storage, &name)?
                .unwrap_or_default();
            Ok(Asset::new(name, value))
        })
        .collect()
}

/// Drain all counters, returning the non-zero amounts that were collected
pub fn take_accumulated_fees(storage: &mut dyn Storage) -> StdResult<Vec<Asset>> {
    let fees: Vec<Asset> = load_accumulated_fees(storage)?
        .into_iter()
        .filter(|asset| !asset.value.is_zero())
        .collect();

    for asset in &fees {
        ACCUMULATED_FEES.remove(storage, &asset.coin_name);
    }
    Ok(fees)
}
