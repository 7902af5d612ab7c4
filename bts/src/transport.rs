//! Outbound side of the BMC transport.
//!
//! Serial numbers are allocated per destination network, starting at 1.
//! Every outbound service message is a `SendMessage` executed on the BMC
//! contract; if that call fails the whole transaction is rolled back.

use cosmwasm_std::{from_json, to_json_binary, Binary, CosmosMsg, StdResult, Storage, WasmMsg};

use crate::state::{Config, SERIAL_NUMBERS};
use common::{BmcExecuteMsg, ServiceMessage, SERVICE_NAME};

/// Allocate the next serial number for `network`
pub fn next_serial_number(storage: &mut dyn Storage, network: &str) -> StdResult<u64> {
    let sn = SERIAL_NUMBERS.may_load(storage, network)?.unwrap_or(0) + 1;
    SERIAL_NUMBERS.save(storage, network, &sn)?;
    Ok(sn)
}

/// Last serial number issued for `network` (0 if none)
pub fn current_serial_number(storage: &dyn Storage, network: &str) -> StdResult<u64> {
    Ok(SERIAL_NUMBERS.may_load(storage, network)?.unwrap_or(0))
}

/// Build the BMC call relaying `message` to `network` as serial number `sn`
pub fn send_message(
    config: &Config,
    network: &str,
    sn: u64,
    message: &ServiceMessage,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.bmc.to_string(),
        msg: to_json_binary(&BmcExecuteMsg::SendMessage {
            to: network.to_string(),
            svc: SERVICE_NAME.to_string(),
            sn,
            msg: to_json_binary(message)?,
        })?,
        funds: vec![],
    }))
}

pub fn decode_message(msg: &Binary) -> StdResult<ServiceMessage> {
    from_json(msg)
}
