//! Minimal BMC transport for multi-test.
//!
//! Records every `SendMessage` it receives so tests can inspect what the BTS
//! contract relayed. Can be switched into a failing mode to exercise
//! rollback of the calling transaction.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Item;

use common::ServiceMessage;

const SENT: Item<Vec<SentMessage>> = Item::new("sent");
const FAILING: Item<bool> = Item::new("failing");

#[cw_serde]
pub struct SentMessage {
    pub to: String,
    pub svc: String,
    pub sn: u64,
    pub msg: ServiceMessage,
}

#[cw_serde]
pub struct MockBmcInstantiateMsg {}

/// Superset of `common::BmcExecuteMsg`
#[cw_serde]
pub enum MockBmcExecuteMsg {
    SendMessage {
        to: String,
        svc: String,
        sn: u64,
        msg: Binary,
    },
    SetFailing {
        failing: bool,
    },
}

#[cw_serde]
pub enum MockBmcQueryMsg {
    Sent {},
}

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: MockBmcInstantiateMsg,
) -> StdResult<Response> {
    SENT.save(deps.storage, &vec![])?;
    FAILING.save(deps.storage, &false)?;
    Ok(Response::new())
}

fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockBmcExecuteMsg,
) -> StdResult<Response> {
    match msg {
        MockBmcExecuteMsg::SendMessage { to, svc, sn, msg } => {
            if FAILING.load(deps.storage)? {
                return Err(StdError::generic_err("bmc unavailable"));
            }
            let mut sent = SENT.load(deps.storage)?;
            sent.push(SentMessage {
                to,
                svc,
                sn,
                msg: from_json(&msg)?,
            });
            SENT.save(deps.storage, &sent)?;
            Ok(Response::new())
        }
        MockBmcExecuteMsg::SetFailing { failing } => {
            FAILING.save(deps.storage, &failing)?;
            Ok(Response::new())
        }
    }
}

fn query(deps: Deps, _env: Env, msg: MockBmcQueryMsg) -> StdResult<Binary> {
    match msg {
        MockBmcQueryMsg::Sent {} => to_json_binary(&SENT.load(deps.storage)?),
    }
}

pub fn contract_mock_bmc() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
