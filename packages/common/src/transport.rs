//! Messages exchanged with the BMC transport contract.
//!
//! Outbound: the BTS contract executes [`BmcExecuteMsg::SendMessage`] on the
//! BMC contract. The `msg` field carries a JSON-encoded [`ServiceMessage`].
//!
//! Inbound: the BMC contract calls back into the BTS contract with the same
//! [`ServiceMessage`] encoding (see `bts::msg::TransportMsg::HandleBtpMessage`).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::asset::Asset;

/// Service name the BTS contract registers with the transport
pub const SERVICE_NAME: &str = "bts";

/// Execute interface of the BMC transport consumed by the BTS contract
#[cw_serde]
pub enum BmcExecuteMsg {
    /// Relay `msg` to service `svc` on network `to`
    SendMessage {
        /// Destination network id
        to: String,
        /// Destination service name
        svc: String,
        /// Serial number correlating the message with its response
        sn: u64,
        /// JSON-encoded ServiceMessage
        msg: Binary,
    },
}

/// Result code of a service response
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ResponseCode {
    Ok,
    Err,
}

impl ResponseCode {
    pub const RC_OK: u32 = 0;
    pub const RC_ERR: u32 = 1;

    pub fn code(&self) -> u32 {
        match self {
            ResponseCode::Ok => Self::RC_OK,
            ResponseCode::Err => Self::RC_ERR,
        }
    }
}

/// Payload of a BTS service message
#[cw_serde]
pub enum ServiceMessage {
    /// Move `assets` from `from` on the sending chain to `to` on the receiving chain
    TransferRequest {
        /// Sender account on the source chain
        from: String,
        /// Receiver account on the destination chain (address string only)
        to: String,
        /// Net amounts to credit
        assets: Vec<Asset>,
    },
    /// Outcome of a previously sent request with the same serial number
    Response { code: ResponseCode, message: String },
}
