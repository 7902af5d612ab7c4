//! BTP address parsing.
//!
//! A BTP address names an account on another chain:
//! ```text
//! btp://<network-id>/<address>
//! ```
//! The network id is opaque routing data for the transport. The account part
//! is interpreted by whichever chain owns it.

use std::fmt;

use cosmwasm_std::{StdError, StdResult};

const BTP_SCHEME: &str = "btp://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtpAddress {
    pub network: String,
    pub account: String,
}

impl BtpAddress {
    pub fn new(network: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            account: account.into(),
        }
    }

    /// Parse `btp://<network>/<account>`. Both parts must be non-empty and
    /// the account may not contain another `/`.
    pub fn parse(s: &str) -> StdResult<Self> {
        let rest = s
            .strip_prefix(BTP_SCHEME)
            .ok_or_else(|| StdError::generic_err(format!("Missing btp:// scheme: {}", s)))?;

        let (network, account) = rest
            .split_once('/')
            .ok_or_else(|| StdError::generic_err(format!("Missing account part: {}", s)))?;

        if network.is_empty() || account.is_empty() || account.contains('/') {
            return Err(StdError::generic_err(format!("Malformed BTP address: {}", s)));
        }

        Ok(Self::new(network, account))
    }
}

impl fmt::Display for BtpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", BTP_SCHEME, self.network, self.account)
    }
}
