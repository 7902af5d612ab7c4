//! Address Codec
//!
//! Converts between checksummed hex address strings and their 20-byte form.
//!
//! ## String Format
//!
//! ```text
//! 0x + 40 hex characters
//! ```
//!
//! Mixed-case strings must carry a valid EIP-55 checksum: the i-th letter is
//! upper case iff the i-th nibble of `keccak256(lowercase_hex)` is >= 8.
//! All-lowercase and all-uppercase strings carry no checksum and are accepted
//! as-is. Encoding always produces the checksummed form.
//!
//! ## Local Accounts
//!
//! The same 20 bytes name an account on this chain as a bech32 string with
//! the configured prefix (e.g., `terra1...`).

use bech32::{ToBase32, Variant};
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;
use common::BtpAddress;

/// Raw account address
pub type Address = [u8; 20];

const ADDRESS_HEX_LEN: usize = 40;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Parse a `0x`-prefixed address string into its 20 raw bytes.
pub fn string_to_address(s: &str) -> Result<Address, ContractError> {
    let invalid_format = || ContractError::InvalidAddressFormat {
        address: s.to_string(),
    };

    let hex_str = s.strip_prefix("0x").ok_or_else(invalid_format)?;
    if hex_str.len() != ADDRESS_HEX_LEN || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid_format());
    }

    let has_lower = hex_str.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex_str.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum_hex(&hex_str.to_ascii_lowercase()) != hex_str {
        return Err(ContractError::InvalidChecksum {
            address: s.to_string(),
        });
    }

    let bytes = hex::decode(hex_str).map_err(|_| invalid_format())?;
    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Render 20 raw bytes as a checksummed `0x`-prefixed string.
pub fn address_to_string(address: &Address) -> String {
    format!("0x{}", to_checksum_hex(&hex::encode(address)))
}

/// Render 20 raw bytes as a local bech32 account with the given prefix.
pub fn local_account(address: &Address, prefix: &str) -> Result<String, ContractError> {
    bech32::encode(prefix, address.to_base32(), Variant::Bech32).map_err(|e| {
        ContractError::InvalidSetting {
            reason: format!("Invalid bech32 prefix {}: {}", prefix, e),
        }
    })
}

/// Parse a `btp://<network>/<account>` string.
pub fn parse_btp_address(s: &str) -> Result<BtpAddress, ContractError> {
    BtpAddress::parse(s).map_err(|e| ContractError::InvalidBtpAddress {
        reason: e.to_string(),
    })
}

/// Decode the account part of a BTP address.
pub fn btp_account_address(btp: &BtpAddress) -> Result<Address, ContractError> {
    string_to_address(&btp.account)
}

/// Apply EIP-55 casing to 40 lowercase hex characters
fn to_checksum_hex(lower_hex: &str) -> String {
    let hash = keccak256(lower_hex.as_bytes());

    lower_hex
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
