// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Typed Clarity arguments and the scalar values decoded from read responses.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// A typed argument for a contract call.
///
/// The wire form for read bodies is the hex-encoded Clarity literal, the same
/// encoding the node accepts for `call-read` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClarityArg {
    Uint(u128),
    Bool(bool),
    Principal(String),
    StringUtf8(String),
    StringAscii(String),
}

impl ClarityArg {
    /// The Clarity source literal for this argument.
    pub fn literal(&self) -> String {
        match self {
            ClarityArg::Uint(value) => format!("u{}", value),
            ClarityArg::Bool(value) => value.to_string(),
            ClarityArg::Principal(principal) => format!("'{}", principal),
            ClarityArg::StringUtf8(text) => format!("u\"{}\"", text),
            ClarityArg::StringAscii(text) => format!("\"{}\"", text),
        }
    }

    /// `0x`-prefixed hex of the literal, as read bodies carry arguments.
    pub fn to_wire(&self) -> String {
        let literal = self.literal();
        let mut wire = String::with_capacity(2 + literal.len() * 2);
        wire.push_str("0x");
        for byte in literal.as_bytes() {
            wire.push_str(&format!("{:02x}", byte));
        }
        wire
    }
}

/// Parse a required positive amount typed by the user.
pub fn parse_positive_amount(input: &str) -> ClientResult<u128> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidInput(
            "amount must not be empty".to_string(),
        ));
    }
    let amount: u128 = trimmed
        .parse()
        .map_err(|_| ClientError::InvalidInput(format!("'{}' is not a number", trimmed)))?;
    if amount == 0 {
        return Err(ClientError::InvalidInput(
            "amount must be positive".to_string(),
        ));
    }
    Ok(amount)
}

/// Parse a required principal address typed by the user.
pub fn parse_principal(input: &str) -> ClientResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidInput(
            "principal must not be empty".to_string(),
        ));
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(ClientError::InvalidInput(format!(
            "'{}' is not a principal",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

/// Parse a required non-empty text field typed by the user.
pub fn parse_nonempty(input: &str) -> ClientResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidInput(
            "text must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn literals() {
        assert_eq!(ClarityArg::Uint(100).literal(), "u100");
        assert_eq!(ClarityArg::Bool(false).literal(), "false");
        assert_eq!(
            ClarityArg::Principal("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".into()).literal(),
            "'ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
        );
        assert_eq!(ClarityArg::StringAscii("hi".into()).literal(), "\"hi\"");
    }

    #[test]
    fn wire_form_is_hex_of_literal() {
        // "u1" == 0x7531
        assert_eq!(ClarityArg::Uint(1).to_wire(), "0x7531");
    }

    #[test]
    fn amount_validation() {
        assert_eq!(parse_positive_amount(" 42 ").unwrap(), 42);
        assert_matches!(parse_positive_amount(""), Err(ClientError::InvalidInput(_)));
        assert_matches!(
            parse_positive_amount("0"),
            Err(ClientError::InvalidInput(_))
        );
        assert_matches!(
            parse_positive_amount("ten"),
            Err(ClientError::InvalidInput(_))
        );
    }

    #[test]
    fn principal_validation() {
        assert!(parse_principal("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").is_ok());
        assert_matches!(parse_principal("  "), Err(ClientError::InvalidInput(_)));
        assert_matches!(parse_principal("a b"), Err(ClientError::InvalidInput(_)));
    }
}
