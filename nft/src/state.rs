// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The nft contract state: sequential token ids and an owner map.

use std::collections::HashMap;

/// Error code when the sender does not own the token being moved.
pub const ERR_NOT_OWNER: u32 = 100;
/// Error code for a token id that was never minted.
pub const ERR_UNKNOWN_TOKEN: u32 = 101;

/// On-chain state of the `nft` contract.
#[derive(Debug, Default)]
pub struct Nft {
    last_token_id: u128,
    owners: HashMap<u128, String>,
}

impl Nft {
    /// Read-only: the highest id minted so far, 0 before the first mint.
    pub fn get_last_token_id(&self) -> u128 {
        self.last_token_id
    }

    /// Read-only: the owner of `token_id`, if it exists.
    pub fn get_owner(&self, token_id: u128) -> Option<&str> {
        self.owners.get(&token_id).map(String::as_str)
    }

    /// Mints the next token to `recipient` and returns its id. Ids start at 1.
    pub fn mint_next(&mut self, recipient: &str) -> Result<u128, u32> {
        let token_id = self.last_token_id + 1;
        self.owners.insert(token_id, recipient.to_string());
        self.last_token_id = token_id;
        Ok(token_id)
    }

    /// Moves `token_id` from `sender` to `recipient`.
    pub fn transfer(&mut self, sender: &str, token_id: u128, recipient: &str) -> Result<bool, u32> {
        match self.owners.get(&token_id) {
            None => Err(ERR_UNKNOWN_TOKEN),
            Some(owner) if owner != sender => Err(ERR_NOT_OWNER),
            Some(_) => {
                self.owners.insert(token_id, recipient.to_string());
                Ok(true)
            }
        }
    }
}
