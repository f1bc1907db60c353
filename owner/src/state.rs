// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The owner contract state: a single owner principal, handed over only by
//! the current owner.

/// Error code when someone other than the owner tries to hand over ownership.
pub const ERR_NOT_AUTHORIZED: u32 = 100;

/// The principal that deployed the contract and owns it initially.
pub const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// On-chain state of the `owner` contract.
#[derive(Debug)]
pub struct Ownership {
    owner: String,
}

impl Default for Ownership {
    fn default() -> Self {
        Ownership {
            owner: DEPLOYER.to_string(),
        }
    }
}

impl Ownership {
    /// Read-only: the current owner principal.
    pub fn get_owner(&self) -> &str {
        &self.owner
    }

    /// Hands ownership to `new_owner`. Only the current owner may do this.
    pub fn transfer_ownership(&mut self, sender: &str, new_owner: &str) -> Result<bool, u32> {
        if sender != self.owner {
            return Err(ERR_NOT_AUTHORIZED);
        }
        self.owner = new_owner.to_string();
        Ok(true)
    }
}
