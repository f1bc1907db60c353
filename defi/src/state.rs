// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The defi contract state: per-principal vault balances and the pooled
//! liquidity total.

use std::collections::HashMap;

/// Error code for a withdrawal exceeding the caller's deposit.
pub const ERR_INSUFFICIENT_BALANCE: u32 = 100;

/// On-chain state of the `defi` vault contract.
#[derive(Debug, Default)]
pub struct DefiVault {
    balances: HashMap<String, u128>,
    total_liquidity: u128,
}

impl DefiVault {
    /// Read-only: the liquidity pooled across all depositors.
    pub fn get_total_liquidity(&self) -> u128 {
        self.total_liquidity
    }

    /// Read-only: what `owner` has deposited. Unknown principals read as 0.
    pub fn get_balance(&self, owner: &str) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    /// Adds `amount` to the sender's vault balance and the pool. Returns the
    /// sender's new balance.
    pub fn deposit(&mut self, sender: &str, amount: u128) -> Result<u128, u32> {
        let balance = self.balances.entry(sender.to_string()).or_insert(0);
        *balance += amount;
        self.total_liquidity += amount;
        Ok(*balance)
    }

    /// Removes `amount` from the sender's vault balance and the pool.
    pub fn withdraw(&mut self, sender: &str, amount: u128) -> Result<u128, u32> {
        let balance = self.get_balance(sender);
        if amount > balance {
            return Err(ERR_INSUFFICIENT_BALANCE);
        }
        let remaining = balance - amount;
        self.balances.insert(sender.to_string(), remaining);
        self.total_liquidity -= amount;
        Ok(remaining)
    }
}
