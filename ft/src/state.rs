// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The ft contract state: a balance map with mint and guarded transfer.

use std::collections::HashMap;

/// Error code for a transfer exceeding the sender's balance.
pub const ERR_INSUFFICIENT_BALANCE: u32 = 1;

/// On-chain state of the `ft` contract.
#[derive(Debug, Default)]
pub struct FungibleToken {
    balances: HashMap<String, u128>,
}

impl FungibleToken {
    /// Read-only: the balance of `owner`. Unknown principals read as 0.
    pub fn get_balance(&self, owner: &str) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    /// Credits `amount` to `recipient`.
    pub fn mint(&mut self, recipient: &str, amount: u128) -> Result<bool, u32> {
        *self.balances.entry(recipient.to_string()).or_insert(0) += amount;
        Ok(true)
    }

    /// Moves `amount` from `sender` to `recipient`.
    pub fn transfer(&mut self, sender: &str, amount: u128, recipient: &str) -> Result<bool, u32> {
        let balance = self.get_balance(sender);
        if balance < amount {
            return Err(ERR_INSUFFICIENT_BALANCE);
        }
        self.balances.insert(sender.to_string(), balance - amount);
        *self.balances.entry(recipient.to_string()).or_insert(0) += amount;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET_1: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";
    const WALLET_2: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

    #[test]
    fn balances_start_at_zero() {
        assert_eq!(FungibleToken::default().get_balance(WALLET_1), 0);
    }

    #[test]
    fn mint_adds_to_balance() {
        let mut token = FungibleToken::default();
        assert_eq!(token.mint(WALLET_1, 100), Ok(true));
        assert_eq!(token.get_balance(WALLET_1), 100);
    }

    #[test]
    fn transfer_moves_tokens_between_accounts() {
        let mut token = FungibleToken::default();
        token.mint(WALLET_1, 200).unwrap();
        assert_eq!(token.transfer(WALLET_1, 50, WALLET_2), Ok(true));
        assert_eq!(token.get_balance(WALLET_1), 150);
        assert_eq!(token.get_balance(WALLET_2), 50);
    }

    #[test]
    fn transfer_exceeding_balance_fails() {
        let mut token = FungibleToken::default();
        token.mint(WALLET_1, 50).unwrap();
        assert_eq!(
            token.transfer(WALLET_1, 100, WALLET_2),
            Err(ERR_INSUFFICIENT_BALANCE)
        );
        assert_eq!(token.get_balance(WALLET_1), 50);
        assert_eq!(token.get_balance(WALLET_2), 0);
    }
}
