// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The DeFi vault dApp: deposit into and withdraw from a pooled vault. */

pub mod state;

use stacks_client::{
    parse_positive_amount, ClarityArg, ClientResult, Network, ReadClient, ReadRequest, WriteIntent,
};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "defi";

/// The read-only query for the pooled liquidity.
pub fn get_total_liquidity_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-total-liquidity")
}

/// Pooled liquidity as a decimal string. An untouched vault reads as `"0"`.
pub async fn get_total_liquidity(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_total_liquidity_request())
        .await?
        .as_uint_string()
}

/// The state-changing calls of the defi contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: u128 },
    Withdraw { amount: u128 },
}

impl Operation {
    /// Validates the deposit amount typed by the user.
    pub fn deposit(amount: &str) -> ClientResult<Self> {
        Ok(Operation::Deposit {
            amount: parse_positive_amount(amount)?,
        })
    }

    /// Validates the withdrawal amount typed by the user.
    pub fn withdraw(amount: &str) -> ClientResult<Self> {
        Ok(Operation::Withdraw {
            amount: parse_positive_amount(amount)?,
        })
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
        }
    }

    pub fn into_intent(self, network: Network) -> WriteIntent {
        let intent = WriteIntent::new(
            CONTRACT_ADDRESS,
            CONTRACT_NAME,
            self.function_name(),
            network,
        );
        match self {
            Operation::Deposit { amount } | Operation::Withdraw { amount } => {
                intent.with_arg(ClarityArg::Uint(amount))
            }
        }
    }
}
