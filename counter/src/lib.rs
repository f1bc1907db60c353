// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The counter dApp: one on-chain uint with increment, decrement, and reset. */

pub mod state;

use stacks_client::{ClientResult, Network, ReadClient, ReadRequest, WriteIntent};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "counter";

/// The read-only query for the current counter value.
pub fn get_counter_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-counter")
}

/// Current counter value as a decimal string. Fresh state reads as `"0"`.
pub async fn get_counter(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_counter_request())
        .await?
        .as_uint_string()
}

/// The state-changing calls of the counter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
    Reset,
}

impl Operation {
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
            Operation::Reset => "reset",
        }
    }

    pub fn into_intent(self, network: Network) -> WriteIntent {
        WriteIntent::new(CONTRACT_ADDRESS, CONTRACT_NAME, self.function_name(), network)
    }
}
