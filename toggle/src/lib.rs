// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The toggle dApp: one on-chain boolean flag. */

pub mod state;

use stacks_client::{ClientResult, Network, ReadClient, ReadRequest, WriteIntent};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "toggle";

pub fn get_flag_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-flag")
}

/// Current flag value. Fresh state reads as `false`.
pub async fn get_flag(client: &ReadClient, network: Network) -> ClientResult<bool> {
    client
        .call_read(network, &get_flag_request())
        .await?
        .as_bool()
}

/// The state-changing calls of the toggle contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SetTrue,
    SetFalse,
    ToggleFlag,
}

impl Operation {
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::SetTrue => "set-true",
            Operation::SetFalse => "set-false",
            Operation::ToggleFlag => "toggle-flag",
        }
    }

    pub fn into_intent(self, network: Network) -> WriteIntent {
        WriteIntent::new(CONTRACT_ADDRESS, CONTRACT_NAME, self.function_name(), network)
    }
}
