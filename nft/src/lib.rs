// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The NFT dApp: sequentially minted tokens with owner-guarded transfer. */

pub mod state;

use stacks_client::{
    parse_positive_amount, parse_principal, ClarityArg, ClientResult, Network, ReadClient,
    ReadRequest, WriteIntent,
};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "nft";

/// The read-only query for the highest minted token id.
pub fn get_last_token_id_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-last-token-id")
}

/// Highest minted token id as a decimal string, `"0"` before the first mint.
pub async fn get_last_token_id(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_last_token_id_request())
        .await?
        .as_uint_string()
}

/// The state-changing calls of the nft contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    MintNext { recipient: String },
    Transfer { token_id: u128, recipient: String },
}

impl Operation {
    /// Validates the recipient typed by the user.
    pub fn mint_next(recipient: &str) -> ClientResult<Self> {
        Ok(Operation::MintNext {
            recipient: parse_principal(recipient)?,
        })
    }

    /// Validates the transfer inputs typed by the user.
    pub fn transfer(token_id: &str, recipient: &str) -> ClientResult<Self> {
        Ok(Operation::Transfer {
            token_id: parse_positive_amount(token_id)?,
            recipient: parse_principal(recipient)?,
        })
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::MintNext { .. } => "mint-next",
            Operation::Transfer { .. } => "transfer",
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
            Operation::MintNext { recipient } => intent.with_arg(ClarityArg::Principal(recipient)),
            Operation::Transfer {
                token_id,
                recipient,
            } => intent
                .with_arg(ClarityArg::Uint(token_id))
                .with_arg(ClarityArg::Principal(recipient)),
        }
    }
}
