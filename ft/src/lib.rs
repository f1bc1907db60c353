// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The fungible-token dApp: per-principal balances with mint and transfer. */

pub mod state;

use stacks_client::{
    parse_positive_amount, parse_principal, ClarityArg, ClientResult, Network, ReadClient,
    ReadRequest, WriteIntent,
};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "ft";

/// The read-only balance query for one principal.
pub fn get_balance_request(owner: &str) -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-balance")
        .with_arg(ClarityArg::Principal(owner.to_string()))
}

/// Balance of `owner` as a decimal string. Fresh state reads as `"0"`.
pub async fn get_balance(
    client: &ReadClient,
    network: Network,
    owner: &str,
) -> ClientResult<String> {
    client
        .call_read(network, &get_balance_request(owner))
        .await?
        .as_uint_string()
}

/// The state-changing calls of the ft contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Mint { recipient: String, amount: u128 },
    Transfer { amount: u128, recipient: String },
}

impl Operation {
    /// Validates the mint inputs typed by the user.
    pub fn mint(recipient: &str, amount: &str) -> ClientResult<Self> {
        Ok(Operation::Mint {
            recipient: parse_principal(recipient)?,
            amount: parse_positive_amount(amount)?,
        })
    }

    /// Validates the transfer inputs typed by the user.
    pub fn transfer(amount: &str, recipient: &str) -> ClientResult<Self> {
        Ok(Operation::Transfer {
            amount: parse_positive_amount(amount)?,
            recipient: parse_principal(recipient)?,
        })
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::Mint { .. } => "mint",
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
            Operation::Mint { recipient, amount } => intent
                .with_arg(ClarityArg::Principal(recipient))
                .with_arg(ClarityArg::Uint(amount)),
            Operation::Transfer { amount, recipient } => intent
                .with_arg(ClarityArg::Uint(amount))
                .with_arg(ClarityArg::Principal(recipient)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;
    use stacks_client::testing::{CannedResponse, TestServer};
    use stacks_client::{ClientError, EndpointPair};

    use super::*;

    const WALLET_1: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";

    #[tokio::test]
    async fn balance_query_carries_the_owner_argument() {
        let server = TestServer::start(vec![CannedResponse::value(json!("0"))]).await;
        let endpoints = EndpointPair::new(server.url(), server.url());
        let balance = ReadClient::new()
            .call_read_at(&endpoints, &get_balance_request(WALLET_1))
            .await
            .unwrap()
            .as_uint_string()
            .unwrap();
        assert_eq!(balance, "0");

        let body: serde_json::Value =
            serde_json::from_str(&server.requests()[0].body).unwrap();
        assert_eq!(body["arguments"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn mint_and_transfer_argument_order() {
        let mint = Operation::mint(WALLET_1, "100").unwrap();
        let intent = mint.into_intent(Network::Devnet);
        assert_eq!(
            intent.function_args,
            vec![
                ClarityArg::Principal(WALLET_1.to_string()),
                ClarityArg::Uint(100)
            ]
        );

        let transfer = Operation::transfer("50", WALLET_1).unwrap();
        let intent = transfer.into_intent(Network::Devnet);
        assert_eq!(
            intent.function_args,
            vec![
                ClarityArg::Uint(50),
                ClarityArg::Principal(WALLET_1.to_string())
            ]
        );
    }

    #[test]
    fn invalid_inputs_are_rejected_before_any_intent_exists() {
        assert_matches!(
            Operation::mint("", "100"),
            Err(ClientError::InvalidInput(_))
        );
        assert_matches!(
            Operation::transfer("-5", WALLET_1),
            Err(ClientError::InvalidInput(_))
        );
        assert_matches!(
            Operation::transfer("0", WALLET_1),
            Err(ClientError::InvalidInput(_))
        );
    }
}
