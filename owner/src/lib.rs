// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The ownership dApp: reads the contract owner and hands ownership over. */

pub mod state;

use stacks_client::{
    parse_principal, ClarityArg, ClientResult, Network, ReadClient, ReadRequest, WriteIntent,
};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "owner";

/// The read-only query for the current owner principal.
pub fn get_owner_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-owner")
}

/// The current owner principal.
pub async fn get_owner(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_owner_request())
        .await?
        .as_string()
}

/// The state-changing calls of the owner contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    TransferOwnership { new_owner: String },
}

impl Operation {
    /// Validates the new owner typed by the user.
    pub fn transfer_ownership(new_owner: &str) -> ClientResult<Self> {
        Ok(Operation::TransferOwnership {
            new_owner: parse_principal(new_owner)?,
        })
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::TransferOwnership { .. } => "transfer-ownership",
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
            Operation::TransferOwnership { new_owner } => {
                intent.with_arg(ClarityArg::Principal(new_owner))
            }
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
    async fn owner_reads_back_as_the_deployer_principal() {
        let server =
            TestServer::start(vec![CannedResponse::value(json!(state::DEPLOYER))]).await;
        let endpoints = EndpointPair::new(server.url(), server.url());
        let owner = ReadClient::new()
            .call_read_at(&endpoints, &get_owner_request())
            .await
            .unwrap()
            .as_string()
            .unwrap();
        assert_eq!(owner, state::DEPLOYER);
    }

    #[test]
    fn transfer_carries_the_new_owner_principal() {
        let intent = Operation::transfer_ownership(WALLET_1)
            .unwrap()
            .into_intent(Network::Devnet);
        assert_eq!(intent.function_name, "transfer-ownership");
        assert_eq!(
            intent.function_args,
            vec![ClarityArg::Principal(WALLET_1.to_string())]
        );
    }

    #[test]
    fn an_empty_new_owner_is_rejected() {
        assert_matches!(
            Operation::transfer_ownership("  "),
            Err(ClientError::InvalidInput(_))
        );
    }
}
