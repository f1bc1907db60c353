// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The voting dApp: two on-chain tallies, one yes and one no. */

pub mod state;

use futures::try_join;
use stacks_client::{ClientResult, Network, ReadClient, ReadRequest, WriteIntent};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "vote";

pub fn get_yes_votes_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-yes-votes")
}

pub fn get_no_votes_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-no-votes")
}

pub async fn get_yes_votes(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_yes_votes_request())
        .await?
        .as_uint_string()
}

pub async fn get_no_votes(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_no_votes_request())
        .await?
        .as_uint_string()
}

/// Both tallies, queried in parallel. Fresh state reads as `("0", "0")`.
pub async fn get_votes(client: &ReadClient, network: Network) -> ClientResult<(String, String)> {
    try_join!(
        get_yes_votes(client, network),
        get_no_votes(client, network)
    )
}

/// The state-changing calls of the vote contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    VoteYes,
    VoteNo,
}

impl Operation {
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::VoteYes => "vote-yes",
            Operation::VoteNo => "vote-no",
        }
    }

    pub fn into_intent(self, network: Network) -> WriteIntent {
        WriteIntent::new(CONTRACT_ADDRESS, CONTRACT_NAME, self.function_name(), network)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stacks_client::testing::{CannedResponse, TestServer};
    use stacks_client::EndpointPair;

    use super::*;

    #[tokio::test]
    async fn tallies_decode_as_uint_strings() {
        let server = TestServer::start(vec![CannedResponse::value(json!("2"))]).await;
        let endpoints = EndpointPair::new(server.url(), server.url());
        let yes = ReadClient::new()
            .call_read_at(&endpoints, &get_yes_votes_request())
            .await
            .unwrap()
            .as_uint_string()
            .unwrap();
        assert_eq!(yes, "2");
    }

    #[test]
    fn intents_target_the_vote_contract() {
        let intent = Operation::VoteYes.into_intent(Network::Testnet);
        assert_eq!(intent.contract_name, CONTRACT_NAME);
        assert_eq!(intent.function_name, "vote-yes");
        assert!(intent.function_args.is_empty());
    }
}
