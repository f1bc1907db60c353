// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The message-board dApp: one on-chain string whose first writer becomes the
owner, after which only the owner may change it. */

pub mod state;

use futures::try_join;
use stacks_client::{
    parse_nonempty, ClarityArg, ClientResult, Network, ReadClient, ReadRequest, WriteIntent,
};

pub const CONTRACT_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const CONTRACT_NAME: &str = "message-board";

/// The message the contract is deployed with.
pub const DEFAULT_MESSAGE: &str = "Hello from Clarity!";

pub fn get_message_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-message")
}

pub fn get_owner_request() -> ReadRequest {
    ReadRequest::new(CONTRACT_ADDRESS, CONTRACT_NAME, "get-owner")
}

/// Current message. Fresh state reads as [`DEFAULT_MESSAGE`].
pub async fn get_message(client: &ReadClient, network: Network) -> ClientResult<String> {
    client
        .call_read(network, &get_message_request())
        .await?
        .as_string()
}

/// Current board owner, `None` until the first `set-message` call.
pub async fn get_owner(client: &ReadClient, network: Network) -> ClientResult<Option<String>> {
    client
        .call_read(network, &get_owner_request())
        .await?
        .as_optional_string()
}

/// Message and owner, queried in parallel.
pub async fn get_board(
    client: &ReadClient,
    network: Network,
) -> ClientResult<(String, Option<String>)> {
    try_join!(get_message(client, network), get_owner(client, network))
}

/// The state-changing calls of the message-board contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    SetMessage { message: String },
    ClearMessage,
}

impl Operation {
    /// Validates the message text typed by the user.
    pub fn set_message(input: &str) -> ClientResult<Self> {
        Ok(Operation::SetMessage {
            message: parse_nonempty(input)?,
        })
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::SetMessage { .. } => "set-message",
            Operation::ClearMessage => "clear-message",
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
            Operation::SetMessage { message } => {
                intent.with_arg(ClarityArg::StringAscii(message))
            }
            Operation::ClearMessage => intent,
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

    #[tokio::test]
    async fn fresh_state_reads_the_default_greeting() {
        let server = TestServer::start(vec![CannedResponse::value(json!(DEFAULT_MESSAGE))]).await;
        let endpoints = EndpointPair::new(server.url(), server.url());
        let message = ReadClient::new()
            .call_read_at(&endpoints, &get_message_request())
            .await
            .unwrap()
            .as_string()
            .unwrap();
        assert_eq!(message, DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn unset_owner_reads_as_none() {
        let server = TestServer::start(vec![CannedResponse::value(json!(null))]).await;
        let endpoints = EndpointPair::new(server.url(), server.url());
        let owner = ReadClient::new()
            .call_read_at(&endpoints, &get_owner_request())
            .await
            .unwrap()
            .as_optional_string()
            .unwrap();
        assert_eq!(owner, None);
    }

    #[test]
    fn set_message_rejects_empty_input() {
        assert_matches!(
            Operation::set_message("   "),
            Err(ClientError::InvalidInput(_))
        );
    }

    #[test]
    fn set_message_carries_the_text_argument() {
        let operation = Operation::set_message("board update").unwrap();
        let intent = operation.into_intent(Network::Testnet);
        assert_eq!(intent.function_name, "set-message");
        assert_eq!(
            intent.function_args,
            vec![ClarityArg::StringAscii("board update".to_string())]
        );
    }
}
