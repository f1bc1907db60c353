// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Wallet session state and the write side of the contract client.
//!
//! Signing and broadcasting belong to an external wallet; this module only
//! builds the write intent, checks that a session is connected before any I/O
//! happens, and hands the intent to a [`WalletSigner`] implementation.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::network::Network;
use crate::value::ClarityArg;

/// The address used by the demo signer, matching the demo mode of the wallets.
pub const DEMO_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// A connected wallet session: the resolved addresses per network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub mainnet_address: Option<String>,
    pub testnet_address: Option<String>,
}

impl Session {
    /// A session for a single address valid on every network.
    pub fn demo() -> Self {
        Session {
            mainnet_address: Some(DEMO_ADDRESS.to_string()),
            testnet_address: Some(DEMO_ADDRESS.to_string()),
        }
    }

    /// The address to act as on the given network, preferring the matching one.
    pub fn address_for(&self, network: Network) -> Option<&str> {
        match network {
            Network::Mainnet => self
                .mainnet_address
                .as_deref()
                .or(self.testnet_address.as_deref()),
            Network::Testnet | Network::Devnet => self
                .testnet_address
                .as_deref()
                .or(self.mainnet_address.as_deref()),
        }
    }
}

/// A state-changing call, submitted to an external wallet signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteIntent {
    pub contract_address: String,
    pub contract_name: String,
    pub function_name: String,
    pub function_args: Vec<ClarityArg>,
    pub network: Network,
}

impl WriteIntent {
    pub fn new(
        contract_address: impl Into<String>,
        contract_name: impl Into<String>,
        function_name: impl Into<String>,
        network: Network,
    ) -> Self {
        WriteIntent {
            contract_address: contract_address.into(),
            contract_name: contract_name.into(),
            function_name: function_name.into(),
            function_args: Vec::new(),
            network,
        }
    }

    pub fn with_arg(mut self, arg: ClarityArg) -> Self {
        self.function_args.push(arg);
        self
    }
}

/// The two terminal outcomes of a wallet signing flow.
///
/// `Submitted` means the transaction was accepted for broadcast, not that it
/// was confirmed on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted { txid: String },
    Cancelled,
}

/// The seam to the external wallet popup.
pub trait WalletSigner {
    fn sign_and_broadcast(
        &self,
        intent: WriteIntent,
    ) -> impl std::future::Future<Output = ClientResult<SubmitOutcome>> + Send;
}

/// Connection state threaded explicitly through views and client calls.
#[derive(Debug, Clone)]
pub struct Connection {
    session: Option<Session>,
    pub network: Network,
}

impl Connection {
    pub fn new(network: Network) -> Self {
        Connection {
            session: None,
            network,
        }
    }

    pub fn connect(&mut self, session: Session) {
        info!(
            "wallet connected: {}",
            session.address_for(self.network).unwrap_or("<no address>")
        );
        self.session = Some(session);
    }

    pub fn disconnect(&mut self) {
        info!("wallet disconnected");
        self.session = None;
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_address(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|session| session.address_for(self.network))
    }

    /// Submit a write intent through `signer`.
    ///
    /// Fails with [`ClientError::NotConnected`] before any network I/O when no
    /// session is connected.
    pub async fn submit<S: WalletSigner>(
        &self,
        signer: &S,
        intent: WriteIntent,
    ) -> ClientResult<SubmitOutcome> {
        if !self.is_connected() {
            return Err(ClientError::NotConnected);
        }
        signer.sign_and_broadcast(intent).await
    }
}

/// A signer that approves every intent with a fabricated transaction id.
///
/// Stands in for the wallet extension, the way the original examples fall back
/// to a demo address when no wallet is installed.
#[derive(Debug, Default)]
pub struct DemoSigner {
    submitted: std::sync::atomic::AtomicU64,
}

impl WalletSigner for DemoSigner {
    async fn sign_and_broadcast(&self, intent: WriteIntent) -> ClientResult<SubmitOutcome> {
        let nonce = self
            .submitted
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        info!(
            "demo signer broadcasting {}.{} {}",
            intent.contract_name, intent.function_name, nonce
        );
        Ok(SubmitOutcome::Submitted {
            txid: format!("0xdemo{:08x}", nonce),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn address_resolution_prefers_matching_network() {
        let session = Session {
            mainnet_address: Some("SP_MAIN".to_string()),
            testnet_address: Some("ST_TEST".to_string()),
        };
        assert_eq!(session.address_for(Network::Mainnet), Some("SP_MAIN"));
        assert_eq!(session.address_for(Network::Testnet), Some("ST_TEST"));
        assert_eq!(session.address_for(Network::Devnet), Some("ST_TEST"));

        let only_mainnet = Session {
            mainnet_address: Some("SP_MAIN".to_string()),
            testnet_address: None,
        };
        assert_eq!(only_mainnet.address_for(Network::Testnet), Some("SP_MAIN"));
    }

    #[tokio::test]
    async fn submit_requires_connection() {
        let connection = Connection::new(Network::Testnet);
        let intent = WriteIntent::new("ST1ADDR", "counter", "increment", Network::Testnet);
        let outcome = connection.submit(&DemoSigner::default(), intent).await;
        assert_matches!(outcome, Err(ClientError::NotConnected));
    }

    #[tokio::test]
    async fn demo_signer_submits() {
        let mut connection = Connection::new(Network::Testnet);
        connection.connect(Session::demo());
        assert_eq!(connection.current_address(), Some(DEMO_ADDRESS));

        let intent = WriteIntent::new("ST1ADDR", "counter", "increment", Network::Testnet);
        let outcome = connection
            .submit(&DemoSigner::default(), intent)
            .await
            .unwrap();
        assert_matches!(outcome, SubmitOutcome::Submitted { .. });
    }
}
