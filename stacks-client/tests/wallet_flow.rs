// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Write-intent submission through the wallet-signer seam.

use std::sync::atomic::{AtomicUsize, Ordering};

use assert_matches::assert_matches;

use stacks_client::{
    ClarityArg, ClientError, ClientResult, Connection, Network, Session, SubmitOutcome,
    WalletSigner, WriteIntent,
};

const ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// A signer scripted to cancel or approve, counting every invocation.
struct ScriptedSigner {
    cancel: bool,
    calls: AtomicUsize,
}

impl ScriptedSigner {
    fn approving() -> Self {
        ScriptedSigner {
            cancel: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn cancelling() -> Self {
        ScriptedSigner {
            cancel: true,
            calls: AtomicUsize::new(0),
        }
    }
}

impl WalletSigner for ScriptedSigner {
    async fn sign_and_broadcast(&self, _intent: WriteIntent) -> ClientResult<SubmitOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.cancel {
            Ok(SubmitOutcome::Cancelled)
        } else {
            Ok(SubmitOutcome::Submitted {
                txid: "0xabc123".to_string(),
            })
        }
    }
}

fn increment_intent() -> WriteIntent {
    WriteIntent::new(ADDRESS, "counter", "increment", Network::Testnet)
}

#[tokio::test]
async fn disconnected_write_fails_fast_without_reaching_the_signer() {
    let connection = Connection::new(Network::Testnet);
    let signer = ScriptedSigner::approving();

    let result = connection.submit(&signer, increment_intent()).await;
    assert_matches!(result, Err(ClientError::NotConnected));
    assert_eq!(signer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn submitted_outcome_carries_the_txid() {
    let mut connection = Connection::new(Network::Testnet);
    connection.connect(Session::demo());
    let signer = ScriptedSigner::approving();

    let outcome = connection
        .submit(&signer, increment_intent())
        .await
        .unwrap();
    assert_matches!(outcome, SubmitOutcome::Submitted { txid } if txid == "0xabc123");
    assert_eq!(signer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelled_popup_is_an_outcome_not_an_error() {
    let mut connection = Connection::new(Network::Testnet);
    connection.connect(Session::demo());
    let signer = ScriptedSigner::cancelling();

    let outcome = connection
        .submit(&signer, increment_intent())
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Cancelled);
}

#[tokio::test]
async fn reconnecting_after_disconnect_restores_writes() {
    let mut connection = Connection::new(Network::Devnet);
    connection.connect(Session::demo());
    connection.disconnect();
    assert!(!connection.is_connected());
    assert_eq!(connection.current_address(), None);

    let signer = ScriptedSigner::approving();
    assert_matches!(
        connection.submit(&signer, increment_intent()).await,
        Err(ClientError::NotConnected)
    );

    connection.connect(Session::demo());
    let intent = increment_intent().with_arg(ClarityArg::Uint(1));
    assert_matches!(
        connection.submit(&signer, intent).await,
        Ok(SubmitOutcome::Submitted { .. })
    );
}
