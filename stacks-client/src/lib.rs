// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! Shared protocol client for the Stacks example dApps.

The examples all follow the same pattern: a read-only query against a named
contract function with a primary/fallback endpoint pair, a write intent handed
to an external wallet signer, and a cancellable poll task that refreshes the
displayed value while a wallet session is connected. */

pub mod error;
pub mod network;
pub mod poll;
pub mod read;
pub mod session;
pub mod status;
pub mod value;
pub mod wallet;

#[cfg(feature = "testing")]
pub mod testing;

pub use error::{ClientError, ClientResult};
pub use network::{EndpointPair, Network, DEVNET_BASE_URL};
pub use poll::{Poller, POLL_INTERVAL, POST_SUBMIT_DELAY};
pub use read::{ReadClient, ReadRequest, ReadValue};
pub use status::{StatusKind, StatusLine, StatusMessage, STATUS_CLEAR_DELAY};
pub use value::{parse_nonempty, parse_positive_amount, parse_principal, ClarityArg};
pub use wallet::{
    Connection, DemoSigner, Session, SubmitOutcome, WalletSigner, WriteIntent, DEMO_ADDRESS,
};
