// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Structured error types shared by every example dApp.

use thiserror::Error;

/// Errors surfaced by the contract client and the view helpers.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Both the primary and the fallback endpoint failed or returned non-success.
    #[error("read of {function} failed: {reason}")]
    ReadFailed { function: String, reason: String },

    /// A write was attempted without a connected wallet session.
    #[error("no wallet connected")]
    NotConnected,

    /// A required user input was empty or not parseable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The response envelope was well-formed but carried no value.
    #[error("response for {function} carried no value")]
    MissingValue { function: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
