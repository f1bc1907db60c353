// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Network selection and the primary/fallback endpoint pair.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Base URL of the local devnet node, used as the fallback for reads.
pub const DEVNET_BASE_URL: &str = "http://localhost:3999";

/// One of the three isolated deployments of the ledger software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Base URL of the node API for this network.
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.stacks.co",
            Network::Testnet => "https://api.testnet.stacks.co",
            Network::Devnet => DEVNET_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }

    /// The endpoint pair for read-only calls against this network.
    pub fn endpoints(&self) -> EndpointPair {
        EndpointPair {
            primary: self.base_url().to_string(),
            fallback: DEVNET_BASE_URL.to_string(),
        }
    }
}

impl std::str::FromStr for Network {
    type Err = ClientError;

    fn from_str(s: &str) -> ClientResult<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(ClientError::InvalidInput(format!(
                "unknown network: '{}'. Supported: mainnet, testnet, devnet",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primary endpoint plus the fallback tried after the primary fails.
#[derive(Debug, Clone)]
pub struct EndpointPair {
    pub primary: String,
    pub fallback: String,
}

impl EndpointPair {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        EndpointPair {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    /// True when the fallback would just repeat the primary.
    pub fn fallback_is_distinct(&self) -> bool {
        self.primary != self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_urls() {
        assert_eq!(Network::Mainnet.base_url(), "https://api.stacks.co");
        assert_eq!(Network::Testnet.base_url(), "https://api.testnet.stacks.co");
        assert_eq!(Network::Devnet.base_url(), DEVNET_BASE_URL);
    }

    #[test]
    fn parse_round_trip() {
        for network in [Network::Mainnet, Network::Testnet, Network::Devnet] {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
        assert!("simnet".parse::<Network>().is_err());
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Mainnet);
    }

    #[test]
    fn devnet_fallback_is_not_distinct() {
        assert!(Network::Mainnet.endpoints().fallback_is_distinct());
        assert!(!Network::Devnet.endpoints().fallback_is_distinct());
    }
}
