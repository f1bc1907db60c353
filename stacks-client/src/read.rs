// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The read-only contract client.
//!
//! Reads go to `POST {base}/v2/contracts/call-read/{address}/{name}/{function}`
//! on the selected network. When the primary endpoint fails or answers with a
//! non-success status the call is retried exactly once against the fallback
//! endpoint, then fails with [`ClientError::ReadFailed`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::network::{EndpointPair, Network};
use crate::value::ClarityArg;

/// An immutable read-only call against a named contract function.
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub contract_address: String,
    pub contract_name: String,
    pub function_name: String,
    pub arguments: Vec<ClarityArg>,
    pub sender: String,
}

impl ReadRequest {
    /// A request with no arguments; the sender defaults to the contract address.
    pub fn new(
        contract_address: impl Into<String>,
        contract_name: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        let contract_address = contract_address.into();
        ReadRequest {
            sender: contract_address.clone(),
            contract_address,
            contract_name: contract_name.into(),
            function_name: function_name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: ClarityArg) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    fn url(&self, base: &str) -> String {
        format!(
            "{}/v2/contracts/call-read/{}/{}/{}",
            base, self.contract_address, self.contract_name, self.function_name
        )
    }
}

#[derive(Serialize)]
struct ReadBody {
    sender: String,
    arguments: Vec<String>,
}

#[derive(Deserialize)]
struct ReadEnvelope {
    #[serde(default)]
    result: Option<ResultField>,
}

#[derive(Deserialize)]
struct ResultField {
    #[serde(default)]
    value: Option<serde_json::Value>,
}

/// The decoded outcome of a successful read.
///
/// Presence and absence are kept apart: a missing `result.value` field is not
/// silently turned into a zero-equivalent, the typed accessors report it as
/// [`ClientError::MissingValue`].
#[derive(Debug)]
pub struct ReadValue {
    function: String,
    value: Option<serde_json::Value>,
}

impl ReadValue {
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_inner(self) -> Option<serde_json::Value> {
        self.value
    }

    fn missing(&self) -> ClientError {
        ClientError::MissingValue {
            function: self.function.clone(),
        }
    }

    /// An unsigned integer rendered as a decimal string.
    pub fn as_uint_string(self) -> ClientResult<String> {
        match &self.value {
            Some(serde_json::Value::String(text)) => Ok(text.clone()),
            Some(serde_json::Value::Number(number)) => Ok(number.to_string()),
            Some(other) => Err(ClientError::InvalidInput(format!(
                "expected an unsigned integer for {}, got {}",
                self.function, other
            ))),
            None => Err(self.missing()),
        }
    }

    pub fn as_bool(self) -> ClientResult<bool> {
        match &self.value {
            Some(serde_json::Value::Bool(flag)) => Ok(*flag),
            Some(serde_json::Value::String(text)) if text == "true" => Ok(true),
            Some(serde_json::Value::String(text)) if text == "false" => Ok(false),
            Some(other) => Err(ClientError::InvalidInput(format!(
                "expected a boolean for {}, got {}",
                self.function, other
            ))),
            None => Err(self.missing()),
        }
    }

    /// An optional principal/string value: `none` decodes as `None`.
    pub fn as_optional_string(self) -> ClientResult<Option<String>> {
        match &self.value {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(ClientError::InvalidInput(format!(
                "expected an optional string for {}, got {}",
                self.function, other
            ))),
        }
    }

    /// A principal or UTF-8/ASCII string value. May legitimately be empty.
    pub fn as_string(self) -> ClientResult<String> {
        match &self.value {
            Some(serde_json::Value::String(text)) => Ok(text.clone()),
            Some(other) => Err(ClientError::InvalidInput(format!(
                "expected a string for {}, got {}",
                self.function, other
            ))),
            None => Err(self.missing()),
        }
    }
}

/// Read-only contract client with a single primary-to-fallback retry hop.
#[derive(Debug, Clone, Default)]
pub struct ReadClient {
    http: reqwest::Client,
}

impl ReadClient {
    pub fn new() -> Self {
        ReadClient {
            http: reqwest::Client::new(),
        }
    }

    /// Issue `request` against the endpoint pair of `network`.
    pub async fn call_read(
        &self,
        network: Network,
        request: &ReadRequest,
    ) -> ClientResult<ReadValue> {
        self.call_read_at(&network.endpoints(), request).await
    }

    /// Issue `request` against an explicit endpoint pair.
    pub async fn call_read_at(
        &self,
        endpoints: &EndpointPair,
        request: &ReadRequest,
    ) -> ClientResult<ReadValue> {
        match self.attempt(&endpoints.primary, request).await {
            Ok(value) => Ok(value),
            Err(primary_err) => {
                if !endpoints.fallback_is_distinct() {
                    return Err(ClientError::ReadFailed {
                        function: request.function_name.clone(),
                        reason: primary_err,
                    });
                }
                warn!(
                    "primary endpoint failed for {} ({}), trying fallback",
                    request.function_name, primary_err
                );
                self.attempt(&endpoints.fallback, request)
                    .await
                    .map_err(|fallback_err| ClientError::ReadFailed {
                        function: request.function_name.clone(),
                        reason: format!(
                            "primary: {}; fallback: {}",
                            primary_err, fallback_err
                        ),
                    })
            }
        }
    }

    async fn attempt(&self, base: &str, request: &ReadRequest) -> Result<ReadValue, String> {
        let body = ReadBody {
            sender: request.sender.clone(),
            arguments: request.arguments.iter().map(ClarityArg::to_wire).collect(),
        };
        let response = self
            .http
            .post(request.url(base))
            .json(&body)
            .send()
            .await
            .map_err(|err| err.to_string())?;
        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }
        let envelope: ReadEnvelope = response.json().await.map_err(|err| err.to_string())?;
        let value = envelope.result.and_then(|result| result.value);
        debug!("{} -> {:?}", request.function_name, value);
        Ok(ReadValue {
            function: request.function_name.clone(),
            value,
        })
    }
}
