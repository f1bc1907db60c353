// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Transient user-facing status messages.
//!
//! Success and error messages clear themselves after a fixed delay; info
//! messages stay until replaced. Failures are surfaced here, never panicked.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{error, info, warn};

/// How long success/error messages stay visible.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Default)]
struct Inner {
    message: Option<StatusMessage>,
    generation: u64,
}

/// The single status slot of a view.
#[derive(Clone, Default)]
pub struct StatusLine {
    inner: Arc<Mutex<Inner>>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, text: impl Into<String>) {
        self.set(StatusKind::Info, text.into());
    }

    pub fn success(&self, text: impl Into<String>) {
        self.set(StatusKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.set(StatusKind::Error, text.into());
    }

    pub fn current(&self) -> Option<StatusMessage> {
        self.inner.lock().expect("status lock").message.clone()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("status lock");
        inner.generation += 1;
        inner.message = None;
    }

    fn set(&self, kind: StatusKind, text: String) {
        match kind {
            StatusKind::Info => info!("{}", text),
            StatusKind::Success => info!("{}", text),
            StatusKind::Error => error!("{}", text),
        }
        let generation = {
            let mut inner = self.inner.lock().expect("status lock");
            inner.generation += 1;
            inner.message = Some(StatusMessage { text, kind });
            inner.generation
        };
        if kind == StatusKind::Info {
            return;
        }
        // Auto-clear, unless a newer message took the slot in the meantime.
        let slot = self.inner.clone();
        tokio::spawn(async move {
            tokio::time::sleep(STATUS_CLEAR_DELAY).await;
            match slot.lock() {
                Ok(mut inner) => {
                    if inner.generation == generation {
                        inner.message = None;
                    }
                }
                Err(err) => warn!("status slot poisoned: {}", err),
            }
        });
    }
}
