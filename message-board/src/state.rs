// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The message-board contract state: a string plus a lazily initialized owner.

use crate::DEFAULT_MESSAGE;

/// Error code for a caller who is not the board owner.
pub const ERR_NOT_AUTHORIZED: u32 = 100;

/// On-chain state of the `message-board` contract.
#[derive(Debug)]
pub struct MessageBoard {
    message: String,
    owner: Option<String>,
}

impl Default for MessageBoard {
    fn default() -> Self {
        MessageBoard {
            message: DEFAULT_MESSAGE.to_string(),
            owner: None,
        }
    }
}

impl MessageBoard {
    /// Read-only: the current message.
    pub fn get_message(&self) -> &str {
        &self.message
    }

    /// Read-only: the owner, `None` until the first `set-message`.
    pub fn get_owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Sets the message. The first caller becomes the owner; afterwards only
    /// the owner may write.
    pub fn set_message(&mut self, sender: &str, message: &str) -> Result<String, u32> {
        match &self.owner {
            None => self.owner = Some(sender.to_string()),
            Some(owner) if owner == sender => {}
            Some(_) => return Err(ERR_NOT_AUTHORIZED),
        }
        self.message = message.to_string();
        Ok(self.message.clone())
    }

    /// Clears the message; owner-only once an owner exists.
    pub fn clear_message(&mut self, sender: &str) -> Result<String, u32> {
        self.set_message(sender, "")
    }
}
