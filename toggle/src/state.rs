// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The toggle contract state: a single boolean flag.

/// On-chain state of the `toggle` contract.
#[derive(Debug, Default)]
pub struct Toggle {
    flag: bool,
}

impl Toggle {
    /// Read-only: the current flag. Starts as `false`.
    pub fn get_flag(&self) -> bool {
        self.flag
    }

    pub fn set_true(&mut self) -> bool {
        self.flag = true;
        self.flag
    }

    pub fn set_false(&mut self) -> bool {
        self.flag = false;
        self.flag
    }

    /// Flips the flag and returns the new value.
    pub fn toggle_flag(&mut self) -> bool {
        self.flag = !self.flag;
        self.flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_false() {
        assert!(!Toggle::default().get_flag());
    }

    #[test]
    fn set_true_then_false() {
        let mut toggle = Toggle::default();
        assert!(toggle.set_true());
        assert!(!toggle.set_false());
    }

    #[test]
    fn toggle_flips_twice() {
        let mut toggle = Toggle::default();
        assert!(toggle.toggle_flag());
        assert!(!toggle.toggle_flag());
        assert!(!toggle.get_flag());
    }
}
