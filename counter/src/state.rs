// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The counter contract state: a single uint variable with guarded setters.

/// On-chain state of the `counter` contract.
#[derive(Debug, Default)]
pub struct Counter {
    value: u128,
}

impl Counter {
    /// Read-only: the current value. Starts at 0.
    pub fn get_counter(&self) -> u128 {
        self.value
    }

    /// Adds one and returns the new value.
    pub fn increment(&mut self) -> u128 {
        self.value += 1;
        self.value
    }

    /// Subtracts one, saturating at 0, and returns the new value.
    pub fn decrement(&mut self) -> u128 {
        self.value = self.value.saturating_sub(1);
        self.value
    }

    /// Sets the value back to 0.
    pub fn reset(&mut self) -> u128 {
        self.value = 0;
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::default().get_counter(), 0);
    }

    #[test]
    fn increment_increment_decrement_is_one() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.decrement(), 1);
        assert_eq!(counter.get_counter(), 1);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut counter = Counter::default();
        assert_eq!(counter.decrement(), 0);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.reset(), 0);
        assert_eq!(counter.get_counter(), 0);
    }
}
