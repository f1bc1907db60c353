// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The vote contract state: two uint tallies.

/// On-chain state of the `vote` contract.
#[derive(Debug, Default)]
pub struct Vote {
    yes_votes: u128,
    no_votes: u128,
}

impl Vote {
    /// Read-only: the yes tally. Starts at 0.
    pub fn get_yes_votes(&self) -> u128 {
        self.yes_votes
    }

    /// Read-only: the no tally. Starts at 0.
    pub fn get_no_votes(&self) -> u128 {
        self.no_votes
    }

    /// Counts a yes vote and returns the new tally.
    pub fn vote_yes(&mut self) -> u128 {
        self.yes_votes += 1;
        self.yes_votes
    }

    /// Counts a no vote and returns the new tally.
    pub fn vote_no(&mut self) -> u128 {
        self.no_votes += 1;
        self.no_votes
    }
}
