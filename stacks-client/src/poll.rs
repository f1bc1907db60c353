// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A cancellable repeating poll task with a single owner.
//!
//! Views own at most one [`Poller`] at a time; replacing or dropping it aborts
//! the underlying task, so a disconnected view cannot leak a timer that keeps
//! hitting the network.

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Refresh interval while a wallet is connected.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Delay between a submitted write and the heuristic re-read of state.
pub const POST_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// An owned, cancellable scheduled task. The first tick fires immediately.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    pub fn start<F, Fut>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                timer.tick().await;
                tick().await;
            }
        });
        debug!("poller started, interval {:?}", interval);
        Poller { handle }
    }

    /// Cancel the task immediately.
    pub fn stop(self) {
        // Drop does the abort.
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("poller cancelled");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_repeat_until_cancelled() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counted = ticks.clone();
        let poller = Poller::start(POLL_INTERVAL, move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(35)).await;
        let before_cancel = ticks.load(Ordering::SeqCst);
        assert!(before_cancel >= 3, "expected several ticks, got {}", before_cancel);

        poller.stop();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), before_cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_a_poller_cancels_the_old_one() {
        let old_ticks = Arc::new(AtomicUsize::new(0));
        let new_ticks = Arc::new(AtomicUsize::new(0));

        let counted = old_ticks.clone();
        let mut active = Some(Poller::start(POLL_INTERVAL, move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
            }
        }));
        tokio::time::sleep(Duration::from_secs(5)).await;
        let old_before = old_ticks.load(Ordering::SeqCst);
        assert!(active.as_ref().unwrap().is_running());

        // Re-entrant start: the replacement drops, and thereby cancels, the
        // previous task before its own first tick.
        let counted = new_ticks.clone();
        active = Some(Poller::start(POLL_INTERVAL, move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
            }
        }));

        tokio::time::sleep(Duration::from_secs(25)).await;
        assert_eq!(old_ticks.load(Ordering::SeqCst), old_before);
        assert!(new_ticks.load(Ordering::SeqCst) >= 2);
        drop(active);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_fires_immediately() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counted = ticks.clone();
        let _poller = Poller::start(POLL_INTERVAL, move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }
}
