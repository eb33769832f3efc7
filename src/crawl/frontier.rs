// src/crawl/frontier.rs
// =============================================================================
// This module implements the shared URL frontier.
//
// How it works:
// 1. add() accepts a URL once per crawl (a seen-set rejects repeats) and
//    queues it as pending
// 2. next_url() hands out pending URLs first-in-first-out and counts the
//    URL as in-flight until mark_complete() returns it
// 3. The crawl is drained only when the queue is empty AND nothing is
//    in-flight - an in-flight page may still discover new links, so a
//    momentarily empty queue is not the end
//
// A worker that finds the queue empty while pages are in-flight waits on
// a Notify; both add() and the last mark_complete() wake the waiters. The
// drained decision is made under one lock, so every worker observes the
// same terminal state and next_url() returns None to all of them.
//
// Rust concepts:
// - HashSet: To reject URLs we have already accepted (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first ordering
// - tokio::sync::Notify: Lets async tasks sleep until there is work
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use tokio::sync::Notify;

// Queue state behind the lock
#[derive(Debug, Default)]
struct FrontierState {
    pending: VecDeque<String>,
    seen: HashSet<String>,
    in_flight: usize,
}

// The shared frontier, handed to every worker inside an Arc
#[derive(Default)]
pub struct Frontier {
    state: Mutex<FrontierState>,
    notify: Notify,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Offers a URL to the frontier
    //
    // Returns: true if the URL was new and is now pending, false if it
    // was already accepted earlier in the crawl (duplicates are the
    // frontier's responsibility, so callers just offer everything)
    pub fn add(&self, url: &str) -> bool {
        let mut state = self.state.lock().expect("frontier lock poisoned");
        if !state.seen.insert(url.to_string()) {
            return false;
        }
        state.pending.push_back(url.to_string());
        drop(state);
        // Wake any worker waiting for work
        self.notify.notify_waiters();
        true
    }

    // Hands out the next URL to crawl
    //
    // Returns: Some(url) while there is (or will be) work, None once the
    // crawl is drained. May wait: if the queue is empty but other workers
    // still have pages in-flight, those pages may add new links.
    pub async fn next_url(&self) -> Option<String> {
        loop {
            // Register for wakeups BEFORE checking state, so a notify
            // that fires between the check and the await is not lost
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.state.lock().expect("frontier lock poisoned");
                if let Some(url) = state.pending.pop_front() {
                    state.in_flight += 1;
                    return Some(url);
                }
                if state.in_flight == 0 {
                    // Drained: nothing pending, nothing that could still
                    // produce links. Wake the other sleepers so they can
                    // observe the same state and stop too.
                    drop(state);
                    self.notify.notify_waiters();
                    return None;
                }
            }

            notified.await;
        }
    }

    // Returns a handed-out URL, completing its lifecycle
    //
    // The URL itself is not re-queued (seen-set already holds it); this
    // just ends its in-flight accounting
    pub fn mark_complete(&self, url: &str) {
        let mut state = self.state.lock().expect("frontier lock poisoned");
        state.in_flight = state.in_flight.saturating_sub(1);
        let drained = state.in_flight == 0 && state.pending.is_empty();
        drop(state);
        log::debug!("completed {}", url);
        if drained {
            self.notify.notify_waiters();
        }
    }
}
