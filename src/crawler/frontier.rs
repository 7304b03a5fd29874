//! Frontier state shared by the crawl workers
//!
//! The frontier owns the visited-set, the pending queue, and the in-flight
//! count. It is the only mutable state shared between workers; callers wrap
//! it in a mutex and every admission is a single check-and-insert under that
//! lock, which is what prevents two workers from both fetching a URL they
//! discovered at the same time.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// A page queued for fetching
#[derive(Debug, Clone)]
pub struct QueuedPage {
    /// The absolute URL to fetch
    pub url: Url,

    /// Hop count from the seed along the discovery path that first reached
    /// this URL. Informational only; no decision depends on it.
    pub depth: u32,

    /// Position of this page in visit order, 1-based
    pub ordinal: usize,
}

/// Outcome of offering a URL to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The URL was reserved and queued for fetching
    Admitted,

    /// The URL has already been dispatched in this run
    AlreadyVisited,

    /// The page ceiling is reached; nothing further will be admitted
    CeilingReached,
}

/// The crawl frontier: visited-set, pending queue, and in-flight count
///
/// Invariant: a URL enters `visited` at most once, and it enters when it is
/// admitted, before its fetch begins. The queue therefore never holds
/// duplicates and `visited.len()` counts every fetch ever dispatched.
pub struct Frontier {
    visited: HashSet<String>,
    queue: VecDeque<QueuedPage>,
    in_flight: usize,
    max_pages: usize,
}

impl Frontier {
    /// Creates an empty frontier with the given page ceiling
    pub fn new(max_pages: usize) -> Self {
        Self {
            visited: HashSet::new(),
            queue: VecDeque::new(),
            in_flight: 0,
            max_pages,
        }
    }

    /// Offers a URL for visitation
    ///
    /// Deduplication and the ceiling check happen here, atomically with the
    /// reservation. Already-visited URLs are reported before the ceiling is
    /// consulted, so re-discovering an old link near the ceiling does not
    /// read as "ceiling reached" to the caller.
    pub fn admit(&mut self, url: Url, depth: u32) -> Admission {
        if self.visited.contains(url.as_str()) {
            return Admission::AlreadyVisited;
        }

        if self.visited.len() >= self.max_pages {
            return Admission::CeilingReached;
        }

        self.visited.insert(url.as_str().to_string());
        let ordinal = self.visited.len();
        self.queue.push_back(QueuedPage {
            url,
            depth,
            ordinal,
        });

        Admission::Admitted
    }

    /// Takes the next queued page, marking it in flight
    pub fn next(&mut self) -> Option<QueuedPage> {
        let page = self.queue.pop_front();
        if page.is_some() {
            self.in_flight += 1;
        }
        page
    }

    /// Marks one in-flight page as finished
    pub fn complete(&mut self) {
        debug_assert!(self.in_flight > 0);
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// True when no queued or in-flight work remains
    ///
    /// An in-flight fetch can still discover links and refill the queue, so
    /// workers must keep polling until both are drained.
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty() && self.in_flight == 0
    }

    /// Number of URLs ever dispatched for fetching
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// The page ceiling for this run
    pub fn ceiling(&self) -> usize {
        self.max_pages
    }
}
