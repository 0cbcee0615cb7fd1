//! Live-edge frontier with toggle (symmetric-difference) membership.
//!
//! Invariants
//! - `live` holds exactly the present edges, keyed by undirected identity,
//!   mapped to their insertion sequence number.
//! - `queue` holds directed edges in insertion order; entries whose sequence
//!   no longer matches `live` are stale and skipped.
//! - The queue head is always live (or the queue is empty).

use std::collections::{HashMap, VecDeque};

use crate::geom::Edge;

/// What a toggle did to the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The edge was absent and is now a boundary edge.
    Inserted,
    /// The edge was present (now shared by two triangles) and left the frontier.
    Removed,
}

/// Order-preserving edge set; amortized O(1) toggle and FIFO access.
#[derive(Clone, Debug, Default)]
pub struct Front {
    queue: VecDeque<(u64, Edge)>,
    live: HashMap<Edge, u64>,
    next_seq: u64,
}

impl Front {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `edge` if present (either direction), otherwise append it.
    pub fn toggle(&mut self, edge: Edge) -> Toggle {
        if self.live.remove(&edge).is_some() {
            self.drop_stale_head();
            Toggle::Removed
        } else {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.live.insert(edge, seq);
            self.queue.push_back((seq, edge));
            Toggle::Inserted
        }
    }

    /// Earliest-inserted edge still present, in its inserted direction.
    #[inline]
    pub fn first(&self) -> Option<Edge> {
        self.queue.front().map(|&(_, e)| e)
    }

    /// Remove and return the earliest-inserted edge.
    pub fn discard_first(&mut self) -> Option<Edge> {
        let (_, edge) = self.queue.pop_front()?;
        self.live.remove(&edge);
        self.drop_stale_head();
        Some(edge)
    }

    #[inline]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.live.contains_key(edge)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live edges in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.queue
            .iter()
            .filter(|(seq, e)| self.live.get(e) == Some(seq))
            .map(|&(_, e)| e)
    }

    fn drop_stale_head(&mut self) {
        while let Some(&(seq, edge)) = self.queue.front() {
            if self.live.get(&edge) == Some(&seq) {
                break;
            }
            self.queue.pop_front();
        }
        if self.live.is_empty() {
            self.queue.clear();
        }
    }
}
