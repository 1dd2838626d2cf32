use std::collections::VecDeque;

use crate::grid::Cell;
use crate::heading::Heading;
use crate::snake::Segment;

/// A pending direction change: any segment arriving at `cell` adopts
/// `heading`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TurnRecord {
    pub cell: Cell,
    pub heading: Heading,
}

/// FIFO queue of pending turns.
///
/// Decouples "the player turned the head" from "each trailing segment turns
/// when it physically reaches the corner." Records are retired front-first,
/// and only once the tail has reached them, so every segment between head and
/// tail gets its chance to adopt the turn.
#[derive(Debug, Clone, Default)]
pub struct TurnQueue {
    records: VecDeque<TurnRecord>,
}

impl TurnQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn record. Called once per accepted head-heading change.
    pub fn record(&mut self, cell: Cell, heading: Heading) {
        self.records.push_back(TurnRecord { cell, heading });
    }

    /// Adopts a queued heading if `segment` sits on a turn cell.
    ///
    /// Every queued record is checked; with duplicate cells the last match in
    /// queue order wins. No-op on an empty queue.
    pub fn apply(&self, segment: &mut Segment) {
        for record in &self.records {
            if record.cell == segment.cell {
                segment.heading = record.heading;
            }
        }
    }

    /// Drops the oldest record once the tail has reached its cell.
    ///
    /// No-op when the queue is empty or the tail is elsewhere.
    pub fn retire_if_consumed_by_tail(&mut self, tail_cell: Cell) {
        if let Some(oldest) = self.records.front() {
            if oldest.cell == tail_cell {
                self.records.pop_front();
            }
        }
    }

    /// Returns the number of pending turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no turns are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
