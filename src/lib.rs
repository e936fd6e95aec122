//! Indexed Priority Queue for Rust
//!
//! This crate provides a dual-mode (min/max) binary priority queue with an
//! internal position index, giving it efficient in-place key updates on top
//! of the usual constant-time peek and logarithmic insert/extract.
//!
//! # Features
//!
//! - **Dual mode**: smallest-first or largest-first ordering, chosen once
//!   at construction via [`Mode`]
//! - **Stable handles**: every insert returns an [`EntryId`] that survives
//!   heap reshaping and storage growth
//! - **O(log n) `update_key`**: a payload-identity → slot index locates any
//!   live entry without scanning
//! - **Explicit growth**: capacity multiplies by a configurable factor on
//!   demand, and exhaustion surfaces as [`QueueError::OutOfMemory`] instead
//!   of an abort
//! - **Recoverable errors**: empty-queue and stale-handle conditions are
//!   ordinary [`QueueError`] values, not panics
//!
//! # Example
//!
//! ```rust
//! use indexed_pqueue::{Mode, PQueue};
//!
//! let mut pq = PQueue::new(Mode::Min);
//! let slow = pq.insert(30, "retry job")?;
//! pq.insert(10, "heartbeat")?;
//!
//! // The retry became urgent: re-key it in place.
//! pq.update_key(slow, 5)?;
//! assert_eq!(pq.peek_top()?, (&5, &"retry job"));
//! # Ok::<(), indexed_pqueue::QueueError>(())
//! ```
//!
//! For a worked consumer of `update_key`, see the [`pathfinding`] module,
//! which implements Dijkstra's algorithm with re-keyed relaxation.

pub mod error;
pub mod pathfinding;
pub mod pqueue;

mod index;
mod store;

pub use error::QueueError;
pub use pqueue::{Iter, IterWithIds, Keys, PQueue};
pub use store::{EntryId, Mode, DEFAULT_CAPACITY, GROWTH_FACTOR};
