//! Priority queue for the augmenting-path search.
//!
//! ## Components
//!
//! - [`PriorityEntry`]: one node's tentative distance plus predecessor link
//! - [`EntryQueue`]: indexed binary min-heap with decrease-key
//!
//! A fresh `EntryQueue` is built for every search and dropped afterwards.
//!
//! ## Example
//!
//! ```
//! use bipartite_match::queue::{EntryQueue, PriorityEntry};
//!
//! let mut queue = EntryQueue::with_capacity(4);
//! let source = queue.push(PriorityEntry::source(0)).unwrap();
//! queue.push(PriorityEntry::unreached(2)).unwrap();
//!
//! queue.pop_min();
//! queue.relax(2, 3.5, source).unwrap();
//!
//! let key = queue.pop_min().unwrap();
//! assert_eq!(queue.path_to(key).unwrap(), vec![2, 0]);
//! ```

pub mod entry;
pub mod heap;

pub use entry::PriorityEntry;
pub use heap::EntryQueue;
