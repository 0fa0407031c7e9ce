//! A [`skip list`]: a probabilistically balanced, ordered collection with
//! logarithmic expected-time search, insertion, and deletion, and no
//! explicit rebalancing.
//!
//! The lowest level (level 0) threads every element in order, and each level
//! `n > 0` threads a random subset of the nodes on level `n - 1`. Unlike a
//! fixed-height skip list, the level count here is managed lazily: the list
//! gains a level (promoting existing nodes by coin flip) whenever the
//! element count crosses the next power-of-two boundary, and strips levels
//! again when deletions drop it back, so the level count tracks
//! `ceil(log2(size))`.
//!
//! Nodes live in an index-addressed arena with a free list; forward links
//! are stable indices rather than aliasable pointers. All randomness flows
//! through the injectable [`Coin`] trait, so a seeded coin reproduces the
//! exact same structure.
//!
//! The list is single-threaded; callers sharing one across threads must
//! serialize access themselves.
//!
//! # Example
//!
//! ```
//! use adaptive_skiplist::SkipList;
//!
//! let mut list = SkipList::new();
//! list.insert(3);
//! list.insert(1);
//! list.insert(2);
//!
//! assert!(list.contains(&2));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(list.remove(&2), Some(2));
//! assert!(!list.contains(&2));
//! ```
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list
//! [`Coin`]: crate::coin::Coin

/// Injectable fair-coin randomness for height generation and promotion.
pub mod coin;
/// The skip list itself.
pub mod skiplist;

mod arena;
mod skipnode;

pub use crate::{
    coin::{
        Coin,
        FairCoin,
    },
    skiplist::{
        Iter,
        SkipList,
    },
};
