// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use crate::{
    arena::NodeId,
    coin::Coin,
};

/// A single element record: the stored value plus one forward link per level
/// the node participates in.
///
/// The forward vector's length *is* the node's height; the two can never
/// disagree. `value` is `None` only for the list's head sentinel.
#[derive(Debug)]
pub(crate) struct Node<T> {
    value: Option<T>,
    forward: Vec<Option<NodeId>>,
}

impl<T> Node<T> {
    /// The valueless head sentinel, with `height` empty levels.
    pub(crate) fn head(height: usize) -> Self {
        Node {
            value: None,
            forward: vec![None; height],
        }
    }

    pub(crate) fn new(value: T, height: usize) -> Self {
        Node {
            value: Some(value),
            forward: vec![None; height],
        }
    }

    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn into_value(self) -> Option<T> {
        self.value
    }

    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }

    /// The forward link at `level`, or `None` when `level >= height()`.
    /// Out-of-range levels are an ordinary query outcome, not a caller bug.
    pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
        self.forward.get(level).copied().flatten()
    }

    /// Replaces the forward link at `level`.
    ///
    /// # Panics
    ///
    /// Panics when `level >= height()`.
    pub(crate) fn set_next(&mut self, level: usize, next: Option<NodeId>) {
        self.forward[level] = next;
    }

    /// Adds one empty level on top.
    pub(crate) fn grow(&mut self) {
        self.forward.push(None);
    }

    /// Adds one empty level on top with probability 1/2.
    pub(crate) fn maybe_grow(&mut self, coin: &mut impl Coin) {
        if coin.flip() {
            self.forward.push(None);
        }
    }

    /// Removes levels from the top until the height is `target`.
    ///
    /// # Panics
    ///
    /// Panics when `target` exceeds the current height.
    pub(crate) fn trim(&mut self, target: usize) {
        assert!(
            target <= self.forward.len(),
            "trim target {} above current height {}",
            target,
            self.forward.len()
        );
        self.forward.truncate(target);
    }
}
