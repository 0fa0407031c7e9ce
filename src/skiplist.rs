// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use tracing::{
    debug,
    instrument,
    trace,
};

use crate::{
    arena::{
        Arena,
        NodeId,
    },
    coin::{
        Coin,
        FairCoin,
    },
    skipnode::Node,
};

/// `ceil(log2(n))` without going through floating point; 0 for `n <= 1`.
fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// An ordered collection with logarithmic expected-time search, insertion,
/// and deletion.
///
/// The list's level count is managed lazily: the head sentinel gains a level
/// whenever the element count crosses the next power-of-two boundary (with
/// existing nodes promoted by coin flip), and levels are stripped again when
/// deletions drop the count back below the boundary that justified them. The
/// level count therefore tracks `ceil(log2(size))`.
///
/// Duplicate elements are allowed. Among equal elements, [`get`] and
/// [`remove`] always pick the occurrence nearest the head on level 0, and
/// [`remove`] unlinks exactly one physical node per call.
///
/// [`get`]: SkipList::get
/// [`remove`]: SkipList::remove
pub struct SkipList<T, C = FairCoin> {
    arena: Arena<Node<T>>,
    head: NodeId,
    len: usize,
    coin: C,
}

impl<T: Ord> SkipList<T> {
    /// An empty list with no levels.
    pub fn new() -> Self {
        Self::with_coin(FairCoin::new())
    }

    /// An empty list whose head sentinel starts with `height` levels.
    pub fn with_height(height: usize) -> Self {
        Self::with_height_and_coin(height, FairCoin::new())
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, C: Coin> SkipList<T, C> {
    /// An empty list drawing its randomness from `coin`.
    pub fn with_coin(coin: C) -> Self {
        Self::with_height_and_coin(0, coin)
    }

    /// An empty list with `height` initial levels, drawing from `coin`.
    pub fn with_height_and_coin(height: usize, coin: C) -> Self {
        let mut arena = Arena::new();
        let head = arena.alloc(Node::head(height));
        SkipList {
            arena,
            head,
            len: 0,
            coin,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The list's current level count, i.e. the head sentinel's height.
    pub fn height(&self) -> usize {
        self.arena[self.head].height()
    }

    /// Inserts `value`, drawing the new node's height from the coin.
    ///
    /// An equal element is inserted immediately before the first existing
    /// occurrence met during descent.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) {
        self.grow_if_needed();
        let cap = self.max_height(self.len);
        let height = self.random_height(cap);
        self.splice(value, height);
    }

    /// Inserts `value` with a caller-chosen height instead of a drawn one.
    ///
    /// Levels at or above the list's current level count are left unlinked;
    /// they only become reachable once the list grows tall enough to thread
    /// them. A height of zero produces an element that is counted but never
    /// linked, so it can never be found or removed again.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert_with_height(&mut self, value: T, height: usize) {
        self.grow_if_needed();
        self.splice(value, height);
    }

    /// Removes one occurrence of `value` and returns it, or `None` if the
    /// list holds no equal element. With duplicates present, the occurrence
    /// nearest the head on level 0 is the one removed.
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let update = self.predecessors(value);
        let victim = update.first().and_then(|&pred| self.arena[pred].next(0))?;
        if self.arena[victim].value() != Some(value) {
            return None;
        }

        // unlink at every level whose predecessor still points at the victim
        for (i, &pred) in update.iter().enumerate() {
            if self.arena[pred].next(i) == Some(victim) {
                let after = self.arena[victim].next(i);
                self.arena[pred].set_next(i, after);
            }
        }

        self.len -= 1;
        self.arena[victim].trim(0);
        let node = self.arena.free(victim);
        debug_assert_eq!(self.arena.len(), self.len + 1);

        if ceil_log2(self.len) < self.height() {
            self.trim_list();
        }
        trace!(len = self.len, "removed node");
        node.into_value()
    }

    /// Whether the list holds an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// A reference to the stored element equal to `value` nearest the head
    /// on level 0, or `None` if there is none.
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut cur = self.head;
        for i in (0..self.height()).rev() {
            while let Some(next) = self.arena[cur].next(i) {
                if self.less_than(next, value) {
                    cur = next;
                } else {
                    break;
                }
            }
        }
        self.arena[cur]
            .next(0)
            .map(|id| &self.arena[id])
            .and_then(Node::value)
            .filter(|&found| found == value)
    }

    /// In-order iterator over the elements (the level-0 chain).
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            list: self,
            next: self.arena[self.head].next(0),
        }
    }

    /// True when `id`'s stored value is strictly less than `target`. The
    /// head sentinel stores no value and never compares less.
    fn less_than(&self, id: NodeId, target: &T) -> bool {
        match self.arena[id].value() {
            | Some(v) => v < target,
            | None => false,
        }
    }

    /// Shared descent: the predecessor of `value` at every level, found by
    /// dropping a level whenever the next node is absent or not less than
    /// `value`. `out[i]` is the last node strictly below `value` on level
    /// `i`, so `out[0]`'s successor is the first occurrence of `value` when
    /// one exists.
    fn predecessors(&self, value: &T) -> Vec<NodeId> {
        let levels = self.height();
        let mut update = vec![self.head; levels];
        let mut cur = self.head;
        for i in (0..levels).rev() {
            while let Some(next) = self.arena[cur].next(i) {
                if self.less_than(next, value) {
                    cur = next;
                } else {
                    break;
                }
            }
            update[i] = cur;
        }
        update
    }

    /// Allocates a node of `height` for `value` and threads it in at every
    /// level below both its height and the list's level count.
    fn splice(&mut self, value: T, height: usize) {
        let update = self.predecessors(&value);
        let new = self.arena.alloc(Node::new(value, height));
        for (i, &pred) in update.iter().enumerate().take(height) {
            let after = self.arena[pred].next(i);
            self.arena[new].set_next(i, after);
            self.arena[pred].set_next(i, Some(new));
        }
        self.len += 1;
        trace!(len = self.len, height, "inserted node");
    }

    fn grow_if_needed(&mut self) {
        if ceil_log2(self.len + 1) > self.height() || self.height() == 0 {
            self.grow_list();
        }
    }

    /// Adds one empty level on top of the head, then threads it: every node
    /// on the previous top level flips for promotion, and each node whose
    /// height reaches the new level count is linked behind a cursor that
    /// starts at the head.
    fn grow_list(&mut self) {
        self.arena[self.head].grow();
        let new_height = self.height();
        debug!(new_height, "growing skip list");
        if new_height < 2 {
            return;
        }

        let old_top = new_height - 2;
        let mut last_linked = self.head;
        let mut cur = self.arena[last_linked].next(old_top);
        while let Some(id) = cur {
            self.arena[id].maybe_grow(&mut self.coin);
            if self.arena[id].height() == new_height {
                self.arena[last_linked].set_next(new_height - 1, Some(id));
                last_linked = id;
            }
            cur = self.arena[id].next(old_top);
        }
    }

    /// Strips every level above the height the current size justifies:
    /// `ceil(log2(len))`, or `len` itself for zero and one element (the
    /// logarithm degenerates there). Each stripped level is dismantled node
    /// by node so no node keeps a forward slot above its own height.
    fn trim_list(&mut self) {
        let target = if self.len <= 1 {
            self.len
        } else {
            ceil_log2(self.len)
        };
        debug!(target, "trimming skip list");

        let mut level = self.height();
        while level > target {
            let i = level - 1;
            let mut next = self.arena[self.head].next(i);
            while let Some(id) = next {
                let after = self.arena[id].next(i);
                self.arena[self.head].set_next(i, after);
                self.arena[id].trim(i);
                next = after;
            }
            level -= 1;
        }
        self.arena[self.head].trim(target);
    }

    /// Cap for drawn heights: `max(ceil(log2(n)), level count)`.
    fn max_height(&self, n: usize) -> usize {
        ceil_log2(n).max(self.height())
    }

    /// Geometric(1/2) height draw, truncated at `max`: start at one level
    /// and keep growing until the coin lands tails.
    fn random_height(&mut self, max: usize) -> usize {
        let mut height = 1;
        while height < max && self.coin.flip() {
            height += 1;
        }
        height
    }
}

impl<'a, T: Ord, C: Coin> IntoIterator for &'a SkipList<T, C> {
    type IntoIter = Iter<'a, T, C>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order borrowed iterator returned by [`SkipList::iter`].
pub struct Iter<'a, T, C = FairCoin> {
    list: &'a SkipList<T, C>,
    next: Option<NodeId>,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.list.arena[id];
        self.next = node.next(0);
        node.value()
    }
}
