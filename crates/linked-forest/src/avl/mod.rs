//! AVL-balanced binary search tree.
//!
//! [`AvlTree`] keeps the AVL invariant `|height(right) - height(left)| ≤ 1`
//! at every node across insertions, so search, insert and delete stay
//! O(log n). Equal elements route to the right subtree on insert, and the
//! order-guided search descends left on "≤"; the two rules are a matched
//! pair and duplicate-element behavior depends on both.
//!
//! Deletion splices nodes with the three-case removal rule but performs
//! **no** height maintenance and **no** rotation afterwards. The tree
//! stays ordered and every lookup stays correct, but cached heights go
//! stale and the balance bound is only guaranteed until the first
//! removal. Callers that need strict balance under deletion must add the
//! rebalancing unwind themselves; [`AvlTree::assert_ordered`] is the
//! validation that still applies after removals, while
//! [`AvlTree::assert_valid`] checks the full post-insert guarantees.

pub mod util;

use std::fmt;

use crate::error::TreeError;
use crate::node::{height, Node};
use crate::walk;

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

fn orderable<T: PartialOrd>(v: &T) -> bool {
    v.partial_cmp(v).is_some()
}

/// Self-balancing binary search tree with comparator-defined ordering.
///
/// The comparator must be a strict total order over every element the
/// tree will hold. The default comparator covers `PartialOrd` types and
/// rejects values that are not self-comparable (`f64` NaN and friends)
/// with [`TreeError::NonComparable`] at the insert boundary.
///
/// # Examples
///
/// ```
/// use linked_forest::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for e in [30, 20, 10] {
///     tree.insert(e).unwrap();
/// }
/// // The descending run forced a single right rotation.
/// assert_eq!(tree.root_element(), Ok(&20));
/// assert_eq!(tree.height(), 1);
/// assert!(tree.contains(&30));
/// ```
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: util::Link<T>,
    size: usize,
    comparator: C,
    orderable: fn(&T) -> bool,
}

impl<T> AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    /// Empty tree ordered by the natural `PartialOrd` order.
    pub fn new() -> Self {
        Self::with_parts(default_comparator::<T>, orderable::<T>)
    }

    /// Tree seeded with a single root element.
    ///
    /// Comparability is checked up front, so a non-orderable element
    /// fails here rather than on the first mutation.
    pub fn with_root(element: T) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        tree.insert(element)?;
        Ok(tree)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    /// Empty tree ordered by a caller-supplied total-order comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_parts(comparator, |_| true)
    }

    fn with_parts(comparator: C, orderable: fn(&T) -> bool) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            orderable,
        }
    }

    /// Insert `element` at its ordered position, rebalancing as needed.
    ///
    /// Equal elements are added to the right. Fails with
    /// [`TreeError::NonComparable`] before any mutation when the element
    /// cannot be ordered.
    pub fn insert(&mut self, element: T) -> Result<(), TreeError> {
        if !(self.orderable)(&element) {
            return Err(TreeError::NonComparable);
        }
        self.root = Some(util::insert(self.root.take(), element, &self.comparator));
        self.size += 1;
        Ok(())
    }

    /// Remove the first element matching `target`.
    ///
    /// Fails with [`TreeError::NotFound`] when absent, leaving the tree
    /// untouched. See the module docs for the no-rebalance deletion
    /// design.
    pub fn remove(&mut self, target: &T) -> Result<(), TreeError> {
        if !self.contains(target) {
            return Err(TreeError::NotFound);
        }
        self.root = util::remove(self.root.take(), target, &self.comparator);
        self.size -= 1;
        Ok(())
    }

    /// Remove every element matching `target`.
    ///
    /// Never fails: the terminal not-found condition stops the loop, and
    /// an absent target is a no-op.
    pub fn remove_all(&mut self, target: &T) {
        while self.remove(target).is_ok() {}
    }

    /// Order-guided lookup; `None` when absent.
    pub fn find(&self, target: &T) -> Option<&T> {
        util::find(self.root.as_deref(), target, &self.comparator)
    }

    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    pub fn find_min(&self) -> Result<&T, TreeError> {
        util::find_min(self.root.as_deref())
    }

    pub fn find_max(&self) -> Result<&T, TreeError> {
        util::find_max(self.root.as_deref())
    }

    /// Remove and return the smallest element.
    pub fn remove_min(&mut self) -> Result<T, TreeError> {
        let (root, element) = util::remove_min(self.root.take())?;
        self.root = root;
        self.size -= 1;
        Ok(element)
    }

    /// Remove and return the largest element.
    pub fn remove_max(&mut self) -> Result<T, TreeError> {
        let (root, element) = util::remove_max(self.root.take())?;
        self.root = root;
        self.size -= 1;
        Ok(element)
    }

    /// Element at the root; [`TreeError::Empty`] on an empty tree.
    pub fn root_element(&self) -> Result<&T, TreeError> {
        self.root
            .as_deref()
            .map(|n| &n.element)
            .ok_or(TreeError::Empty)
    }

    /// Root node, for structural inspection.
    pub fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Tree height: -1 when empty, 0 for a single node.
    ///
    /// Reads the cached root height, which removals leave stale.
    pub fn height(&self) -> i32 {
        height(self.root.as_deref())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// In-order visitor.
    pub fn for_each<F: FnMut(&T)>(&self, mut f: F) {
        walk::in_order(self.root.as_deref(), &mut f);
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        walk::in_order(self.root.as_deref(), &mut |e| out.push(e));
        out
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        walk::pre_order(self.root.as_deref(), &mut |e| out.push(e));
        out
    }

    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        walk::post_order(self.root.as_deref(), &mut |e| out.push(e));
        out
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size);
        walk::level_order(self.root.as_deref(), &mut |e| out.push(e));
        out
    }

    /// Check BST order, height-cache correctness, AVL balance, and the
    /// size counter. Valid after any insert sequence; removals invalidate
    /// the height cache, use [`Self::assert_ordered`] there.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(self.root.as_deref(), &self.comparator)?;
        let counted = walk::count(self.root.as_deref());
        if counted != self.size {
            return Err(format!(
                "Size mismatch: expected {}, counted {counted}",
                self.size
            ));
        }
        Ok(())
    }

    /// Check BST order only; holds after removals too.
    pub fn assert_ordered(&self) -> Result<(), String> {
        util::assert_ordered(self.root.as_deref(), &self.comparator)
    }
}

impl<T, C> fmt::Display for AvlTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&walk::render(self.root.as_deref()))
    }
}
