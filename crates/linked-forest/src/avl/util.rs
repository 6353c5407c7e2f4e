//! Structural algorithms for the AVL tree.
//!
//! Every mutating function here follows the same shape: take ownership of
//! a subtree, mutate or rebuild it, return the replacement root for the
//! caller to reattach. Rotation decisions are therefore purely local and
//! no parent pointers are needed.

use crate::error::TreeError;
use crate::node::Node;
use crate::walk;

pub type Link<T> = Option<Box<Node<T>>>;

/// Insert `element`, rebalancing on the unwind.
///
/// Strictly-less descends left; everything else, equal elements
/// included, descends right. After the recursive insert returns, the
/// node's balance factor is inspected and a rotation runs when it
/// reaches ±2; the single/double choice is driven by the sign of the
/// immediate child's balance factor only.
pub fn insert<T, C>(node: Link<T>, element: T, comparator: &C) -> Box<Node<T>>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(mut node) = node else {
        return Node::leaf(element);
    };

    if comparator(&element, &node.element) < 0 {
        node.left = Some(insert(node.left.take(), element, comparator));
        if node.balance_factor() == -2 {
            // Left subtree too tall.
            let left_bf = node.left.as_deref().map_or(0, Node::balance_factor);
            node = if left_bf < 0 {
                rotate_right(node)
            } else {
                rotate_left_right(node)
            };
        }
    } else {
        node.right = Some(insert(node.right.take(), element, comparator));
        if node.balance_factor() == 2 {
            // Right subtree too tall.
            let right_bf = node.right.as_deref().map_or(0, Node::balance_factor);
            node = if right_bf > 0 {
                rotate_left(node)
            } else {
                rotate_right_left(node)
            };
        }
    }

    node.update_height();
    node
}

/// Rotate the left child up to become the subtree root.
///
/// Precondition: the left subtree is exactly two levels taller than its
/// sibling. Heights are recomputed displaced-root first, since the new
/// root's height depends on it.
pub fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("left child exists");
    old_root.left = new_root.right.take();
    old_root.update_height();
    new_root.right = Some(old_root);
    new_root.update_height();
    new_root
}

/// Rotate the right child up to become the subtree root.
pub fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("right child exists");
    old_root.right = new_root.left.take();
    old_root.update_height();
    new_root.left = Some(old_root);
    new_root.update_height();
    new_root
}

/// Rotate the left subtree left, then the whole subtree right.
///
/// Used when the left subtree is too tall but its right side dominates.
pub fn rotate_left_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let left = old_root.left.take().expect("left child exists");
    old_root.left = Some(rotate_left(left));
    rotate_right(old_root)
}

/// Rotate the right subtree right, then the whole subtree left.
pub fn rotate_right_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let right = old_root.right.take().expect("right child exists");
    old_root.right = Some(rotate_right(right));
    rotate_left(old_root)
}

/// Order-guided search.
///
/// Equality stops the descent; otherwise "≤ goes left", the mirror of
/// insertion routing equal elements right. O(log n) on a balanced tree.
pub fn find<'a, T, C>(mut node: Option<&'a Node<T>>, target: &T, comparator: &C) -> Option<&'a T>
where
    C: Fn(&T, &T) -> i32,
{
    while let Some(n) = node {
        let cmp = comparator(target, &n.element);
        if cmp == 0 {
            return Some(&n.element);
        }
        node = if cmp < 0 {
            n.left.as_deref()
        } else {
            n.right.as_deref()
        };
    }
    None
}

/// Remove the first node matching `target` and return the new subtree
/// root. An absent target leaves the subtree unchanged; the container
/// checks presence up front and reports [`TreeError::NotFound`] itself.
///
/// Deletion performs no height maintenance and no rotation: the tree
/// stays ordered, but cached heights go stale and the balance guarantee
/// only covers the insertion path. See the module docs of [`crate::avl`].
pub fn remove<T, C>(node: Link<T>, target: &T, comparator: &C) -> Link<T>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(mut node) = node else {
        return None;
    };

    let cmp = comparator(target, &node.element);
    if cmp == 0 {
        splice(node)
    } else if cmp < 0 {
        node.left = remove(node.left.take(), target, comparator);
        Some(node)
    } else {
        node.right = remove(node.right.take(), target, comparator);
        Some(node)
    }
}

/// Detach the subtree root and return its replacement.
///
/// The three-case rule: no left child promotes the right subtree, no
/// right child promotes the left subtree, and with both children present
/// the in-order successor (leftmost node of the right subtree) is
/// unlinked and spliced in place of the removed node. When the right
/// child itself has no left child it is the successor and becomes the
/// splice point directly.
fn splice<T>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(mut right)) => {
            if right.left.is_none() {
                right.left = Some(left);
                Some(right)
            } else {
                let mut successor = take_leftmost(&mut right);
                successor.left = Some(left);
                successor.right = Some(right);
                Some(successor)
            }
        }
    }
}

/// Unlink and return the leftmost node below `parent`.
///
/// Precondition: `parent` has a left child.
fn take_leftmost<T>(mut parent: &mut Node<T>) -> Box<Node<T>> {
    while parent
        .left
        .as_deref()
        .expect("left child exists")
        .left
        .is_some()
    {
        parent = parent.left.as_deref_mut().expect("left child exists");
    }
    let mut leftmost = parent.left.take().expect("left child exists");
    parent.left = leftmost.right.take();
    leftmost
}

/// Unlink and return the rightmost node below `parent`.
///
/// Precondition: `parent` has a right child.
fn take_rightmost<T>(mut parent: &mut Node<T>) -> Box<Node<T>> {
    while parent
        .right
        .as_deref()
        .expect("right child exists")
        .right
        .is_some()
    {
        parent = parent.right.as_deref_mut().expect("right child exists");
    }
    let mut rightmost = parent.right.take().expect("right child exists");
    parent.right = rightmost.left.take();
    rightmost
}

/// Smallest element: leftmost descent.
pub fn find_min<T>(root: Option<&Node<T>>) -> Result<&T, TreeError> {
    let mut node = root.ok_or(TreeError::Empty)?;
    while let Some(l) = node.left.as_deref() {
        node = l;
    }
    Ok(&node.element)
}

/// Largest element: rightmost descent.
pub fn find_max<T>(root: Option<&Node<T>>) -> Result<&T, TreeError> {
    let mut node = root.ok_or(TreeError::Empty)?;
    while let Some(r) = node.right.as_deref() {
        node = r;
    }
    Ok(&node.element)
}

/// Unlink the smallest node, returning the new root and its element.
///
/// Like [`remove`], no rebalancing runs afterwards.
pub fn remove_min<T>(root: Link<T>) -> Result<(Link<T>, T), TreeError> {
    let Some(mut root) = root else {
        return Err(TreeError::Empty);
    };
    if root.left.is_none() {
        let right = root.right.take();
        return Ok((right, root.element));
    }
    let leftmost = take_leftmost(&mut root);
    Ok((Some(root), leftmost.element))
}

/// Unlink the largest node, returning the new root and its element.
pub fn remove_max<T>(root: Link<T>) -> Result<(Link<T>, T), TreeError> {
    let Some(mut root) = root else {
        return Err(TreeError::Empty);
    };
    if root.right.is_none() {
        let left = root.left.take();
        return Ok((left, root.element));
    }
    let rightmost = take_rightmost(&mut root);
    Ok((Some(root), rightmost.element))
}

/// Verify the BST order invariant: an in-order walk yields elements in
/// non-decreasing comparator order.
pub fn assert_ordered<T, C>(root: Option<&Node<T>>, comparator: &C) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    let mut elements = Vec::new();
    walk::in_order(root, &mut |e| elements.push(e));
    for pair in elements.windows(2) {
        if comparator(pair[0], pair[1]) > 0 {
            return Err("Node order violated".to_string());
        }
    }
    Ok(())
}

fn check_heights_and_balance<T>(node: Option<&Node<T>>) -> Result<i32, String> {
    let Some(n) = node else {
        return Ok(-1);
    };

    let lh = check_heights_and_balance(n.left.as_deref())?;
    let rh = check_heights_and_balance(n.right.as_deref())?;

    let expected = lh.max(rh) + 1;
    if n.height != expected {
        return Err(format!(
            "Height mismatch: expected {expected}, got {}",
            n.height
        ));
    }
    let bf = rh - lh;
    if !(-1..=1).contains(&bf) {
        return Err("AVL balance violated".to_string());
    }
    Ok(expected)
}

/// Verify the full post-insert guarantees: BST order, height-cache
/// correctness, and the AVL balance bound at every node.
///
/// Heights and balance are recomputed from scratch rather than trusted
/// from the cache. Not applicable after removals, which leave the height
/// cache stale; use [`assert_ordered`] there.
pub fn assert_avl_tree<T, C>(root: Option<&Node<T>>, comparator: &C) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    assert_ordered(root, comparator)?;
    check_heights_and_balance(root)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &i32, b: &i32) -> i32 {
        a - b
    }

    fn build(elements: &[i32]) -> Link<i32> {
        let mut root = None;
        for &e in elements {
            root = Some(insert(root, e, &cmp));
        }
        root
    }

    #[test]
    fn single_right_rotation_shape() {
        let root = build(&[30, 20, 10]).unwrap();
        assert_eq!(root.element, 20);
        assert_eq!(root.left.as_ref().unwrap().element, 10);
        assert_eq!(root.right.as_ref().unwrap().element, 30);
        assert_eq!(root.height, 1);
    }

    #[test]
    fn single_left_rotation_shape() {
        let root = build(&[10, 20, 30]).unwrap();
        assert_eq!(root.element, 20);
        assert_eq!(root.left.as_ref().unwrap().element, 10);
        assert_eq!(root.right.as_ref().unwrap().element, 30);
        assert_eq!(root.height, 1);
    }

    #[test]
    fn double_left_right_rotation_shape() {
        let root = build(&[30, 10, 20]).unwrap();
        assert_eq!(root.element, 20);
        assert_eq!(root.left.as_ref().unwrap().element, 10);
        assert_eq!(root.right.as_ref().unwrap().element, 30);
        assert_eq!(root.height, 1);
    }

    #[test]
    fn double_right_left_rotation_shape() {
        let root = build(&[10, 30, 20]).unwrap();
        assert_eq!(root.element, 20);
        assert_eq!(root.left.as_ref().unwrap().element, 10);
        assert_eq!(root.right.as_ref().unwrap().element, 30);
        assert_eq!(root.height, 1);
    }

    #[test]
    fn rotations_recompute_heights() {
        let root = build(&[50, 30, 70, 20, 40, 10]).unwrap();
        assert_avl_tree(Some(&root), &cmp).unwrap();
    }

    #[test]
    fn splice_promotes_successor() {
        // 30 has both children; 35 is its in-order successor.
        let root = build(&[20, 10, 30, 25, 35]);
        let root = remove(root, &30, &cmp).unwrap();
        let mut seq = Vec::new();
        walk::in_order(Some(&root), &mut |e| seq.push(*e));
        assert_eq!(seq, vec![10, 20, 25, 35]);
        assert!(find(Some(&root), &30, &cmp).is_none());
    }

    fn n(element: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        let mut node = Node::new(element);
        node.left = left;
        node.right = right;
        node.update_height();
        Some(Box::new(node))
    }

    #[test]
    fn splice_with_deep_successor() {
        // The successor (55) sits two levels into the right subtree, so it
        // must be unlinked from under 60 before replacing 50.
        let leaf = |e| n(e, None, None);
        let root = n(
            50,
            n(30, leaf(20), leaf(40)),
            n(80, n(60, leaf(55), leaf(70)), leaf(90)),
        );
        let root = remove(root, &50, &cmp).unwrap();
        assert_eq!(root.element, 55);
        let sixty = root
            .right
            .as_ref()
            .and_then(|r| r.left.as_ref())
            .unwrap();
        assert_eq!(sixty.element, 60);
        assert!(sixty.left.is_none());
        let mut seq = Vec::new();
        walk::in_order(Some(&root), &mut |e| seq.push(*e));
        assert_eq!(seq, vec![20, 30, 40, 55, 60, 70, 80, 90]);
        assert_ordered(Some(&root), &cmp).unwrap();
    }

    #[test]
    fn remove_min_and_max_unlink_the_ends() {
        let root = build(&[20, 10, 30, 5, 15]);
        let (root, min) = remove_min(root).unwrap();
        assert_eq!(min, 5);
        let (root, max) = remove_max(root).unwrap();
        assert_eq!(max, 30);
        let mut seq = Vec::new();
        walk::in_order(root.as_deref(), &mut |e| seq.push(*e));
        assert_eq!(seq, vec![10, 15, 20]);
    }
}
