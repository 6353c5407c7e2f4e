//! Read-only walks over linked binary trees.
//!
//! Everything here works on `Option<&Node<T>>` and never touches the
//! structure, so it applies equally to ordered and unordered trees.
//! The one search in this module, [`find_any`], is the brute-force
//! both-subtrees variant for trees with no order invariant; the
//! order-guided O(log n) search lives in [`crate::avl::util`].

use std::collections::VecDeque;
use std::fmt;

use crate::node::Node;

/// In-order traversal: left subtree, node, right subtree.
pub fn in_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(n) = node {
        in_order(n.left.as_deref(), visit);
        visit(&n.element);
        in_order(n.right.as_deref(), visit);
    }
}

/// Pre-order traversal: node, left subtree, right subtree.
pub fn pre_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(n) = node {
        visit(&n.element);
        pre_order(n.left.as_deref(), visit);
        pre_order(n.right.as_deref(), visit);
    }
}

/// Post-order traversal: left subtree, right subtree, node.
pub fn post_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(n) = node {
        post_order(n.left.as_deref(), visit);
        post_order(n.right.as_deref(), visit);
        visit(&n.element);
    }
}

/// Level-order (breadth-first) traversal, top to bottom, left to right.
pub fn level_order<'a, T, F>(root: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    let mut queue: VecDeque<&Node<T>> = VecDeque::new();
    if let Some(root) = root {
        queue.push_back(root);
    }
    while let Some(n) = queue.pop_front() {
        visit(&n.element);
        if let Some(l) = n.left.as_deref() {
            queue.push_back(l);
        }
        if let Some(r) = n.right.as_deref() {
            queue.push_back(r);
        }
    }
}

/// Brute-force search exploring both subtrees.
///
/// Makes no use of any ordering, so it is O(n); ordered trees should use
/// the order-guided search instead.
pub fn find_any<'a, T: PartialEq>(node: Option<&'a Node<T>>, target: &T) -> Option<&'a T> {
    let n = node?;
    if n.element == *target {
        return Some(&n.element);
    }
    find_any(n.left.as_deref(), target).or_else(|| find_any(n.right.as_deref(), target))
}

/// Number of nodes in the subtree.
pub fn count<T>(node: Option<&Node<T>>) -> usize {
    match node {
        Some(n) => 1 + count(n.left.as_deref()) + count(n.right.as_deref()),
        None => 0,
    }
}

fn render_node<T: fmt::Display>(node: &Node<T>, tab: &str, side: &str) -> String {
    let mut s = format!("\n{tab}{side} Node {}", node.element);
    if let Some(l) = node.left.as_deref() {
        s.push_str(&render_node(l, &format!("{tab}  "), "←"));
    }
    if let Some(r) = node.right.as_deref() {
        s.push_str(&render_node(r, &format!("{tab}  "), "→"));
    }
    s
}

/// Indented one-node-per-line dump of the tree.
pub fn render<T: fmt::Display>(root: Option<&Node<T>>) -> String {
    match root {
        Some(root) => format!("Tree{}", render_node(root, "", "└─")),
        None => "Tree ∅".to_string(),
    }
}
