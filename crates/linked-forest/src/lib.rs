//! Linked-node binary tree containers.
//!
//! The crate centers on [`AvlTree`], an ordered container that restores
//! the AVL height-balance invariant after every insertion, keeping
//! search, insert and delete logarithmic. Nodes own their subtrees
//! outright and carry no parent pointers: each structural operation
//! takes a subtree by value and returns its replacement for the caller
//! to reattach, so rotation decisions stay local.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`] storage unit and the height convention |
//! | [`avl`] | [`AvlTree`] container; insertion/rebalance, rotations, deletion, search |
//! | [`walk`] | read-only traversals, brute-force search, tree rendering |
//! | [`error`] | [`TreeError`] |
//!
//! Deletion deliberately performs no rebalancing; see the [`avl`] module
//! docs for the exact guarantee split between insertion and removal.

pub mod avl;
pub mod error;
pub mod node;
pub mod walk;

pub use avl::AvlTree;
pub use error::TreeError;
pub use node::{height, Node};
