/// A linked binary-tree node owning its subtrees.
///
/// There are no parent pointers: every structural operation takes a
/// subtree by value and returns its replacement, and the caller
/// reattaches it. `element` is never rewritten once the node exists;
/// deletion splices whole nodes instead.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub element: T,
    /// Cached height of the subtree rooted here. A leaf has height 0.
    pub height: i32,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(element: T) -> Self {
        Self {
            element,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn leaf(element: T) -> Box<Self> {
        Box::new(Self::new(element))
    }

    /// Balance factor, `height(right) - height(left)`.
    pub fn balance_factor(&self) -> i32 {
        height(self.right.as_deref()) - height(self.left.as_deref())
    }

    /// Recompute the cached height from the children's cached heights.
    pub fn update_height(&mut self) {
        self.height = height(self.left.as_deref())
            .max(height(self.right.as_deref()))
            + 1;
    }
}

/// Height of an optional subtree.
///
/// A one-node tree has height 0, therefore the empty tree has height -1.
pub fn height<T>(node: Option<&Node<T>>) -> i32 {
    match node {
        Some(n) => n.height,
        None => -1,
    }
}
