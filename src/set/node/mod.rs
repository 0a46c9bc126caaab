mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::fmt;
use std::mem;

pub use self::iter::Iter;

pub type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    height: usize,
    value: T,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { left: None, right: None, height: 1, value }
    }

    fn update_height(&mut self) {
        self.height = 1 + std::cmp::max(height(&self.left), height(&self.right));
    }

    fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Returns the stored height of the subtree, where an absent subtree has
/// height 0 and a leaf has height 1.
pub fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Returns the balance factor of the subtree's root, or 0 for an absent
/// subtree.
fn balance<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(0, |node| node.balance())
}

// Left-left case: the left child's left subtree is too tall.
//
//       z              y
//      / \           /   \
//     y   d   ->    x     z
//    / \           / \   / \
//   x   c         a   b c   d
//  / \
// a   b
fn left_left<T>(mut z: Box<Node<T>>) -> Box<Node<T>> {
    let mut y = z.left.take().unwrap();
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

// Left-right case: the left child's right subtree is too tall.
//
//     z                 x
//    / \              /   \
//   y   d            y     z
//  / \       ->     / \   / \
// a   x            a   b c   d
//    / \
//   b   c
fn left_right<T>(mut z: Box<Node<T>>) -> Box<Node<T>> {
    let mut y = z.left.take().unwrap();
    let mut x = y.right.take().unwrap();
    y.right = x.left.take();
    y.update_height();
    z.left = x.right.take();
    z.update_height();
    x.left = Some(y);
    x.right = Some(z);
    x.update_height();
    x
}

// Mirror of the left-left case.
fn right_right<T>(mut z: Box<Node<T>>) -> Box<Node<T>> {
    let mut y = z.right.take().unwrap();
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

// Mirror of the left-right case.
fn right_left<T>(mut z: Box<Node<T>>) -> Box<Node<T>> {
    let mut y = z.right.take().unwrap();
    let mut x = y.left.take().unwrap();
    y.left = x.right.take();
    y.update_height();
    z.right = x.left.take();
    z.update_height();
    x.left = Some(z);
    x.right = Some(y);
    x.update_height();
    x
}

/// The turn an insertion took below a node. `Left` and `Right` record which
/// side of a node the new value descended, which stands in for comparing the
/// inserted value against that node's value one level up when a rotation
/// variant has to be picked.
#[derive(Clone, Copy, PartialEq)]
pub enum Descent {
    /// A new leaf was created at this link.
    Leaf,
    Left,
    Right,
    /// The value was already present; the tree is untouched.
    Duplicate,
}

/// Inserts `value` into the subtree, rebalancing on the way back up.
///
/// An insertion can unbalance at most one node on the search path, so at
/// most one rotation is applied; the unwind above it only refreshes heights.
pub fn insert<T, C>(link: &mut Link<T>, cmp: &C, value: T) -> Descent
    where C: Compare<T>
{
    let mut node = match link.take() {
        None => {
            *link = Some(Box::new(Node::new(value)));
            return Descent::Leaf;
        }
        Some(node) => node,
    };

    let descent = match cmp.compare(&value, &node.value) {
        Equal => {
            *link = Some(node);
            return Descent::Duplicate;
        }
        Less => {
            let below = insert(&mut node.left, cmp, value);
            if below == Descent::Duplicate {
                *link = Some(node);
                return below;
            }

            node.update_height();
            if node.balance() > 1 {
                node = if below == Descent::Left { left_left(node) } else { left_right(node) };
            }
            Descent::Left
        }
        Greater => {
            let below = insert(&mut node.right, cmp, value);
            if below == Descent::Duplicate {
                *link = Some(node);
                return below;
            }

            node.update_height();
            if node.balance() < -1 {
                node = if below == Descent::Right { right_right(node) } else { right_left(node) };
            }
            Descent::Right
        }
    };

    *link = Some(node);
    descent
}

/// Removes `value` from the subtree and returns it, rebalancing every node
/// on the way back up.
///
/// Unlike insertion, a removal can shrink heights along the whole search
/// path, so the unwind checks the balance of every ancestor rather than
/// stopping after the first rotation.
pub fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, value: &Q) -> Option<T>
    where C: Compare<Q, T>
{
    let mut node = match link.take() {
        None => return None,
        Some(node) => node,
    };

    let removed = match cmp.compare(value, &node.value) {
        Equal => {
            let (root, removed) = splice(node);
            *link = root;
            return Some(removed);
        }
        Less => remove(&mut node.left, cmp, value),
        Greater => remove(&mut node.right, cmp, value),
    };

    // An unsuccessful search leaves the subtree untouched.
    *link = Some(if removed.is_some() { rebalance(node) } else { node });
    removed
}

// Detaches `node` from the tree. With zero or one child the node is dropped
// and its child, if any, takes its place. With two children the node stays
// where it is but takes over the value of its in-order successor, which is
// removed from the right subtree instead.
fn splice<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match (node.left.take(), node.right.take()) {
        (None, None) => (None, node.value),
        (Some(child), None) | (None, Some(child)) => (Some(child), node.value),
        (Some(left), Some(right)) => {
            let (right, successor) = take_leftmost(right);
            let removed = mem::replace(&mut node.value, successor);
            node.left = Some(left);
            node.right = right;
            (Some(rebalance(node)), removed)
        }
    }
}

// Removes and returns the leftmost value of the subtree, rebalancing every
// node on the way back up.
fn take_leftmost<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => (node.right.take(), node.value),
        Some(left) => {
            let (left, value) = take_leftmost(left);
            node.left = left;
            (Some(rebalance(node)), value)
        }
    }
}

// Repairs the balance invariant at `node` after a removal below it. The
// removed value is gone, so the heavier child's own balance picks the
// rotation variant instead.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();

    if node.balance() > 1 {
        if balance(&node.left) >= 0 { left_left(node) } else { left_right(node) }
    } else if node.balance() < -1 {
        if balance(&node.right) <= 0 { right_right(node) } else { right_left(node) }
    } else {
        node
    }
}

/// Returns a reference to the value equal to `value`, if any. Iterative
/// descent, no mutation.
pub fn get<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, value: &Q) -> Option<&'a T>
    where C: Compare<Q, T>
{
    while let Some(ref node) = *link {
        match cmp.compare(value, &node.value) {
            Equal => return Some(&node.value),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

/// Renders the subtree as a lying tree: one value per line in ascending
/// order, indented one tab per level of depth, with the node's height in
/// parentheses.
pub fn render<T>(link: &Link<T>, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where T: fmt::Display
{
    if let Some(ref node) = *link {
        render(&node.left, f, depth + 1)?;
        for _ in 0..depth {
            f.write_str("\t")?;
        }
        writeln!(f, "{} ({})", node.value, node.height)?;
        render(&node.right, f, depth + 1)?;
    }

    Ok(())
}
