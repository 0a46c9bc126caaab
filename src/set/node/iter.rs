use super::{Link, Node};

/// In-order access to a node and its children, either borrowed or owned.
pub trait NodeRef: Sized {
    type Value;

    fn value(self) -> Self::Value;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, T> NodeRef for &'a Node<T> {
    type Value = &'a T;

    fn value(self) -> &'a T { &self.value }
    fn left(&mut self) -> Option<&'a Node<T>> { self.left.as_deref() }
    fn right(&mut self) -> Option<&'a Node<T>> { self.right.as_deref() }
}

impl<T> NodeRef for Box<Node<T>> {
    type Value = T;

    fn value(self) -> T { (*self).value }
    fn left(&mut self) -> Link<T> { self.left.take() }
    fn right(&mut self) -> Link<T> { self.right.take() }
}

/// A lazy in-order walk yielding each value with its structural depth.
///
/// The walk holds the path from the root to the next value to yield, so it
/// never needs more space than the height of the tree.
#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    stack: Vec<(N, usize)>,
    len: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, len: usize) -> Iter<N> {
        let mut it = Iter { stack: Vec::new(), len };
        it.descend(root, 0);
        it
    }

    // Pushes the left spine of `link`, deepest node on top.
    fn descend(&mut self, mut link: Option<N>, mut depth: usize) {
        while let Some(mut node) = link {
            link = node.left();
            self.stack.push((node, depth));
            depth += 1;
        }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = (N::Value, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (mut node, depth) = self.stack.pop()?;
        let right = node.right();
        self.descend(right, depth + 1);
        self.len -= 1;
        Some((node.value(), depth))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<N> ExactSizeIterator for Iter<N> where N: NodeRef {}
