//! An ordered set based on an AVL tree.

mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter;
use self::node::{Descent, Node};

/// An ordered set based on an AVL tree.
///
/// After every insertion and removal the tree restores the invariant that
/// the heights of any node's two subtrees differ by at most one, so lookups,
/// insertions, and removals are all logarithmic in the number of values.
///
/// The behavior of this set is undefined if a value's ordering relative to
/// any other value changes while the value is in the set. This is normally
/// only possible through `Cell`, `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    root: node::Link<T>,
    len: usize,
    cmp: C,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set::with_cmp(compare::natural()) }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = avl::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Set { root: None, len: 0, cmp }
    }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let set = avl::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    ///
    /// let set: avl::Set<i32, _> = avl::Set::with_cmp(natural().rev());
    /// assert!(set.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all values from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    ///
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts a value into the set, returning `true` if the set did not
    /// already contain the value.
    ///
    /// Inserting a value that is already present is a no-op: the size, the
    /// shape of the tree, and all node heights are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(!set.contains(&1));
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        match node::insert(&mut self.root, &self.cmp, value) {
            Descent::Duplicate => false,
            _ => {
                self.len += 1;
                true
            }
        }
    }

    /// Removes the given value from the set, returning `true` if the set
    /// contained the value.
    ///
    /// Removing an absent value is a no-op that leaves the tree completely
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&1));
    /// assert!(set.remove(&1));
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool where C: Compare<Q, T> {
        match node::remove(&mut self.root, &self.cmp, value) {
            Some(_) => {
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Checks if the set contains the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, value).is_some()
    }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the values in ascending order according to the
    /// set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(self.traverse()) }

    /// Returns an in-order traversal of the set that yields each value
    /// together with its structural depth, the root being at depth 0.
    ///
    /// The traversal is lazy, does not mutate the set, and can be restarted
    /// any number of times.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let entries: Vec<(&i32, usize)> = set.traverse().collect();
    /// assert_eq!(entries, [(&1, 1), (&2, 0), (&3, 1)]);
    /// ```
    pub fn traverse(&self) -> Traverse<T> {
        Traverse(node::Iter::new(self.root.as_deref(), self.len))
    }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(value) = it.next() {
            write!(f, "{:?}", value)?;
            for value in it { write!(f, ", {:?}", value)?; }
        }

        write!(f, "}}")
    }
}

/// Renders the set as a lying tree: a header with the set's size, then one
/// line per value in ascending order, indented one tab per level of depth
/// and followed by the node's height in parentheses.
///
/// # Examples
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// assert_eq!(set.to_string(), "Set (3)\n\t1 (1)\n2 (2)\n\t3 (1)\n");
/// ```
impl<T, C> Display for Set<T, C> where T: Display, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Set ({})", self.len)?;
        node::render(&self.root, f, 0)
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set::with_cmp(C::default()) }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for value in it { self.insert(value); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        self.len.hash(h);
        for value in self { value.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the values in ascending order according to the
    /// set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = avl::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T> { IntoIter(node::Iter::new(self.root, self.len)) }
}

impl<T, C> PartialEq for Set<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for Set<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, C> Ord for Set<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering { self.iter().cmp(other.iter()) }
}

/// An iterator over the set.
///
/// The iterator yields the values in ascending order according to the set's
/// comparator.
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for value in &set {
///     println!("{:?}", value);
/// }
/// ```
pub struct Iter<'a, T: 'a>(Traverse<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize { self.0.len() }
}

/// An in-order traversal of the set, yielding each value together with its
/// structural depth.
///
/// Acquire through [`Set::traverse`](struct.Set.html#method.traverse).
pub struct Traverse<'a, T: 'a>(node::Iter<&'a Node<T>>);

impl<'a, T> Clone for Traverse<'a, T> {
    fn clone(&self) -> Self { Traverse(self.0.clone()) }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (&'a T, usize);
    fn next(&mut self) -> Option<(&'a T, usize)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Traverse<'a, T> {
    fn len(&self) -> usize { self.0.len() }
}

/// An iterator that consumes the set.
///
/// The iterator yields the values in ascending order according to the set's
/// comparator.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = avl::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for value in set {
///     println!("{:?}", value);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<T>(node::Iter<Box<Node<T>>>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize { self.0.len() }
}
