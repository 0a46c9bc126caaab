//! An ordered set based on an AVL tree.
//!
//! The tree rebalances itself on every insertion and removal so that the
//! heights of any node's two subtrees never differ by more than one, which
//! keeps every operation logarithmic in the number of values.
//!
//! # Examples
//!
//! ```
//! let mut set = avl::Set::new();
//!
//! set.insert(2);
//! set.insert(1);
//! set.insert(3);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&2));
//!
//! let values: Vec<&i32> = set.iter().collect();
//! assert_eq!(values, [&1, &2, &3]);
//! ```

pub mod set;

pub use self::set::Set;
