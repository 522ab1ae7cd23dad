//! Coordinate deduplication through a comparator-ordered set.
//!
//! Purpose
//! - `unique_coords` keeps the first occurrence of every distinct coordinate,
//!   in input order. Distinctness is whatever the comparator's `is_equal` says,
//!   not bit equality.
//!
//! Why this design
//! - `TreeSet` only needs `is_equal`/`is_less` from the caller, so comparators
//!   with tolerances or custom axes plug in without `Ord`/`Hash` impls.
//! - The tree is AVL-balanced: already sorted input (common for coordinate
//!   streams) keeps logarithmic depth.
//!
//! Insert-only; entries are never removed or mutated.

use std::fmt;

use crate::coord::{xy_coords, xy_equal, Coord};
use crate::error::Result;

/// Ordering capability used by `TreeSet`.
///
/// `is_less` must be consistent with `is_equal` for the set to stay
/// meaningful: equal values are never less than each other.
pub trait Compare<T: ?Sized> {
    fn is_equal(&self, a: &T, b: &T) -> bool;
    fn is_less(&self, a: &T, b: &T) -> bool;
}

/// Exact lexicographic order on XY: X first, then Y.
#[derive(Clone, Copy, Debug, Default)]
pub struct XyOrder;

impl Compare<Coord> for XyOrder {
    #[inline]
    fn is_equal(&self, a: &Coord, b: &Coord) -> bool {
        xy_equal(*a, *b)
    }

    #[inline]
    fn is_less(&self, a: &Coord, b: &Coord) -> bool {
        a.x < b.x || (a.x == b.x && a.y < b.y)
    }
}

/// Comparator built from an equality closure and a less-than closure.
#[derive(Clone, Copy)]
pub struct FnCompare<E, L> {
    eq: E,
    less: L,
}

impl<E, L> FnCompare<E, L> {
    pub fn new(eq: E, less: L) -> Self {
        Self { eq, less }
    }
}

impl<E, L> fmt::Debug for FnCompare<E, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCompare")
    }
}

impl<T, E, L> Compare<T> for FnCompare<E, L>
where
    E: Fn(&T, &T) -> bool,
    L: Fn(&T, &T) -> bool,
{
    fn is_equal(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    fn is_less(&self, a: &T, b: &T) -> bool {
        (self.less)(a, b)
    }
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

#[inline]
fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let bal = node.balance();
    if bal > 1 {
        if node.left.as_ref().map_or(0, |l| l.balance()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bal < -1 {
        if node.right.as_ref().map_or(0, |r| r.balance()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn insert_node<T, C: Compare<T>>(link: &mut Link<T>, value: T, cmp: &C) -> bool {
    let added = match *link {
        None => {
            *link = Some(Box::new(Node::leaf(value)));
            return true;
        }
        Some(ref mut node) => {
            if cmp.is_equal(&value, &node.value) {
                return false;
            }
            if cmp.is_less(&value, &node.value) {
                insert_node(&mut node.left, value, cmp)
            } else {
                insert_node(&mut node.right, value, cmp)
            }
        }
    };
    if added {
        *link = link.take().map(rebalance);
    }
    added
}

/// Insert-only ordered set keyed by a `Compare` implementation.
pub struct TreeSet<T, C> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T, C: Compare<T>> TreeSet<T, C> {
    pub fn new(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Insert `value`; `false` if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let added = insert_node(&mut self.root, value, &self.cmp);
        if added {
            self.len += 1;
        }
        added
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            if self.cmp.is_equal(value, &node.value) {
                return true;
            }
            link = if self.cmp.is_less(value, &node.value) {
                &node.left
            } else {
                &node.right
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Values in comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut it = Iter { stack: Vec::new() };
        it.push_left(&self.root);
        it
    }

    /// Values in comparator order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    #[cfg(test)]
    fn height(&self) -> i32 {
        height(&self.root)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = Iter { stack: Vec::new() };
        it.push_left(&self.root);
        f.debug_set().entries(it).finish()
    }
}

/// In-order iterator over a `TreeSet`.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        Some(&node.value)
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// First occurrence of every distinct value, in input order.
pub fn unique_coords<T: Clone, C: Compare<T>>(coords: &[T], cmp: C) -> Vec<T> {
    let mut set = TreeSet::new(cmp);
    coords
        .iter()
        .filter(|c| set.insert((*c).clone()))
        .cloned()
        .collect()
}

/// `unique_coords` over a flat ordinate buffer.
///
/// Tuples are compared on their XY only; surviving tuples are copied whole,
/// extra ordinates included.
pub fn unique_flat<C: Compare<Coord>>(flat: &[f64], stride: usize, cmp: C) -> Result<Vec<f64>> {
    let xy = xy_coords(flat, stride)?;
    let mut set = TreeSet::new(cmp);
    let mut out = Vec::with_capacity(flat.len());
    for (p, tuple) in xy.into_iter().zip(flat.chunks_exact(stride)) {
        if set.insert(p) {
            out.extend_from_slice(tuple);
        }
    }
    Ok(out)
}
