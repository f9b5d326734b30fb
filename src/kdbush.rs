//! Static KD-tree over 2D points, stored as flat arrays.
//!
//! There are no node objects. Slots `[0, len)` form an implicit balanced
//! binary tree: a range `[left, right]` splits at `m = left + (right - left) / 2`,
//! alternating between the X and Y axis at every level, until
//! `right - left <= node_size`. Leaf ranges are scanned linearly at query time.
//!
//! Memory layout:
//! - `ids`: original input index of the point stored at each slot
//! - `coords`: interleaved `x0, y0, x1, y1, ...`, permuted together with `ids`

use crate::coord::{Axis, Coord};
use crate::error::BuildError;
use crate::select::select;

/// Node size used when none is given.
pub const DEFAULT_NODE_SIZE: usize = 64;

/// Ranges at least this long partition their two halves on separate rayon tasks.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 1 << 14;

/// Immutable spatial index over a fixed set of 2D points.
///
/// Built once, by [`KDBush::from_points`] or a [`KDBushBuilder`], then queried
/// any number of times. Queries take `&self`, so a `KDBush` can be shared
/// between threads without locking.
///
/// # Examples
/// ```
/// use kdbush::KDBush;
///
/// let index = KDBush::from_points([(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], 10).unwrap();
/// assert_eq!(index.len(), 3);
///
/// let mut results = index.range(0.0, 0.0, 6.0, 6.0);
/// results.sort();
/// assert_eq!(results, vec![0, 1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KDBush<T = f64> {
    /// Original input index per slot
    pub(crate) ids: Vec<u32>,
    /// Interleaved coordinates per slot
    pub(crate) coords: Vec<T>,
    /// Largest `right - left` of a range scanned without splitting
    pub(crate) node_size: usize,
}

impl<T: Coord> KDBush<T> {
    /// Builds an index with [`DEFAULT_NODE_SIZE`].
    ///
    /// # Errors
    /// See [`KDBush::from_points`].
    pub fn new<I>(points: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::from_points(points, DEFAULT_NODE_SIZE)
    }

    /// Builds an index over `points`. The i-th point gets id `i`.
    ///
    /// Smaller node sizes give deeper trees and faster queries at the cost
    /// of a slower build.
    ///
    /// # Errors
    /// - [`BuildError::InvalidNodeSize`] if `node_size` is 0, checked before
    ///   any point is read
    /// - [`BuildError::TooManyPoints`] if there are more than `u32::MAX` points
    /// - [`BuildError::NonFiniteCoordinate`] if a coordinate is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use kdbush::{BuildError, KDBush};
    ///
    /// let points = vec![(0_i32, 0_i32), (3, 4)];
    /// let index = KDBush::from_points(points.iter().copied(), 16).unwrap();
    /// assert_eq!(index.node_size(), 16);
    ///
    /// assert_eq!(
    ///     KDBush::from_points(points, 0).unwrap_err(),
    ///     BuildError::InvalidNodeSize(0)
    /// );
    /// ```
    pub fn from_points<I>(points: I, node_size: usize) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        check_node_size(node_size)?;

        let points = points.into_iter();
        let mut builder = KDBushBuilder::with_capacity(points.size_hint().0).node_size(node_size);
        for (x, y) in points {
            let _id = builder.add(x, y);
        }
        builder.build()
    }

    /// Returns the number of indexed points
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the index holds no points
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the node size the index was built with
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Original ids in slot order.
    ///
    /// Together with [`KDBush::coords`] and [`KDBush::node_size`] this is the
    /// whole index.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Interleaved coordinates in slot order: slot `i` is at `[2 * i, 2 * i + 1]`.
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Coordinates stored at `slot`, or `None` if out of bounds.
    ///
    /// `slot` is a position in the built layout, not an original id.
    pub fn point(&self, slot: usize) -> Option<(T, T)> {
        (slot < self.len()).then(|| (self.coords[2 * slot], self.coords[2 * slot + 1]))
    }
}

/// Incremental constructor for [`KDBush`].
///
/// # Examples
/// ```
/// use kdbush::KDBushBuilder;
///
/// let mut builder = KDBushBuilder::with_capacity(2).node_size(8);
/// let a = builder.add(0.0, 0.0);
/// let b = builder.add(2.0, 2.0);
/// assert_eq!((a, b), (0, 1));
///
/// let index = builder.build().unwrap();
/// assert_eq!(index.within(0.0, 0.0, 1.0), vec![a]);
/// ```
#[derive(Clone, Debug)]
pub struct KDBushBuilder<T = f64> {
    /// Interleaved coordinates in insertion order
    pub(crate) coords: Vec<T>,
    pub(crate) node_size: usize,
}

impl<T: Coord> KDBushBuilder<T> {
    /// Creates an empty builder with [`DEFAULT_NODE_SIZE`]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(2 * capacity),
            node_size: DEFAULT_NODE_SIZE,
        }
    }

    /// Sets the node size. Validated by [`KDBushBuilder::build`].
    #[must_use]
    pub fn node_size(mut self, node_size: usize) -> Self {
        self.node_size = node_size;
        self
    }

    /// Adds a point and returns the id it will carry in query results.
    pub fn add(&mut self, x: T, y: T) -> usize {
        let id = self.len();
        self.coords.push(x);
        self.coords.push(y);
        id
    }

    /// Returns the number of points added so far
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// Returns whether no points have been added
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Partitions the added points into a [`KDBush`].
    ///
    /// Deterministic: the same points in the same order with the same node
    /// size always give the same layout.
    ///
    /// # Errors
    /// See [`KDBush::from_points`].
    pub fn build(self) -> Result<KDBush<T>, BuildError> {
        let Self { mut coords, node_size } = self;
        check_node_size(node_size)?;

        let num_items = coords.len() / 2;
        let count = u32::try_from(num_items).map_err(|_| BuildError::TooManyPoints(num_items))?;
        if let Some(pos) = coords.iter().position(|&v| !v.is_finite()) {
            return Err(BuildError::NonFiniteCoordinate { id: pos / 2 });
        }

        let mut ids: Vec<u32> = (0..count).collect();
        sort(&mut ids, &mut coords, node_size, Axis::X);

        Ok(KDBush { ids, coords, node_size })
    }
}

impl<T: Coord> Default for KDBushBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_node_size(node_size: usize) -> Result<(), BuildError> {
    if node_size == 0 {
        return Err(BuildError::InvalidNodeSize(node_size));
    }
    Ok(())
}

/// Recursively partitions the whole slice around its median on `axis`.
///
/// Slices are relative: the range `[0, len - 1]` splits at `(len - 1) / 2`,
/// which is the same slot `left + (right - left) / 2` picks in absolute terms.
fn sort<T: Coord>(ids: &mut [u32], coords: &mut [T], node_size: usize, axis: Axis) {
    let len = ids.len();
    if len == 0 || len - 1 <= node_size {
        return;
    }

    let m = (len - 1) / 2;
    select(ids, coords, m, 0, len - 1, axis);

    let (left_ids, rest_ids) = ids.split_at_mut(m);
    let (left_coords, rest_coords) = coords.split_at_mut(2 * m);
    let right_ids = &mut rest_ids[1..];
    let right_coords = &mut rest_coords[2..];
    let child_axis = axis.flip();

    #[cfg(feature = "rayon")]
    if len >= PARALLEL_THRESHOLD {
        let ((), ()) = rayon::join(
            || sort(left_ids, left_coords, node_size, child_axis),
            || sort(right_ids, right_coords, node_size, child_axis),
        );
        return;
    }

    sort(left_ids, left_coords, node_size, child_axis);
    sort(right_ids, right_coords, node_size, child_axis);
}

#[cfg(test)]
impl<T: Coord> KDBush<T> {
    /// Panics unless every internal range has its median correctly
    /// partitioned on the level's axis.
    pub(crate) fn assert_tree_consistent(&self) {
        if !self.is_empty() {
            self.assert_range_consistent(0, self.len() - 1, Axis::X);
        }
    }

    fn assert_range_consistent(&self, left: usize, right: usize, axis: Axis) {
        if right - left <= self.node_size {
            return;
        }
        let a = axis.index();
        let m = left + (right - left) / 2;
        let pivot = self.coords[2 * m + a];
        for i in left..m {
            assert!(self.coords[2 * i + a] <= pivot, "slot {i} above median {m} on {axis:?}");
        }
        for i in m + 1..=right {
            assert!(self.coords[2 * i + a] >= pivot, "slot {i} below median {m} on {axis:?}");
        }
        self.assert_range_consistent(left, m - 1, axis.flip());
        self.assert_range_consistent(m + 1, right, axis.flip());
    }
}
