//! Range and radius queries for [`KDBush`].
//!
//! Both walk the implicit tree with an explicit stack of `(left, right, axis)`
//! ranges. At each internal range the median slot is tested directly and the
//! query's bounding box on the level's axis decides which halves to visit.
//! Leaf ranges are scanned slot by slot.

use std::cmp::Ordering;

use crate::KDBush;
use crate::coord::{Axis, Coord, sq_dist};

impl<T: Coord> KDBush<T> {
    /// Shared traversal: `contains` is the exact test, the bounding box only prunes.
    fn search<F>(&self, min_x: T, min_y: T, max_x: T, max_y: T, contains: F, results: &mut Vec<usize>)
    where
        F: Fn(T, T) -> bool,
    {
        results.clear();
        if self.ids.is_empty() {
            return;
        }

        let mut stack = Vec::with_capacity(64);
        stack.push((0, self.ids.len() - 1, Axis::X));

        while let Some((left, right, axis)) = stack.pop() {
            if right - left <= self.node_size {
                for i in left..=right {
                    if contains(self.coords[2 * i], self.coords[2 * i + 1]) {
                        results.push(self.ids[i] as usize);
                    }
                }
                continue;
            }

            let m = left + (right - left) / 2;
            let x = self.coords[2 * m];
            let y = self.coords[2 * m + 1];
            if contains(x, y) {
                results.push(self.ids[m] as usize);
            }

            let (lower, upper, value) = match axis {
                Axis::X => (min_x, max_x, x),
                Axis::Y => (min_y, max_y, y),
            };
            if lower <= value {
                stack.push((left, m - 1, axis.flip()));
            }
            if upper >= value {
                stack.push((m + 1, right, axis.flip()));
            }
        }
    }

    /// Finds all points inside the rectangle `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Bounds are inclusive. An inverted rectangle (`min_x > max_x` or
    /// `min_y > max_y`) contains nothing and yields an empty result.
    ///
    /// # Arguments
    /// * `min_x`, `min_y`, `max_x`, `max_y` - Query rectangle bounds
    /// * `results` - Output vector; cleared, then filled with matching ids in no particular order
    ///
    /// # Examples
    /// ```
    /// use kdbush::KDBush;
    ///
    /// let index = KDBush::from_points([(1.0, 1.0), (2.0, 2.0), (8.0, 8.0)], 10).unwrap();
    ///
    /// let mut results = Vec::new();
    /// index.query_range(0.0, 0.0, 2.0, 2.0, &mut results);
    /// results.sort();
    /// assert_eq!(results, vec![0, 1]);
    /// ```
    pub fn query_range(&self, min_x: T, min_y: T, max_x: T, max_y: T, results: &mut Vec<usize>) {
        self.search(
            min_x,
            min_y,
            max_x,
            max_y,
            |x, y| min_x <= x && x <= max_x && min_y <= y && y <= max_y,
            results,
        );
    }

    /// Finds all points within distance `r` of `(x, y)`, boundary included.
    ///
    /// Compares squared distances, so no square roots are taken. `r = 0`
    /// matches only points exactly at `(x, y)`. A negative or NaN radius
    /// yields an empty result.
    ///
    /// # Arguments
    /// * `x`, `y` - Circle center
    /// * `r` - Circle radius
    /// * `results` - Output vector; cleared, then filled with matching ids in no particular order
    ///
    /// # Examples
    /// ```
    /// use kdbush::KDBush;
    ///
    /// let index = KDBush::from_points([(0, 0), (3, 4), (6, 8)], 10).unwrap();
    ///
    /// let mut results = Vec::new();
    /// index.query_within(0, 0, 5, &mut results);
    /// results.sort();
    /// assert_eq!(results, vec![0, 1]);
    /// ```
    pub fn query_within(&self, x: T, y: T, r: T, results: &mut Vec<usize>) {
        if r.partial_cmp(&T::ZERO).is_none_or(Ordering::is_lt) {
            results.clear();
            return;
        }

        let r2 = r * r;
        self.search(
            x - r,
            y - r,
            x + r,
            y + r,
            |px, py| sq_dist(px, py, x, y) <= r2,
            results,
        );
    }

    /// Returns the ids of all points inside a rectangle.
    ///
    /// Allocating form of [`KDBush::query_range`].
    pub fn range(&self, min_x: T, min_y: T, max_x: T, max_y: T) -> Vec<usize> {
        let mut results = Vec::new();
        self.query_range(min_x, min_y, max_x, max_y, &mut results);
        results
    }

    /// Returns the ids of all points within distance `r` of `(x, y)`.
    ///
    /// Allocating form of [`KDBush::query_within`].
    pub fn within(&self, x: T, y: T, r: T) -> Vec<usize> {
        let mut results = Vec::new();
        self.query_within(x, y, r, &mut results);
        results
    }
}
