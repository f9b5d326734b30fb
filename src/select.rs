//! Selection kernel used by the partitioner.
//!
//! Floyd-Rivest selection over the interleaved coordinate array, keyed on a
//! single axis. Ids and coordinates are permuted together through
//! [`swap_item`], so slot `i` always pairs `ids[i]` with `coords[2 * i..2 * i + 2]`.

use std::cmp::Ordering;

use crate::coord::{Axis, Coord};

/// Ranges longer than this first select on a sample around the expected rank.
const SAMPLE_THRESHOLD: usize = 600;

/// Rearranges `[left, right]` so that slot `k` holds the value it would hold
/// if the range were sorted by `axis`, with no greater value before it and
/// no smaller value after it.
///
/// Only slots inside `[left, right]` are read or written.
pub(crate) fn select<T: Coord>(
    ids: &mut [u32],
    coords: &mut [T],
    k: usize,
    mut left: usize,
    mut right: usize,
    axis: Axis,
) {
    debug_assert!(left <= k && k <= right, "rank {k} outside [{left}, {right}]");
    debug_assert_eq!(coords.len(), 2 * ids.len(), "coords must hold two values per id");

    let a = axis.index();

    while right > left {
        if right - left > SAMPLE_THRESHOLD {
            let (sample_left, sample_right) = sample_bounds(k, left, right);
            select(ids, coords, k, sample_left, sample_right, axis);
        }

        let t = coords[2 * k + a];
        let mut i = left;
        let mut j = right;

        swap_item(ids, coords, left, k);
        if coords[2 * right + a] > t {
            swap_item(ids, coords, left, right);
        }

        while i < j {
            swap_item(ids, coords, i, j);
            i += 1;
            j -= 1;
            while coords[2 * i + a] < t {
                i += 1;
            }
            while coords[2 * j + a] > t {
                j -= 1;
            }
        }

        if coords[2 * left + a] == t {
            swap_item(ids, coords, left, j);
        } else {
            j += 1;
            swap_item(ids, coords, j, right);
        }

        match j.cmp(&k) {
            Ordering::Less => left = j + 1,
            Ordering::Greater => right = j - 1,
            Ordering::Equal => break,
        }
    }
}

/// Sub-range expected to contain rank `k`, sized by the Floyd-Rivest sampling rule.
#[expect(
    clippy::cast_possible_truncation,
    reason = "bounds are floored and clamped to the current range"
)]
fn sample_bounds(k: usize, left: usize, right: usize) -> (usize, usize) {
    let n = (right - left + 1) as f64;
    let m = (k - left + 1) as f64;
    let z = n.ln();
    let s = 0.5 * (2.0 * z / 3.0).exp();
    let sign = if m - n / 2.0 < 0.0 { -1.0 } else { 1.0 };
    let sd = 0.5 * (z * s * (n - s) / n).sqrt() * sign;
    let k = k as f64;

    // Negative floats saturate to 0 on cast.
    let new_left = left.max((k - m * s / n + sd).floor() as usize);
    let new_right = right.min((k + (n - m) * s / n + sd).floor() as usize);
    (new_left, new_right)
}

/// Swaps slots `i` and `j`: the id and both coordinates move together.
#[inline]
pub(crate) fn swap_item<T>(ids: &mut [u32], coords: &mut [T], i: usize, j: usize) {
    ids.swap(i, j);
    coords.swap(2 * i, 2 * j);
    coords.swap(2 * i + 1, 2 * j + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn make(points: &[(f64, f64)]) -> (Vec<u32>, Vec<f64>) {
        let ids = (0..points.len() as u32).collect();
        let coords = points.iter().flat_map(|&(x, y)| [x, y]).collect();
        (ids, coords)
    }

    /// Checks the selection postcondition on `[left, right]` and that every
    /// id still sits next to its own coordinates.
    fn check(
        points: &[(f64, f64)],
        ids: &[u32],
        coords: &[f64],
        k: usize,
        left: usize,
        right: usize,
        axis: Axis,
    ) {
        let a = axis.index();
        let mut expected: Vec<f64> = (left..=right).map(|i| coords[2 * i + a]).collect();
        expected.sort_by(|p, q| p.partial_cmp(q).unwrap());
        let pivot = coords[2 * k + a];
        assert_eq!(pivot, expected[k - left], "wrong value at rank {k}");

        for i in left..k {
            assert!(coords[2 * i + a] <= pivot, "slot {i} greater than pivot");
        }
        for i in k + 1..=right {
            assert!(coords[2 * i + a] >= pivot, "slot {i} smaller than pivot");
        }
        for (slot, &id) in ids.iter().enumerate() {
            let (x, y) = points[id as usize];
            assert_eq!((coords[2 * slot], coords[2 * slot + 1]), (x, y), "id {id} detached");
        }
    }

    #[test]
    fn test_swap_item_moves_id_and_coords() {
        let mut ids = vec![0, 1, 2];
        let mut coords = vec![0.0, 10.0, 1.0, 11.0, 2.0, 12.0];
        swap_item(&mut ids, &mut coords, 0, 2);
        assert_eq!(ids, vec![2, 1, 0]);
        assert_eq!(coords, vec![2.0, 12.0, 1.0, 11.0, 0.0, 10.0]);
    }

    #[test]
    fn test_select_small_range_every_rank() {
        let points = vec![(5.0, 0.0), (3.0, 1.0), (9.0, 2.0), (1.0, 3.0), (7.0, 4.0), (3.0, 5.0)];
        for k in 0..points.len() {
            let (mut ids, mut coords) = make(&points);
            select(&mut ids, &mut coords, k, 0, points.len() - 1, Axis::X);
            check(&points, &ids, &coords, k, 0, points.len() - 1, Axis::X);
        }
    }

    #[test]
    fn test_select_y_axis() {
        let points: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, ((i * 37) % 50) as f64)).collect();
        let (mut ids, mut coords) = make(&points);
        select(&mut ids, &mut coords, 24, 0, 49, Axis::Y);
        check(&points, &ids, &coords, 24, 0, 49, Axis::Y);
    }

    #[test]
    fn test_select_sub_range_leaves_outside_untouched() {
        let points: Vec<(f64, f64)> = (0..40).map(|i| ((40 - i) as f64, 0.0)).collect();
        let (mut ids, mut coords) = make(&points);
        select(&mut ids, &mut coords, 20, 10, 30, Axis::X);
        check(&points, &ids, &coords, 20, 10, 30, Axis::X);
        for slot in (0..10).chain(31..40) {
            assert_eq!(ids[slot], slot as u32, "slot {slot} outside range was moved");
        }
    }

    #[test]
    fn test_select_all_equal() {
        let points = vec![(4.0, 4.0); 100];
        let (mut ids, mut coords) = make(&points);
        select(&mut ids, &mut coords, 50, 0, 99, Axis::X);
        check(&points, &ids, &coords, 50, 0, 99, Axis::X);
    }

    #[test]
    fn test_select_sorted_and_reversed_runs() {
        let ascending: Vec<(f64, f64)> = (0..2000).map(|i| (i as f64, 0.0)).collect();
        let descending: Vec<(f64, f64)> = (0..2000).rev().map(|i| (i as f64, 0.0)).collect();
        for points in [ascending, descending] {
            let (mut ids, mut coords) = make(&points);
            select(&mut ids, &mut coords, 999, 0, 1999, Axis::X);
            check(&points, &ids, &coords, 999, 0, 1999, Axis::X);
            assert_eq!(coords[2 * 999], 999.0);
        }
    }

    #[test]
    fn test_select_large_random_with_duplicates() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for &n in &[601_usize, 1500, 5000] {
            let points: Vec<(f64, f64)> = (0..n)
                .map(|_| (rng.random_range(0..30) as f64, rng.random_range(0..30) as f64))
                .collect();
            let k = rng.random_range(0..n);
            let (mut ids, mut coords) = make(&points);
            select(&mut ids, &mut coords, k, 0, n - 1, Axis::X);
            check(&points, &ids, &coords, k, 0, n - 1, Axis::X);
        }
    }

    #[test]
    fn test_sample_bounds_contain_rank() {
        for &(k, left, right) in &[(0, 0, 1000), (500, 0, 1000), (1000, 0, 1000), (2500, 2000, 9000)] {
            let (l, r) = sample_bounds(k, left, right);
            assert!(left <= l && l <= k, "sample left {l} excludes rank {k}");
            assert!(k <= r && r <= right, "sample right {r} excludes rank {k}");
        }
    }
}
