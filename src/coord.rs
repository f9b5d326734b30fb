//! Coordinate scalar types accepted by the index.
//!
//! The index stores coordinates of a single numeric type `T`. Floating point
//! and signed integer types are supported; unsigned types are not, because the
//! radius query computes `center - radius` on the stored type.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Numeric type usable as a point coordinate.
///
/// Squared distances are computed in the same type, so integer coordinates
/// must be small enough for `dx * dx + dy * dy` not to overflow.
pub trait Coord:
    Copy
    + PartialOrd
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Returns `false` for NaN and infinities. Integers are always finite.
    fn is_finite(self) -> bool;
}

macro_rules! impl_float_coord {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

macro_rules! impl_int_coord {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                const ZERO: Self = 0;

                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_float_coord!(f32, f64);
impl_int_coord!(i16, i32, i64);

/// Splitting axis of a tree level. The root splits on `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// First coordinate.
    X,
    /// Second coordinate.
    Y,
}

impl Axis {
    /// Axis used by the children of a node split on `self`.
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Offset of this axis inside an interleaved `[x, y]` pair.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Squared Euclidean distance between `(ax, ay)` and `(bx, by)`.
#[inline]
pub fn sq_dist<T: Coord>(ax: T, ay: T, bx: T, by: T) -> T {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
