//! # KDBush - Static 2D Point Index
//!
//! A Rust library providing a fast static spatial index for 2D points,
//! answering rectangular range queries and circular radius queries.
//!
//! ## Features
//!
//! - **Flat KD-tree**: points live in two contiguous arrays, no node allocations
//! - **Range Queries**: all points inside an axis-aligned rectangle
//! - **Radius Queries**: all points within a distance of a center, using squared distances
//! - **Generic Coordinates**: `f64`, `f32`, `i64`, `i32` and `i16`
//! - **Thread Safe**: the built index is immutable and `Sync`
//! - **Parallel Build**: optional `rayon` feature partitions sibling ranges concurrently
//!
//! ## Quick Start
//!
//! ```rust
//! use kdbush::prelude::*;
//!
//! // Collect points; each gets the id of its insertion order
//! let mut builder = KDBushBuilder::with_capacity(4).node_size(10);
//! builder.add(10.0, 10.0);   // Point 0
//! builder.add(20.0, 25.0);   // Point 1
//! builder.add(40.0, 40.0);   // Point 2
//! builder.add(22.0, 21.0);   // Point 3
//!
//! // Build the index (required before querying)
//! let index = builder.build().unwrap();
//!
//! // Points inside the rectangle (min_x, min_y, max_x, max_y)
//! let mut results = Vec::new();
//! index.query_range(15.0, 15.0, 30.0, 30.0, &mut results);
//! results.sort();
//! assert_eq!(results, vec![1, 3]);
//!
//! // Points within radius 20 of (35, 35); the results vector is reused
//! index.query_within(35.0, 35.0, 20.0, &mut results);
//! results.sort();
//! assert_eq!(results, vec![1, 2, 3]);
//! ```
//!
//! ## How It Works
//!
//! Building recursively selects the median of each index range, on X at the
//! root and alternating with Y at every level, until ranges are no longer than
//! the node size. The tree shape follows from the range arithmetic alone, so
//! only ids and coordinates are stored. Queries walk that implicit tree with an
//! explicit stack, pruning halves that lie outside the query's bounding box.
//!
//! Result order is unspecified; sort the ids if a stable order is needed.

pub mod coord;
pub mod error;
pub mod kdbush;
pub mod prelude;
mod queries;
mod select;

pub use coord::{Axis, Coord};
pub use error::BuildError;
pub use kdbush::{DEFAULT_NODE_SIZE, KDBush, KDBushBuilder};
