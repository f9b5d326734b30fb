//! Find points within a radius of a center, then rank them by distance.
use kdbush::prelude::*;

fn main() -> Result<(), BuildError> {
    let points = [
        (0.0, 0.0), // Point 0: distance 0 from (0, 0)
        (1.0, 0.0), // Point 1: distance 1
        (0.0, 1.0), // Point 2: distance 1
        (1.0, 1.0), // Point 3: distance sqrt(2)
        (5.0, 5.0), // Point 4: distance sqrt(50)
    ];
    let index = KDBush::from_points(points, DEFAULT_NODE_SIZE)?;

    let mut results = Vec::new();
    index.query_within(0.0, 0.0, 1.5, &mut results);
    println!("Within 1.5 of (0, 0): {:?}", results);
    assert_eq!(results.len(), 4, "Expected 4 points within radius 1.5");
    assert!(!results.contains(&4), "Point 4 should be outside the circle");

    // Results are unordered; ids index the caller's own point list for ranking
    let sq_dist = |id: usize| {
        let (x, y): (f64, f64) = points[id];
        x * x + y * y
    };
    results.sort_by(|&a, &b| sq_dist(a).total_cmp(&sq_dist(b)).then(a.cmp(&b)));
    println!("Ranked by distance: {:?}", results);
    assert_eq!(results, vec![0, 1, 2, 3]);

    // Zero radius only matches exact coincident points
    index.query_within(1.0, 1.0, 0.0, &mut results);
    assert_eq!(results, vec![3]);
    Ok(())
}
