//! Find points inside a query rectangle.
use kdbush::prelude::*;

fn main() -> Result<(), BuildError> {
    let mut builder = KDBushBuilder::with_capacity(4).node_size(10);
    builder.add(0.5, 0.5);  // Point 0
    builder.add(2.5, 2.5);  // Point 1 (outside query)
    builder.add(1.0, 1.2);  // Point 2
    builder.add(1.3, 0.7);  // Point 3 (on the boundary)
    let index = builder.build()?;

    let mut results = Vec::new();
    index.query_range(0.7, 0.7, 1.3, 1.3, &mut results);
    println!("In range: {:?}", results);

    // Bounds are inclusive, so point 3 on the corner is found; point 0 is below the rectangle
    assert_eq!(results.len(), 2, "Expected 2 points in range");
    assert!(results.contains(&2), "Point 2 should be in range");
    assert!(results.contains(&3), "Point 3 should be in range");
    assert!(!results.contains(&1), "Point 1 should not be in range");

    // An inverted rectangle is a valid query with no matches
    index.query_range(1.3, 0.7, 0.7, 1.3, &mut results);
    assert!(results.is_empty(), "Inverted rectangle should match nothing");
    Ok(())
}
