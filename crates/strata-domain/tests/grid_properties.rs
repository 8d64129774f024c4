use strata_domain::{bounding_grid, Domain, DomainError, PointSet, RegularGrid};

fn close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
}

#[test]
fn unit_grid_first_location_is_origin() {
    let grid = RegularGrid::new(&[200, 100], &[0.0, 0.0], &[1.0, 1.0]).unwrap();
    assert_eq!(grid.npoints(), 20_000);
    assert_eq!(grid.coordinates(1).unwrap().as_slice(), &[0.0, 0.0]);
    assert_eq!(grid.coordinates(20_000).unwrap().as_slice(), &[199.0, 99.0]);
}

#[test]
fn extent_grid_spans_start_to_finish() {
    let grid = RegularGrid::from_extent(&[-1.0, -1.0], &[1.0, 1.0], &[200, 100]).unwrap();
    assert!(close(&grid.coordinates(1).unwrap(), &[-1.0, -1.0]));
    assert!(close(&grid.coordinates(grid.npoints()).unwrap(), &[1.0, 1.0]));
}

#[test]
fn nearest_location_roundtrips_every_node() {
    let grid = RegularGrid::new(&[17, 9, 4], &[-3.0, 0.5, 100.0], &[0.3, 1.7, 25.0]).unwrap();
    for location in 1..=grid.npoints() {
        let c = grid.coordinates(location).unwrap();
        assert_eq!(grid.nearest_location(&c).unwrap(), location);
    }
}

#[test]
fn nearest_location_clamps_instead_of_failing() {
    // Points outside the grid snap to the closest boundary node.
    let grid = RegularGrid::from_extent(&[0.0, 0.0], &[10.0, 10.0], &[11, 11]).unwrap();
    let corner = grid.nearest_location(&[500.0, -500.0]).unwrap();
    assert_eq!(corner, 11);
    let edge = grid.nearest_location(&[5.2, 1e12]).unwrap();
    assert_eq!(grid.coordinates(edge).unwrap().as_slice(), &[5.0, 10.0]);
}

#[test]
fn bounding_grid_of_point_set() {
    let ps = PointSet::from_points(&[
        [0.25, -4.0, 10.0],
        [3.5, 2.0, 11.0],
        [-1.0, 0.0, 10.5],
        [2.0, 8.0, 12.0],
    ])
    .unwrap();
    let grid = bounding_grid(&ps, &[10, 10, 5]).unwrap();
    let (lo, hi) = grid.extent();
    assert_eq!(lo.as_slice(), &[-1.0, -4.0, 10.0]);
    assert!(close(&hi, &[3.5, 8.0, 12.0]));
}

#[test]
fn domains_are_usable_as_trait_objects() {
    let grid = RegularGrid::<f64>::with_dims(&[3, 3]).unwrap();
    let ps = PointSet::from_points(&[[0.0, 0.0]]).unwrap();
    let domains: Vec<Box<dyn Domain<Scalar = f64>>> = vec![Box::new(grid), Box::new(ps)];
    let counts: Vec<usize> = domains.iter().map(|d| d.npoints()).collect();
    assert_eq!(counts, vec![9, 1]);
    assert!(matches!(
        domains[1].coordinates(2),
        Err(DomainError::LocationOutOfRange { .. })
    ));
}
