use crate::error::LocateError;
use crate::graph::{Graph, GridBuilder, GridConfig, Locate, RadiusBuilder, RadiusConfig};

use codec::{CellId, PointId};
use fixtures::{DISCONNECTED_LAYOUT, SYDNEY_INTERSECTIONS};
use pathway_geo::{Metric, Region};

use approx::assert_relative_eq;
use geo::{Point, Rect, coord};

fn disconnected() -> Graph<PointId> {
    let points = DISCONNECTED_LAYOUT.map(|(x, y, _)| Point::new(x, y));
    Graph::build(RadiusBuilder::new(points, RadiusConfig::uniform(1.0))).expect("graph must build")
}

#[test_log::test]
fn distant_point_is_not_found() {
    let graph = disconnected();

    let far = Point::new(-1000.0, 0.0);
    let result = graph.locate(far, Some(250.0));

    match result {
        Err(LocateError::NotFound {
            distance,
            max_distance,
        }) => {
            assert_relative_eq!(distance, 1000.0);
            assert_relative_eq!(max_distance, 250.0);
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }

    // Unbounded lookups always snap
    assert_eq!(graph.locate(far, None), Ok(PointId(0)));
}

#[test]
fn nearby_point_snaps_to_nearest() {
    let graph = disconnected();

    assert_eq!(graph.locate(Point::new(10.0, 3.0), Some(250.0)), Ok(PointId(0)));
    assert_eq!(graph.locate(Point::new(60.0, -3.0), Some(250.0)), Ok(PointId(1)));

    let (node, distance) = graph.scan_node(Point::new(97.0, 4.0)).unwrap();
    assert_eq!(node.id, PointId(1));
    assert_relative_eq!(distance, 5.0);
}

#[test]
fn grid_points_interpolate() {
    let region = Region::new(Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }))
        .expect("region must be valid");
    let graph = Graph::build(GridBuilder::new(region, GridConfig::new(5, 5)))
        .expect("graph must build");

    assert_eq!(graph.locate(Point::new(1.0, 9.0), Some(0.0)), Ok(CellId::new(0, 0)));
    assert_eq!(graph.locate(Point::new(9.0, 1.0), None), Ok(CellId::new(4, 4)));

    // Points outside of the region clamp onto the border, ignoring the snap distance
    assert_eq!(graph.locate(Point::new(500.0, 5.0), Some(1.0)), Ok(CellId::new(2, 4)));
}

#[test]
fn great_circle_lookup() {
    let points = SYDNEY_INTERSECTIONS.map(|(lng, lat)| Point::new(lng, lat));
    let config = RadiusConfig::uniform(300.0).with_metric(Metric::Haversine);
    let graph = Graph::build(RadiusBuilder::new(points, config)).expect("graph must build");

    let target = points[3];
    let query = Point::new(target.x() + 0.0001, target.y());

    let (node, distance) = graph.scan_node(query).unwrap();
    assert_eq!(node.id, PointId(3));
    assert!(distance < 15.0, "Expected a ~9m snap, got {distance}m");

    assert_eq!(graph.locate(query, Some(50.0)), Ok(PointId(3)));
    assert!(matches!(
        graph.locate(query, Some(1.0)),
        Err(LocateError::NotFound { .. })
    ));
}

#[test]
fn scan_within_distance() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(5.0, 5.0),
    ];
    let graph = Graph::build(RadiusBuilder::new(points, RadiusConfig::uniform(1.0)))
        .expect("graph must build");

    let mut found = graph
        .scan_nodes(Point::new(0.0, 0.0), 2.5)
        .map(|node| node.id)
        .collect::<Vec<_>>();
    found.sort();

    assert_eq!(found, vec![PointId(0), PointId(1), PointId(2)]);
}

#[test]
fn invalid_bounds_are_rejected() {
    let graph = disconnected();
    let near = Point::new(1.0, 0.0);

    for bound in [-1.0, f64::NAN] {
        assert!(matches!(
            graph.locate(near, Some(bound)),
            Err(LocateError::InvalidDistance(_))
        ));
        assert_eq!(graph.scan_nodes(near, bound).count(), 0);
    }

    let points = SYDNEY_INTERSECTIONS.map(|(lng, lat)| Point::new(lng, lat));
    let config = RadiusConfig::uniform(300.0).with_metric(Metric::Haversine);
    let geographic = Graph::build(RadiusBuilder::new(points, config)).expect("graph must build");
    assert_eq!(geographic.scan_nodes(points[0], -1.0).count(), 0);

    // Unbounded scans still admit every node
    assert_eq!(graph.scan_nodes(near, f64::INFINITY).count(), 2);
}
