use crate::error::BuildError;
use crate::graph::{Graph, GridBuilder, GridConfig, Layout, Noise, Obstacles, Proximity};

use codec::CellId;
use pathway_geo::{GeoError, Metric, Region};

use approx::assert_relative_eq;
use geo::{Point, Rect, coord};

/// A `size x size` region split into unit cells.
fn unit_region(size: f64) -> Region {
    Region::new(Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: size, y: size }))
        .expect("region must be valid")
}

#[test_log::test]
fn open_grid_is_fully_connected() {
    let graph = Graph::build(GridBuilder::new(unit_region(3.0), GridConfig::new(3, 3)))
        .expect("graph must build");

    assert_eq!(graph.size(), 9);

    // 4 corners with 3 arcs, 4 edges with 5 arcs, one center with 8
    assert_eq!(graph.edge_count(), 4 * 3 + 4 * 5 + 8);
    assert_eq!(graph.neighbors(CellId::new(1, 1)).count(), 8);
    assert_eq!(graph.neighbors(CellId::new(0, 0)).count(), 3);
}

#[test]
fn cell_centers_and_costs() {
    let graph = Graph::build(GridBuilder::new(unit_region(3.0), GridConfig::new(3, 3)))
        .expect("graph must build");

    // Row zero lies along the northern edge
    let corner = graph.get_position(&CellId::new(0, 0)).unwrap();
    assert_relative_eq!(corner.x(), 0.5);
    assert_relative_eq!(corner.y(), 2.5);

    let orthogonal = graph.weight(CellId::new(1, 1), CellId::new(1, 2)).unwrap();
    let diagonal = graph.weight(CellId::new(1, 1), CellId::new(2, 2)).unwrap();

    assert_relative_eq!(orthogonal, 1.0);
    assert_relative_eq!(diagonal, std::f64::consts::SQRT_2);
}

#[test]
fn blocked_cells_have_no_arcs() {
    let blocked = CellId::new(1, 1);
    let builder = GridBuilder::new(unit_region(3.0), GridConfig::new(3, 3))
        .with_walkable([blocked].into_iter().collect::<Obstacles>());

    let graph = Graph::build(builder).expect("graph must build");

    // The blocked cell remains a node of the graph
    let node = graph.node(&blocked).expect("blocked cell is still a node");
    assert!(!node.walkable());

    assert_eq!(graph.neighbors(blocked).count(), 0);
    assert!(graph.edges().all(|edge| edge.target != blocked));
}

#[test_log::test]
fn anchors_are_forced_walkable() {
    let (start, goal) = (Point::new(0.0, 0.0), Point::new(9.0, 9.0));
    let builder = GridBuilder::between(start, goal, GridConfig::new(10, 10).with_padding(0.0))
        .expect("region must be valid")
        .with_walkable(Noise::new(1.0, 7));

    let graph = Graph::build(builder).expect("graph must build");

    let Layout::Grid(layout) = graph.layout() else {
        panic!("Expected a grid layout");
    };

    let walkable = graph.nodes().filter(|node| node.walkable()).collect::<Vec<_>>();
    assert_eq!(walkable.len(), 2);

    assert!(graph.node(&layout.cell_at(start)).unwrap().walkable());
    assert!(graph.node(&layout.cell_at(goal)).unwrap().walkable());
}

#[test_log::test]
fn distant_anchor_clamps_onto_border() {
    let blocked = [CellId::new(0, 0), CellId::new(4, 4)]
        .into_iter()
        .collect::<Obstacles>();

    let builder = GridBuilder::new(unit_region(5.0), GridConfig::new(5, 5))
        .with_walkable(blocked)
        .with_anchor(Point::new(-40.0, 60.0));

    let graph = Graph::build(builder).expect("graph must build");

    // The north-western corner is forced open, the other blocked cell is not
    assert!(graph.node(&CellId::new(0, 0)).unwrap().walkable());
    assert!(!graph.node(&CellId::new(4, 4)).unwrap().walkable());
    assert_eq!(graph.neighbors(CellId::new(0, 0)).count(), 3);
}

#[test]
fn noise_is_deterministic() {
    let build = |seed: u64| {
        let builder = GridBuilder::new(unit_region(20.0), GridConfig::new(20, 20))
            .with_walkable(Noise::new(0.3, seed));

        Graph::build(builder).expect("graph must build")
    };

    let occupancy = |graph: &Graph<CellId>| {
        graph
            .nodes()
            .map(|node| node.walkable())
            .collect::<Vec<_>>()
    };

    let (first, second) = (build(11), build(11));
    assert_eq!(occupancy(&first), occupancy(&second));
    assert_eq!(
        first.edges().collect::<Vec<_>>(),
        second.edges().collect::<Vec<_>>()
    );

    let blocked = occupancy(&first).iter().filter(|open| !**open).count();
    assert!(
        (60..=180).contains(&blocked),
        "Expected roughly 30% of 400 cells blocked, got {blocked}"
    );
}

#[test]
fn proximity_follows_reference_points() {
    let road = (0..10)
        .map(|x| Point::new(x as f64 + 0.5, 4.5))
        .collect::<Vec<_>>();

    let builder = GridBuilder::new(unit_region(10.0), GridConfig::new(10, 10))
        .with_walkable(Proximity::new(road, 1.0, Metric::Euclidean));

    let graph = Graph::build(builder).expect("graph must build");

    // Row 5 holds the road, rows 4 and 6 lie one unit away
    for node in graph.nodes() {
        let near = (4..=6).contains(&node.id.row);
        assert_eq!(node.walkable(), near, "Unexpected occupancy at {}", node.id);
    }
}

#[test]
fn degenerate_input_rejected() {
    let point = Point::new(3.0, 3.0);
    assert!(matches!(
        GridBuilder::between(point, point, GridConfig::default()),
        Err(BuildError::Geo(GeoError::ZeroSpan { .. }))
    ));

    let zero = GridBuilder::new(unit_region(1.0), GridConfig::new(0, 4));
    assert!(matches!(
        Graph::build(zero),
        Err(BuildError::InvalidDimensions { rows: 0, cols: 4 })
    ));

    let single = GridBuilder::new(unit_region(1.0), GridConfig::new(1, 1));
    assert!(matches!(
        Graph::build(single),
        Err(BuildError::TooFewPoints(1))
    ));
}

#[test]
fn cell_lookup_clamps() {
    let graph = Graph::build(GridBuilder::new(unit_region(4.0), GridConfig::new(4, 4)))
        .expect("graph must build");

    let Layout::Grid(layout) = graph.layout() else {
        panic!("Expected a grid layout");
    };

    assert_eq!(layout.cell_at(Point::new(0.1, 3.9)), CellId::new(0, 0));
    assert_eq!(layout.cell_at(Point::new(3.9, 0.1)), CellId::new(3, 3));
    assert_eq!(layout.cell_at(Point::new(-50.0, 50.0)), CellId::new(0, 0));
    assert_eq!(layout.cell_at(Point::new(50.0, -50.0)), CellId::new(3, 3));
    assert_eq!(layout.cell_at(Point::new(2.5, 2.5)), CellId::new(1, 2));
}
