//! Shared layouts and payloads used across the workspace tests and benches.

/// A `(x, y, coverage radius)` sensor position.
pub type Sensor = (f64, f64, f64);

/// Six sensors on a 2x3 lattice with 2 unit spacing, labelled A-F:
///
/// ```text
/// F(0,2) --- E(2,2) --- D(4,2)
///   |          |          |
/// A(0,0) --- B(2,0) --- C(4,0)
/// ```
///
/// With mutual coverage the two cheapest routes from A to D are
/// `A-B-C-D` and `A-F-E-D`, both of cost 6.
pub const SENSOR_LAYOUT: [Sensor; 6] = [
    (0.0, 0.0, 3.5),
    (2.0, 0.0, 2.0),
    (4.0, 0.0, 2.5),
    (4.0, 2.0, 2.0),
    (2.0, 2.0, 2.0),
    (0.0, 2.0, 2.0),
];

pub const A: usize = 0;
pub const B: usize = 1;
pub const C: usize = 2;
pub const D: usize = 3;
pub const E: usize = 4;
pub const F: usize = 5;

/// A long-range sensor beside a short-range one: A reaches B, B cannot answer.
pub const ONE_WAY_LAYOUT: [Sensor; 2] = [(0.0, 0.0, 5.0), (3.0, 0.0, 2.0)];

/// Three sensors with unequal radii which all reach one another.
pub const TRIANGLE_LAYOUT: [Sensor; 3] = [(0.0, 0.0, 1.5), (1.0, 0.0, 2.0), (0.0, 1.0, 1.5)];

/// Two sensors far outside of one another's coverage.
pub const DISCONNECTED_LAYOUT: [Sensor; 2] = [(0.0, 0.0, 1.0), (100.0, 0.0, 1.0)];

/// A three node, three path directed payload.
pub const SAMPLE_PAYLOAD: &str = r#"{
  "nodes": [
    { "node_id": 1, "x": 10, "y": 20 },
    { "node_id": 2, "x": 15, "y": 25 },
    { "node_id": 3, "x": 30, "y": 40 }
  ],
  "paths": [
    { "id": 1, "start_id": 1, "end_id": 2, "length": 5.0 },
    { "id": 2, "start_id": 2, "end_id": 3, "length": 7.5 },
    { "id": 3, "start_id": 1, "end_id": 3, "length": 10.2 }
  ]
}"#;

/// [`SENSOR_LAYOUT`] expressed as a payload, identifiers 0 through 5.
pub const SENSOR_PAYLOAD: &str = r#"{
  "nodes": [
    { "node_id": 0, "x": 0, "y": 0, "r": 3.5 },
    { "node_id": 1, "x": 2, "y": 0, "r": 2.0 },
    { "node_id": 2, "x": 4, "y": 0, "r": 2.5 },
    { "node_id": 3, "x": 4, "y": 2, "r": 2.0 },
    { "node_id": 4, "x": 2, "y": 2, "r": 2.0 },
    { "node_id": 5, "x": 0, "y": 2, "r": 2.0 }
  ]
}"#;

/// [`SENSOR_LAYOUT`] as a lettered payload whose paths follow the lattice.
pub const LETTERED_PAYLOAD: &str = r#"{
  "nodes": [
    { "node_id": "A", "x": 0, "y": 0 },
    { "node_id": "B", "x": 2, "y": 0 },
    { "node_id": "C", "x": 4, "y": 0 },
    { "node_id": "D", "x": 4, "y": 2 },
    { "node_id": "E", "x": 2, "y": 2 },
    { "node_id": "F", "x": 0, "y": 2 }
  ],
  "paths": [
    { "id": "ab", "start_id": "A", "end_id": "B", "length": 2.0 },
    { "id": "bc", "start_id": "B", "end_id": "C", "length": 2.0 },
    { "id": "cd", "start_id": "C", "end_id": "D", "length": 2.0 },
    { "id": "de", "start_id": "D", "end_id": "E", "length": 2.0 },
    { "id": "ef", "start_id": "E", "end_id": "F", "length": 2.0 },
    { "id": "fa", "start_id": "F", "end_id": "A", "length": 2.0 },
    { "id": "be", "start_id": "B", "end_id": "E", "length": 2.0 }
  ]
}"#;

/// Street intersections around central Sydney as `(lng, lat)` degrees.
pub const SYDNEY_INTERSECTIONS: [(f64, f64); 8] = [
    (151.2070, -33.8688),
    (151.2093, -33.8675),
    (151.2112, -33.8690),
    (151.2101, -33.8712),
    (151.2078, -33.8721),
    (151.2055, -33.8705),
    (151.2124, -33.8669),
    (151.2046, -33.8672),
];
