use crate::{CodecError, Payload, PointId, RawId};

use fixtures::{LETTERED_PAYLOAD, SAMPLE_PAYLOAD, SENSOR_PAYLOAD};

#[test_log::test]
fn parses_nodes_and_paths() {
    let payload = Payload::from_json(SAMPLE_PAYLOAD).expect("payload must parse");

    assert_eq!(payload.nodes.len(), 3);
    assert_eq!(payload.paths.len(), 3);

    let points = payload.points();
    assert_eq!(points[1].id, PointId(2));
    assert_eq!(points[1].position.x(), 15.0);

    let edges = payload.edges().collect::<Vec<_>>();
    assert_eq!(edges[1].source, PointId(2));
    assert_eq!(edges[1].target, PointId(3));
    assert_eq!(edges[1].weight, 7.5);

    // The sample payload carries no coverage radius
    assert!(payload.radii().is_none());
}

#[test_log::test]
fn radii_present_when_every_node_has_one() {
    let payload = Payload::from_json(SENSOR_PAYLOAD).expect("payload must parse");
    let radii = payload.radii().expect("every node declares a radius");

    assert_eq!(radii, vec![3.5, 2.0, 2.5, 2.0, 2.0, 2.0]);
    assert!(payload.paths.is_empty());
}

#[test_log::test]
fn named_identifiers_are_numbered_in_order() {
    let payload = Payload::from_json(LETTERED_PAYLOAD).expect("payload must parse");

    let ids = payload.points().iter().map(|node| node.id).collect::<Vec<_>>();
    assert_eq!(ids, (0..6).map(PointId).collect::<Vec<_>>());

    let edges = payload.edges().collect::<Vec<_>>();
    assert_eq!(edges.len(), 7);
    assert_eq!((edges[6].source, edges[6].target), (PointId(1), PointId(4)));

    assert_eq!(payload.name_of(PointId(3)).as_deref(), Some("D"));
    assert_eq!(payload.name_of(PointId(6)), None);
    assert_eq!(payload.paths[0].id, Some(RawId::Name("ab".to_string())));
}

#[test]
fn names_are_numbered_above_numeric_identifiers() {
    let data = r#"{
        "nodes": [
            { "node_id": "gateway", "x": 0.0, "y": 0.0 },
            { "node_id": 4, "x": 1.0, "y": 0.0 },
            { "node_id": "relay", "x": 2.0, "y": 0.0 }
        ],
        "paths": [
            { "start_id": "gateway", "end_id": "4", "length": 1.0 },
            { "start_id": 4, "end_id": "sink", "length": 1.0 }
        ]
    }"#;

    let payload = Payload::from_json(data).expect("payload must parse");
    let table = payload.identifiers();

    assert_eq!(table["gateway"], PointId(5));
    assert_eq!(table["4"], PointId(4));
    assert_eq!(table["relay"], PointId(6));
    assert_eq!(table["sink"], PointId(7));

    // A numeric name and a number refer to the same node
    let edges = payload.edges().collect::<Vec<_>>();
    assert_eq!(edges[0].target, PointId(4));
    assert_eq!(edges[1].source, PointId(4));
}

#[test]
fn duplicate_node_rejected() {
    let data = r#"{ "nodes": [
        { "node_id": 7, "x": 0.0, "y": 0.0 },
        { "node_id": "7", "x": 1.0, "y": 1.0 }
    ] }"#;

    assert!(matches!(
        Payload::from_json(data),
        Err(CodecError::DuplicateNode(id)) if id == "7"
    ));
}

#[test]
fn malformed_json_rejected() {
    let truncated = r#"{ "nodes": [{ "node_id": 1, "x": 0.0, "#;
    assert!(matches!(Payload::from_json(truncated), Err(CodecError::Json(_))));

    let missing = r#"{ "nodes": [{ "node_id": "a" }] }"#;
    assert!(matches!(Payload::from_json(missing), Err(CodecError::Json(_))));
}

#[test]
fn reads_from_reader() {
    let payload = Payload::from_reader(SAMPLE_PAYLOAD.as_bytes()).expect("payload must parse");
    assert_eq!(payload.paths[2].length, 10.2);
    assert_eq!(payload.paths[2].id, Some(RawId::Number(3)));
}
