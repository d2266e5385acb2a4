//! End-to-end tests for the public build API.
//!
//! These exercise the documented scenarios: explicit placement with
//! the exact snapshot canvas, auto-placement, structural validation
//! failures, and the fetch-contract error paths, all through
//! `weft::build` + `Diagram::serialize`.

use weft::{
    Component, Endpoint, FetchError, IconFetcher, IconSet, Relation, Topology, WeftError,
};

/// Three components, two explicit relations; coordinates from the
/// reference deployment used by the snapshot contract.
fn sample_topology() -> Topology {
    Topology::new(
        vec![
            Component::at(
                "mongodb",
                "precise/mongodb-21",
                "940.5",
                "388.7698359714502",
            ),
            Component::at(
                "elasticsearch",
                "~charming-devs/precise/elasticsearch-2",
                "490.5",
                "369.7698359714502",
            ),
            Component::at(
                "charmworld",
                "~juju-jitsu/precise/charmworld-58",
                "813.5",
                "112.23016402854975",
            ),
        ],
        vec![
            Relation::new(
                Endpoint::with_role("charmworld", "essearch"),
                Endpoint::with_role("elasticsearch", "essearch"),
            ),
            Relation::new(
                Endpoint::with_role("charmworld", "database"),
                Endpoint::with_role("mongodb", "database"),
            ),
        ],
    )
}

fn icon_url(key: &str) -> String {
    format!("http://0.1.2.3/{key}.svg")
}

fn serialize(diagram: &weft::Diagram) -> String {
    let mut buffer = Vec::new();
    diagram.serialize(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

struct EmptyFetcher;

impl IconFetcher for EmptyFetcher {
    fn fetch_icons(&self, _: &Topology) -> Result<IconSet, FetchError> {
        Ok(IconSet::new())
    }
}

struct ErrFetcher(&'static str);

impl IconFetcher for ErrFetcher {
    fn fetch_icons(&self, _: &Topology) -> Result<IconSet, FetchError> {
        Err(self.0.into())
    }
}

struct MapFetcher(IconSet);

impl IconFetcher for MapFetcher {
    fn fetch_icons(&self, _: &Topology) -> Result<IconSet, FetchError> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_explicit_positions_produce_snapshot_canvas() {
    let diagram = weft::build(&sample_topology(), icon_url, None).unwrap();

    assert_eq!(diagram.width(), 631);
    assert_eq!(diagram.height(), 457);

    let svg = serialize(&diagram);
    assert!(svg.starts_with("<?xml version=\"1.0\"?>\n<!-- Generated by weft -->\n"));
    assert!(svg.contains("viewBox=\"0 0 631 457\""));
    assert!(svg.contains("transform=\"translate(450,276)\""), "mongodb translation");
    assert!(svg.contains("transform=\"translate(0,257)\""), "elasticsearch translation");
    assert!(svg.contains("transform=\"translate(323,0)\""), "charmworld translation");
}

#[test]
fn test_relations_render_line_indicator_and_ticks() {
    let svg = serialize(&weft::build(&sample_topology(), icon_url, None).unwrap());

    assert!(svg.contains("<title>charmworld:essearch elasticsearch:essearch</title>"));
    assert!(svg.contains("<title>charmworld:database mongodb:database</title>"));
    assert_eq!(svg.matches("stroke-dasharray").count(), 2);
    // charmworld-elasticsearch centers sit 412.77 apart; the trimmed
    // 232.77-unit segment renders as dash/gap/dash with the 16-unit
    // gap centered, so each dash is (232.77 - 16) / 2.
    assert!(svg.contains("stroke-dasharray=\"108.38, 16\""));
    assert_eq!(svg.matches("xlink:href=\"#indicator\"").count(), 2);
    // Nine circles: the mask, three component blocks, the indicator
    // glyph's own circle, and two tick marks per relation.
    assert_eq!(svg.matches("<circle").count(), 9);
}

#[test]
fn test_no_fetcher_uses_external_references_only() {
    let svg = serialize(&weft::build(&sample_topology(), icon_url, None).unwrap());

    for key in [
        "precise/mongodb-21",
        "~charming-devs/precise/elasticsearch-2",
        "~juju-jitsu/precise/charmworld-58",
    ] {
        let reference = format!("xlink:href=\"http://0.1.2.3/{key}.svg\"");
        assert!(svg.contains(&reference), "missing external reference for {key}");
    }
    assert!(!svg.contains("id=\"icon-1\""), "no inline definitions expected");
}

#[test]
fn test_empty_fetch_result_falls_back_per_component() {
    let svg = serialize(&weft::build(&sample_topology(), icon_url, Some(&EmptyFetcher)).unwrap());

    assert_eq!(svg.matches("<image").count(), 3);
    assert!(!svg.contains("id=\"icon-1\""));
}

#[test]
fn test_fetched_icons_are_embedded_inline() {
    let mut icons = IconSet::new();
    icons.insert(
        "precise/mongodb-21".to_string(),
        b"<svg><circle r=\"1\"/></svg>".to_vec(),
    );
    let fetcher = MapFetcher(icons);

    let svg = serialize(&weft::build(&sample_topology(), icon_url, Some(&fetcher)).unwrap());

    // mongodb is inline via the first definition id...
    assert!(svg.contains("id=\"icon-1\""));
    assert!(svg.contains("xlink:href=\"#icon-1\""));
    assert!(svg.contains("<svg><circle r=\"1\"/></svg>"));
    // ...the other two fall back to external references.
    assert_eq!(svg.matches("<image").count(), 2);
    assert!(!svg.contains("xlink:href=\"http://0.1.2.3/precise/mongodb-21.svg\""));
}

#[test]
fn test_shared_icon_key_is_defined_once_and_reused() {
    let mut topology = sample_topology();
    topology
        .components
        .push(Component::new("mongodb-replica", "precise/mongodb-21"));

    let mut icons = IconSet::new();
    icons.insert(
        "precise/mongodb-21".to_string(),
        b"<svg><circle r=\"1\"/></svg>".to_vec(),
    );
    let fetcher = MapFetcher(icons);

    let svg = serialize(&weft::build(&topology, icon_url, Some(&fetcher)).unwrap());

    // One definition for the shared key, one <use> per component.
    assert_eq!(svg.matches("id=\"icon-1\"").count(), 1);
    assert_eq!(svg.matches("xlink:href=\"#icon-1\"").count(), 2);
    assert!(!svg.contains("icon-2"));
}

#[test]
fn test_build_and_serialize_are_deterministic() {
    let first = serialize(&weft::build(&sample_topology(), icon_url, None).unwrap());
    let second = serialize(&weft::build(&sample_topology(), icon_url, None).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_unplaced_component_is_auto_placed_without_overlap() {
    let mut topology = sample_topology();
    let charmworld = topology.component_index("charmworld").unwrap();
    for value in topology.components[charmworld].annotations.values_mut() {
        value.clear();
    }

    let diagram = weft::build(&topology, icon_url, None).unwrap();
    let layout = diagram.layout();

    for i in 0..3 {
        for j in (i + 1)..3 {
            let distance = layout.center(i).distance(layout.center(j));
            assert!(distance >= 180.0, "components {i} and {j} overlap");
        }
    }

    // The still-placed pair keeps its relative offset.
    let mongodb = layout.position(topology.component_index("mongodb").unwrap());
    let elasticsearch = layout.position(topology.component_index("elasticsearch").unwrap());
    let offset = mongodb.sub_point(elasticsearch);
    assert_eq!((offset.x(), offset.y()), (450.0, 19.0));

    // Canvas is recomputed around the new bounding box.
    assert!(diagram.width() >= 631);
    assert!(diagram.height() < 457);
}

#[test]
fn test_relation_to_unknown_component_fails() {
    let mut topology = sample_topology();
    topology.relations[0].endpoints[0].component = "evil-unknown-component".to_string();

    let err = weft::build(&topology, icon_url, None).unwrap_err();
    assert!(matches!(err, WeftError::Topology(_)));
    assert!(err.to_string().starts_with("invalid topology:"));
}

#[test]
fn test_half_set_position_fails_naming_the_component() {
    let mut topology = sample_topology();
    let charmworld = topology.component_index("charmworld").unwrap();
    topology.components[charmworld]
        .annotations
        .remove(weft::Y_ANNOTATION);

    let err = weft::build(&topology, icon_url, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "component \"charmworld\" does not have a valid position"
    );
}

#[test]
fn test_fetcher_error_is_surfaced_verbatim() {
    let err = weft::build(&sample_topology(), icon_url, Some(&ErrFetcher("bad-wolf"))).unwrap_err();
    assert!(matches!(err, WeftError::IconFetch(_)));
    assert_eq!(err.to_string(), "bad-wolf");
}

#[test]
fn test_line_endpoints_lie_on_circle_boundaries() {
    let diagram = weft::build(&sample_topology(), icon_url, None).unwrap();
    let layout = diagram.layout();
    let topology = sample_topology();

    for relation in &topology.relations {
        let a = layout.center(topology.component_index(&relation.endpoints[0].component).unwrap());
        let b = layout.center(topology.component_index(&relation.endpoints[1].component).unwrap());
        let connector = weft::connector::connect(a, b, 90.0, 16.0);

        assert!((a.distance(connector.start()) - 90.0).abs() < 0.01);
        assert!((b.distance(connector.end()) - 90.0).abs() < 0.01);
    }
}
