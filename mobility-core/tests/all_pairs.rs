//! End-to-end tests for the all-pairs path engine.
//!
//! Each test builds a small network from raw records, runs the fixpoint
//! engine and checks the convergence properties of the resulting matrix.

use mobility_core::prelude::*;

fn directory(ids: &[&str]) -> NodeDirectory {
    ids.iter()
        .map(|id| {
            (
                (*id).to_string(),
                NetworkNode {
                    name: format!("node {id}"),
                    description: None,
                    coords: None,
                },
            )
        })
        .collect()
}

fn edge(from: &str, to: &str, time: Time) -> EdgeRecord {
    EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        time,
        text: None,
    }
}

fn edge_with_text(from: &str, to: &str, time: Time, text: &str) -> EdgeRecord {
    EdgeRecord {
        text: Some(text.to_string()),
        ..edge(from, to, time)
    }
}

/// Undirected triangle where the detour A-B-C beats the direct A-C edge.
fn triangle() -> (NodeDirectory, EdgeSource) {
    let nodes = directory(&["A", "B", "C"]);
    let edges = EdgeSource {
        directed: false,
        edges: vec![edge("A", "B", 5.0), edge("B", "C", 3.0), edge("A", "C", 20.0)],
    };
    (nodes, edges)
}

#[test]
fn detour_beats_direct_edge() {
    let (nodes, edges) = triangle();
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let a = matrix.index_of("A").unwrap();
    let b = matrix.index_of("B").unwrap();
    let c = matrix.index_of("C").unwrap();

    let entry = matrix.entry(a, c);
    assert_eq!(entry.time, 8.0);
    assert_eq!(entry.path.as_deref(), Some(&[a, b, c][..]));
}

#[test]
fn self_entries_stay_zero() {
    let (nodes, edges) = triangle();
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    for i in 0..matrix.node_count() {
        assert_eq!(matrix.entry(i, i).time, 0.0);
        assert_eq!(matrix.entry(i, i).path.as_deref(), Some(&[i][..]));
    }
}

#[test]
fn undirected_matrix_is_symmetric() {
    let (nodes, edges) = triangle();
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    for s in 0..matrix.node_count() {
        for t in 0..matrix.node_count() {
            assert_eq!(matrix.entry(s, t).time, matrix.entry(t, s).time);
        }
    }
}

#[test]
fn triangle_inequality_holds_after_convergence() {
    let (nodes, edges) = triangle();
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let n = matrix.node_count();
    for s in 0..n {
        for t in 0..n {
            for k in 0..n {
                assert!(
                    matrix.entry(s, t).time <= matrix.entry(s, k).time + matrix.entry(k, t).time
                );
            }
        }
    }
}

#[test]
fn paths_start_at_source_end_at_target_and_sum_to_time() {
    let (nodes, edges) = triangle();
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let n = matrix.node_count();
    for s in 0..n {
        for t in 0..n {
            let entry = matrix.entry(s, t);
            let path = entry.path.as_deref().expect("triangle is connected");
            assert_eq!(path[0], s);
            assert_eq!(*path.last().unwrap(), t);

            let hop_sum: Time = path
                .windows(2)
                .map(|pair| matrix.entry(pair[0], pair[1]).time)
                .sum();
            assert_eq!(entry.time, hop_sum);
        }
    }
}

#[test]
fn recomputation_is_idempotent() {
    let (nodes, edges) = triangle();
    let first = all_pairs_matrix(&nodes, &edges).unwrap();
    let second = all_pairs_matrix(&nodes, &edges).unwrap();

    assert_eq!(first, second);
}

#[test]
fn engine_reports_at_least_one_round() {
    let (nodes, edges) = triangle();
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    assert!(matrix.rounds() >= 1);
}

#[test]
fn disconnected_pairs_stay_unreachable() {
    let mut nodes = directory(&["A", "B"]);
    nodes.extend(directory(&["D"]));
    let edges = EdgeSource {
        directed: false,
        edges: vec![edge("A", "B", 5.0)],
    };
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let a = matrix.index_of("A").unwrap();
    let d = matrix.index_of("D").unwrap();
    let entry = matrix.entry(a, d);
    assert!(!entry.is_reachable());
    assert_eq!(entry.path, None);
    assert_eq!(entry.text, None);
    assert_eq!(matrix.reachable_pairs(), 5);
}

#[test]
fn directed_edges_are_not_mirrored() {
    let nodes = directory(&["A", "B"]);
    let edges = EdgeSource {
        directed: true,
        edges: vec![edge("A", "B", 5.0)],
    };
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let a = matrix.index_of("A").unwrap();
    let b = matrix.index_of("B").unwrap();
    assert_eq!(matrix.entry(a, b).time, 5.0);
    assert!(!matrix.entry(b, a).is_reachable());
}

#[test]
fn route_text_concatenates_segments_with_fallback() {
    let nodes = directory(&["A", "B", "C"]);
    let edges = EdgeSource {
        directed: false,
        edges: vec![edge_with_text("A", "B", 5.0, "take tram 3"), edge("B", "C", 3.0)],
    };
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let a = matrix.index_of("A").unwrap();
    let c = matrix.index_of("C").unwrap();
    assert_eq!(
        matrix.entry(a, c).text.as_deref(),
        Some("take tram 3 | Go B -> C")
    );
    // Self pairs carry no description
    assert_eq!(matrix.entry(a, a).text, None);
}

#[test]
fn fixpoint_stops_after_first_clean_round() {
    let nodes = directory(&["A", "B", "C", "D", "E"]);
    let edges = EdgeSource {
        directed: true,
        edges: vec![
            edge("E", "A", 1.0),
            edge("D", "E", 1.0),
            edge("C", "D", 1.0),
            edge("B", "C", 1.0),
            edge("A", "B", 1.0),
        ],
    };
    let matrix = all_pairs_matrix(&nodes, &edges).unwrap();

    let a = matrix.index_of("A").unwrap();
    let e = matrix.index_of("E").unwrap();
    assert_eq!(matrix.entry(a, e).time, 4.0);
    assert_eq!(matrix.entry(e, a).time, 1.0);
    // Every ordered pair of the cycle is reachable
    assert_eq!(matrix.reachable_pairs(), 25);
    // Round one improves entries, round two detects the fixpoint
    assert_eq!(matrix.rounds(), 2);
}
