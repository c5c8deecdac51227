//! Friendship graph construction and circle expansion.
//!
//! Performance characteristics:
//! - Graph build: O(|V| + |E|) where V = people, E = friendship edges
//! - Circle expansion: O(|E_c| log |E_c|) per circle, dominated by the sort

use crate::person::PersonIndex;
use petgraph::graphmap::DiGraphMap;
use std::collections::HashSet;
use tracing::debug;

/// Builds the friendship graph (DiGraphMap) from the person index.
///
/// Uses `DiGraphMap<&str, ()>` for memory efficiency:
/// - String slices avoid ownership/cloning overhead
/// - Unit type `()` for edges minimizes memory footprint
///
/// A friend declaration naming someone missing from the index produces no
/// edge: a roster may legitimately reference people outside the provided
/// set, so the reference is dropped rather than failing the run. Each drop
/// is logged at debug level.
pub fn build_graph<'a>(index: &PersonIndex<'a>) -> DiGraphMap<&'a str, ()> {
    let mut g = DiGraphMap::new();

    // 1. Add all nodes
    for name in index.keys() {
        g.add_node(*name);
    }

    // 2. Add all edges (declared friendships)
    for (name, person) in index {
        for friend in &person.friends {
            if index.contains_key(friend.as_str()) {
                g.add_edge(*name, friend.as_str(), ());
            } else {
                debug!(person = %name, friend = %friend, "dropping unknown friend reference");
            }
        }
    }

    g
}

/// Computes the next circle: the union of every current member's friends,
/// deduplicated (first occurrence wins), sorted by name ascending.
///
/// The caller subtracts already-visited names; this function only handles
/// union, dedup and ordering. Returns an empty vec when the current circle
/// is empty or none of its members have friends in the graph.
pub fn next_circle<'a>(g: &DiGraphMap<&'a str, ()>, current: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut next = Vec::new();

    for &name in current {
        for friend in g.neighbors(name) {
            if seen.insert(friend) {
                next.push(friend);
            }
        }
    }

    next.sort_unstable();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{build_index, Gender, Person};

    fn person(name: &str, friends: &[&str]) -> Person {
        let mut p = Person::new(name, Gender::Female);
        p.friends = friends.iter().map(|s| s.to_string()).collect();
        p
    }

    #[test]
    fn test_build_graph_basic() {
        let people = vec![person("Alice", &["Bob"]), person("Bob", &[])];
        let index = build_index(&people);

        let g = build_graph(&index);
        assert!(g.contains_node("Alice"));
        assert!(g.contains_node("Bob"));
        assert!(g.contains_edge("Alice", "Bob"));
    }

    #[test]
    fn test_build_graph_drops_unknown_friends() {
        let people = vec![person("Alice", &["Bob", "Zed"]), person("Bob", &[])];
        let index = build_index(&people);

        let g = build_graph(&index);
        assert!(!g.contains_node("Zed"));
        assert_eq!(g.all_edges().count(), 1);
    }

    #[test]
    fn test_next_circle_sorted_and_deduplicated() {
        let people = vec![
            person("Alice", &["Carol", "Bob"]),
            person("Dave", &["Bob"]),
            person("Bob", &[]),
            person("Carol", &[]),
        ];
        let index = build_index(&people);
        let g = build_graph(&index);

        // Bob is a friend of both Alice and Dave; he appears once, sorted.
        let next = next_circle(&g, &["Alice", "Dave"]);
        assert_eq!(next, vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_next_circle_empty_input() {
        let people = vec![person("Alice", &[])];
        let index = build_index(&people);
        let g = build_graph(&index);

        assert!(next_circle(&g, &[]).is_empty());
        assert!(next_circle(&g, &["Alice"]).is_empty());
    }
}
