//! Breadth-first circle traversal.
//!
//! The engine expands outward from the best-friend roots one circle at a
//! time. The visited set is seeded with the roots and grows monotonically,
//! so every person enters at most one circle and the loop terminates once
//! no unvisited friends remain (or the circle ceiling is reached).

use std::collections::HashSet;

use tracing::{debug, info};

use crate::filter::Filter;
use crate::graph::{build_graph, next_circle};
use crate::person::{build_index, Person};

/// Runs the traversal to completion and returns the invitation list:
/// circle order first, name order within a circle.
///
/// `max_circles` bounds how many circles may be expanded; `None` runs until
/// natural exhaustion. A ceiling of 0 yields an empty list.
///
/// The filter gates emission only. A person it rejects still contributes
/// their friends to the next circle.
pub fn invite_list(
    people: &[Person],
    filter: &dyn Filter,
    max_circles: Option<usize>,
) -> Vec<Person> {
    let index = build_index(people);
    let graph = build_graph(&index);

    // Circle 0: the best friends, in name order.
    let mut circle: Vec<&str> = people
        .iter()
        .filter(|p| p.best)
        .map(|p| p.name.as_str())
        .collect();
    circle.sort_unstable();
    circle.dedup();

    let mut visited: HashSet<&str> = circle.iter().copied().collect();
    let mut invited = Vec::new();
    let mut depth = 0usize;

    while !circle.is_empty() && max_circles.map_or(true, |max| depth < max) {
        for &name in &circle {
            let person = index[name];
            if filter.matches(person) {
                invited.push(person.clone());
            }
        }

        debug!(circle = depth, members = circle.len(), "expanded circle");

        let mut next = next_circle(&graph, &circle);
        next.retain(|name| !visited.contains(name));
        visited.extend(next.iter().copied());
        circle = next;
        depth += 1;
    }

    info!(invited = invited.len(), circles = depth, "traversal complete");
    invited
}
