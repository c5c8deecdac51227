//! Builder pattern API for invitation runs.
//!
//! Provides a fluent interface for configuring and running a traversal:
//!
//! ```rust,ignore
//! use circles_core::prelude::*;
//!
//! let invited = Guestlist::from_roster("friends.json")?
//!     .filter(FilterKind::Female)
//!     .max_circles(2)
//!     .invite_all();
//!
//! for person in &invited {
//!     println!("Invite: {}", person.name);
//! }
//! ```

use std::path::Path;

use crate::error::CirclesResult;
use crate::filter::FilterKind;
use crate::iter::InviteIterator;
use crate::person::Person;
use crate::roster::load_roster;
use crate::traverse::invite_list;

/// Builder for configuring an invitation run.
#[derive(Debug, Clone)]
pub struct Guestlist {
    /// The full roster the traversal runs over
    people: Vec<Person>,

    /// Filter applied to each discovered person
    filter: FilterKind,

    /// Circle ceiling; `None` runs until exhaustion
    max_circles: Option<usize>,
}

impl Guestlist {
    /// Create a builder over an in-memory roster.
    pub fn new(people: impl Into<Vec<Person>>) -> Self {
        Self {
            people: people.into(),
            filter: FilterKind::default(),
            max_circles: None,
        }
    }

    /// Create a builder from a JSON roster file.
    pub fn from_roster(path: impl AsRef<Path>) -> CirclesResult<Self> {
        Ok(Self::new(load_roster(path.as_ref())?))
    }

    /// Select the filter applied to the invitation list.
    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter = kind;
        self
    }

    /// Bound the traversal to at most `max` circles.
    pub fn max_circles(mut self, max: usize) -> Self {
        self.max_circles = Some(max);
        self
    }

    /// Run the traversal and return a pull-based iterator over the result.
    pub fn invite(&self) -> InviteIterator {
        match self.max_circles {
            Some(max) => InviteIterator::bounded(&self.people, self.filter.as_filter(), max),
            None => InviteIterator::new(&self.people, self.filter.as_filter()),
        }
    }

    /// Run the traversal and return the full invitation list.
    pub fn invite_all(&self) -> Vec<Person> {
        invite_list(&self.people, self.filter.as_filter(), self.max_circles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Gender;

    fn person(name: &str, gender: Gender, best: bool, friends: &[&str]) -> Person {
        let mut p = Person::new(name, gender);
        p.best = best;
        p.friends = friends.iter().map(|s| s.to_string()).collect();
        p
    }

    fn sample() -> Vec<Person> {
        vec![
            person("Alice", Gender::Female, true, &["Bob"]),
            person("Bob", Gender::Male, false, &["Alice", "Carol"]),
            person("Carol", Gender::Female, false, &["Bob"]),
        ]
    }

    #[test]
    fn test_builder_defaults_invite_everyone() {
        let invited = Guestlist::new(sample()).invite_all();
        let names: Vec<&str> = invited.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_builder_filter_and_ceiling_compose() {
        let invited = Guestlist::new(sample())
            .filter(FilterKind::Female)
            .max_circles(1)
            .invite_all();
        let names: Vec<&str> = invited.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn test_builder_invite_returns_iterator() {
        let mut it = Guestlist::new(sample()).filter(FilterKind::Male).invite();
        assert_eq!(it.next().unwrap().name, "Bob");
        assert!(it.done());
    }
}
