//! Person data model and the name index used for neighbor resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Closed gender attribute carried by every person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A single person in the friend roster.
///
/// Records are immutable for the duration of a traversal; the engine only
/// ever reads them through the name index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name, used as the graph key
    pub name: String,
    /// Gender attribute, tested by the male/female filters
    pub gender: Gender,
    /// Marks a traversal root: best friends form circle 0
    #[serde(default)]
    pub best: bool,
    /// Declared friends by name. May reference names missing from the
    /// roster; such references produce no edge (see [`crate::graph`]).
    #[serde(default)]
    pub friends: Vec<String>,
}

impl Person {
    /// Creates a person with no friends, not marked best.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            best: false,
            friends: Vec::new(),
        }
    }
}

/// Mapping from person name to record, built once per traversal.
pub type PersonIndex<'a> = HashMap<&'a str, &'a Person>;

/// Builds the name index for O(1) neighbor resolution.
///
/// Last insertion wins on duplicate names; [`crate::roster::load_roster`]
/// rejects duplicates before a roster ever reaches this point.
pub fn build_index(people: &[Person]) -> PersonIndex<'_> {
    people.iter().map(|p| (p.name.as_str(), p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_index_resolves_by_name() {
        let people = vec![
            Person::new("Alice", Gender::Female),
            Person::new("Bob", Gender::Male),
        ];

        let index = build_index(&people);
        assert_eq!(index.len(), 2);
        assert_eq!(index["Alice"].gender, Gender::Female);
        assert_eq!(index["Bob"].gender, Gender::Male);
    }

    #[test]
    fn test_build_index_last_duplicate_wins() {
        let mut first = Person::new("Alice", Gender::Female);
        first.best = true;
        let second = Person::new("Alice", Gender::Female);

        let people = vec![first, second];
        let index = build_index(&people);
        assert_eq!(index.len(), 1);
        assert!(!index["Alice"].best);
    }

    #[test]
    fn test_gender_deserializes_lowercase() {
        let person: Person =
            serde_json::from_str(r#"{"name": "Bob", "gender": "male"}"#).unwrap();
        assert_eq!(person.gender, Gender::Male);
        assert!(!person.best);
        assert!(person.friends.is_empty());
    }
}
