//! Roster loading from JSON.
//!
//! A roster is a JSON array of person records:
//!
//! ```json
//! [
//!   { "name": "Alice", "gender": "female", "best": true, "friends": ["Bob"] },
//!   { "name": "Bob", "gender": "male", "friends": ["Alice", "Carol"] }
//! ]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{CirclesError, CirclesResult, IoResultExt};
use crate::person::Person;

/// Loads a friend roster from a JSON file.
///
/// Duplicate names are rejected: the traversal indexes people by name, and
/// a roster with two records for the same person is ambiguous. Unknown
/// friend references are allowed here; they drop out at graph-build time.
pub fn load_roster(path: &Path) -> CirclesResult<Vec<Person>> {
    let content = fs::read_to_string(path).with_path(path)?;
    let people: Vec<Person> =
        serde_json::from_str(&content).map_err(|e| CirclesError::parse(path, e.to_string()))?;

    let mut seen = HashSet::new();
    for person in &people {
        if !seen.insert(person.name.as_str()) {
            return Err(CirclesError::invalid_argument(format!(
                "duplicate name '{}' in roster {}",
                person.name,
                path.display()
            )));
        }
    }

    Ok(people)
}
