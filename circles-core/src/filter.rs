//! Invitation filters.
//!
//! A filter decides whether a person discovered by the traversal is emitted
//! into the invitation list. Filtering never affects expansion: a person the
//! filter rejects still contributes their friends to the next circle.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::CirclesError;
use crate::person::{Gender, Person};

/// Boolean test applied to each person before inclusion in the result.
///
/// Implementations must be pure: no side effects, no error conditions.
pub trait Filter {
    fn matches(&self, person: &Person) -> bool;
}

/// Accepts everyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Filter for AcceptAll {
    fn matches(&self, _person: &Person) -> bool {
        true
    }
}

/// Accepts only male friends.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaleFilter;

impl Filter for MaleFilter {
    fn matches(&self, person: &Person) -> bool {
        person.gender == Gender::Male
    }
}

/// Accepts only female friends.
#[derive(Debug, Clone, Copy, Default)]
pub struct FemaleFilter;

impl Filter for FemaleFilter {
    fn matches(&self, person: &Person) -> bool {
        person.gender == Gender::Female
    }
}

/// Closed filter selector used by configuration files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    All,
    Male,
    Female,
}

impl FilterKind {
    /// Resolve the selector to a filter instance.
    pub fn as_filter(self) -> &'static dyn Filter {
        match self {
            FilterKind::All => &AcceptAll,
            FilterKind::Male => &MaleFilter,
            FilterKind::Female => &FemaleFilter,
        }
    }
}

impl FromStr for FilterKind {
    type Err = CirclesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(CirclesError::invalid_argument(format!(
                "unknown filter '{}' (expected all, male or female)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new("Alice", Gender::Female)
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.matches(&alice()));
    }

    #[test]
    fn test_gender_filters() {
        assert!(!MaleFilter.matches(&alice()));
        assert!(FemaleFilter.matches(&alice()));
    }

    #[test]
    fn test_kind_resolves_to_matching_filter() {
        assert!(FilterKind::All.as_filter().matches(&alice()));
        assert!(!FilterKind::Male.as_filter().matches(&alice()));
        assert!(FilterKind::Female.as_filter().matches(&alice()));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("male".parse::<FilterKind>().unwrap(), FilterKind::Male);
        assert_eq!("all".parse::<FilterKind>().unwrap(), FilterKind::All);
        assert!(matches!(
            "banana".parse::<FilterKind>(),
            Err(CirclesError::InvalidArgument { .. })
        ));
    }
}
