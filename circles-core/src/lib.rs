//! circles-core: friend-circle invitation engine.
//!
//! Computes an ordered invitation list from a social graph of friends by
//! expanding outward in breadth-first circles from the best-friend roots,
//! optionally filtered by a gender predicate and optionally bounded to a
//! maximum number of circles.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use circles_core::prelude::*;
//!
//! let people = load_roster(Path::new("friends.json"))?;
//! let mut invited = InviteIterator::new(&people, &FemaleFilter);
//!
//! while !invited.done() {
//!     println!("Invite: {}", invited.next().unwrap().name);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`person`]: Person records and the name index
//! - [`graph`]: Friendship graph construction and circle expansion
//! - [`traverse`]: Breadth-first traversal engine
//! - [`filter`]: Invitation filters (all / male / female)
//! - [`iter`]: Pull-based iteration over the invitation list
//! - [`roster`]: Roster loading from JSON
//! - [`config`]: circles.toml configuration
//! - [`report`]: Plain and JSON output
//! - [`builder`]: Fluent builder API
//! - [`error`]: Typed error handling

pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod iter;
pub mod logging;
pub mod person;
pub mod prelude;
pub mod report;
pub mod roster;
pub mod traverse;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{CirclesError, CirclesResult, IoResultExt};

// Data model
pub use person::{build_index, Gender, Person, PersonIndex};

// Filters
pub use filter::{AcceptAll, FemaleFilter, Filter, FilterKind, MaleFilter};

// Graph building and circle expansion
pub use graph::{build_graph, next_circle};

// Traversal engine
pub use traverse::invite_list;

// Iteration
pub use iter::InviteIterator;

// Roster loading
pub use roster::load_roster;

// Configuration
pub use config::{load_config, CirclesConfig, OutputConfig};

// Logging
pub use logging::{init_compact_logging, init_structured_logging};

// Reporting
pub use report::{print_json, print_plain};

// Builder API
pub use builder::Guestlist;
