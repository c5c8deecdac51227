//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use circles_core::prelude::*;
//! ```

// Core traversal types
pub use crate::error::{CirclesError, CirclesResult};
pub use crate::person::{build_index, Gender, Person};

// Filters
pub use crate::filter::{AcceptAll, FemaleFilter, Filter, FilterKind, MaleFilter};

// Traversal and iteration
pub use crate::iter::InviteIterator;
pub use crate::traverse::invite_list;

// Roster loading
pub use crate::roster::load_roster;

// Configuration
pub use crate::config::{load_config, CirclesConfig};

// Builder API
pub use crate::builder::Guestlist;
