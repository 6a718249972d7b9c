//! Compliance rule profiles.
//!
//! Each submodule is one self-contained profile: a table of named rules plus
//! the predicates and pattern tables they share. Profiles never call each
//! other; the engine evaluates whichever table the caller selects.

pub mod retailer;
pub mod tesco;
