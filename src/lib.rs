//! Member Search Library
//!
//! Typed member/team search over SQLite: a sparse search condition is
//! composed into a predicate, run as one left-joined query, and projected
//! into flat rows, optionally paged with a total count.

pub mod config;
pub mod domain;
pub mod infrastructure;
