//! # gemgrade-storage
//!
//! SQLite-backed grade lookup tables. Implements the `GradeLookup`
//! collaborator over per-shape KGS and bowtie tables.

pub mod connection;
pub mod lookup;
pub mod migrations;
pub mod queries;

pub use connection::LookupDatabase;
