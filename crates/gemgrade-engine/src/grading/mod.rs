//! Grade resolution against shape-specific lookup tables.

pub mod memory;
pub mod reduce;
pub mod resolver;
pub mod tables;

pub use memory::InMemoryLookup;
pub use resolver::{resolve_grades, GradeResolver};
pub use tables::{tables_for, GradeTables};
