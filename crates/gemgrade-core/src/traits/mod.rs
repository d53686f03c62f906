//! Seams to external collaborators.

pub mod lookup;

pub use lookup::{CellValue, EqualsPredicate, GradeLookup, LookupRow, RangePredicate};
