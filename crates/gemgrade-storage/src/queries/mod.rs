//! Query modules for the grade tables.

pub mod grades;
pub mod lookup;
pub mod util;
